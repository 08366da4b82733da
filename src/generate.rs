use crate::Rule;

/// Render `rule` in canonical form.
///
/// Parts are always emitted in the order `FREQ`, `INTERVAL`, `BYDAY`,
/// `BYMONTHDAY`, `UNTIL`, `COUNT`. An interval of 1 and empty lists are left
/// out.
pub(crate) fn generate(rule: &Rule) -> String {
    let mut parts = vec![format!("FREQ={}", rule.frequency)];

    if rule.interval > 1 {
        parts.push(format!("INTERVAL={}", rule.interval));
    }
    if !rule.by_day.is_empty() {
        let days: Vec<String> = rule.by_day.iter().map(ToString::to_string).collect();
        parts.push(format!("BYDAY={}", days.join(",")));
    }
    if !rule.by_month_day.is_empty() {
        let days: Vec<String> = rule.by_month_day.iter().map(ToString::to_string).collect();
        parts.push(format!("BYMONTHDAY={}", days.join(",")));
    }
    if let Some(until) = &rule.until {
        parts.push(format!("UNTIL={until}"));
    }
    if let Some(count) = rule.count {
        parts.push(format!("COUNT={count}"));
    }

    parts.join(";")
}
