use chrono::{Datelike, NaiveDate};

use crate::calendar::{last_occurrence_of_weekday_in_month, week_of_month};
use crate::parse::parse_ical_date;
use crate::{Frequency, MatchContext, Rule, Weekday, WeekdaySpec};

/// Decide whether `candidate` satisfies `rule`.
///
/// Returns `false` when `last_satisfied` is the same day as `candidate`, when
/// `candidate` falls after a readable `UNTIL` date, and for `YEARLY` rules.
/// The `UNTIL` date itself still matches. `INTERVAL` values above 1 need an
/// anchor date to be evaluated; use [`Rule::matches`] with
/// [`MatchContext::anchor`] for that. Without one, a daily rule with an
/// interval never matches and weekly or monthly rules ignore the interval.
///
/// # Example
///
/// ```
/// use cadence::{is_match, parse};
/// use chrono::NaiveDate;
///
/// let rule = parse("FREQ=MONTHLY;BYDAY=2FR").unwrap();
/// let second_friday = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
/// assert!(is_match(&rule, second_friday, None));
/// assert!(!is_match(&rule, second_friday, Some(second_friday)));
/// ```
#[must_use]
pub fn is_match(rule: &Rule, candidate: NaiveDate, last_satisfied: Option<NaiveDate>) -> bool {
    let mut ctx = MatchContext::new(candidate);
    if let Some(last) = last_satisfied {
        ctx = ctx.last_satisfied(last);
    }
    evaluate(rule, &ctx)
}

pub(crate) fn evaluate(rule: &Rule, ctx: &MatchContext) -> bool {
    let candidate = ctx.candidate();

    if ctx.last_satisfied_date() == Some(candidate) {
        return false;
    }

    if let Some(raw) = rule.until() {
        match parse_ical_date(raw) {
            Some(until) if candidate > until => return false,
            Some(_) => {}
            None => tracing::debug!(until = raw, "Unreadable UNTIL, treating rule as unbounded"),
        }
    }

    let on_pattern = match rule.frequency() {
        Frequency::Daily => true,
        Frequency::Weekly => rule.by_day().is_empty() || matches_by_day(rule.by_day(), candidate),
        Frequency::Monthly => {
            if !rule.by_month_day().is_empty() {
                let day = i32::try_from(candidate.day()).unwrap_or(i32::MAX);
                rule.by_month_day().contains(&day)
            } else if !rule.by_day().is_empty() {
                matches_by_day(rule.by_day(), candidate)
            } else {
                true
            }
        }
        Frequency::Yearly => {
            tracing::debug!("YEARLY rules are not evaluated");
            return false;
        }
    };

    on_pattern && within_interval(rule, ctx)
}

fn matches_by_day(specs: &[WeekdaySpec], candidate: NaiveDate) -> bool {
    specs.iter().any(|spec| matches_spec(*spec, candidate))
}

fn matches_spec(spec: WeekdaySpec, candidate: NaiveDate) -> bool {
    if Weekday::from(candidate.weekday()) != spec.day() {
        return false;
    }
    match spec.ordinal() {
        None => true,
        Some(n) if n > 0 => u32::try_from(n).is_ok_and(|n| n == week_of_month(candidate)),
        Some(n) => {
            let Some(last) =
                last_occurrence_of_weekday_in_month(candidate.year(), candidate.month(), spec.day())
            else {
                return false;
            };
            // Same weekday and month, so the gap is a whole number of weeks.
            let from_end = last.signed_duration_since(candidate).num_days() / 7 + 1;
            from_end == -i64::from(n)
        }
    }
}

fn within_interval(rule: &Rule, ctx: &MatchContext) -> bool {
    let candidate = ctx.candidate();
    let Some(anchor) = ctx.anchor_date() else {
        if rule.interval() > 1 && rule.frequency() == Frequency::Daily {
            tracing::debug!(
                interval = rule.interval(),
                "Daily interval needs an anchor date; not matching"
            );
            return false;
        }
        return true;
    };

    if candidate < anchor {
        return false;
    }
    let elapsed = periods_between(rule.frequency(), anchor, candidate);
    elapsed % i64::from(rule.interval()) == 0
}

/// Whole periods from `anchor` to `candidate`. Weeks start on Sunday.
fn periods_between(frequency: Frequency, anchor: NaiveDate, candidate: NaiveDate) -> i64 {
    let days = candidate.signed_duration_since(anchor).num_days();
    match frequency {
        Frequency::Daily => days,
        Frequency::Weekly => {
            let shift = i64::from(anchor.weekday().num_days_from_sunday())
                - i64::from(candidate.weekday().num_days_from_sunday());
            (days + shift) / 7
        }
        Frequency::Monthly => {
            let months = |d: NaiveDate| i64::from(d.year()) * 12 + i64::from(d.month0());
            months(candidate) - months(anchor)
        }
        Frequency::Yearly => i64::from(candidate.year()) - i64::from(anchor.year()),
    }
}
