use chrono::NaiveDate;

use super::rule::{Frequency, Rule, WeekdaySpec};
use super::weekday::Weekday;

/// Builder for constructing a [`Rule`] and its canonical string.
///
/// # Example
///
/// ```
/// use cadence::{Frequency, RuleBuilder, Weekday};
///
/// let rrule = RuleBuilder::new(Frequency::Monthly)
///     .nth(2, Weekday::Friday)
///     .count(6)
///     .generate();
/// assert_eq!(rrule, "FREQ=MONTHLY;BYDAY=2FR;COUNT=6");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleBuilder {
    rule: Rule,
}

impl RuleBuilder {
    #[must_use]
    pub fn new(frequency: Frequency) -> Self {
        Self {
            rule: Rule {
                frequency,
                ..Rule::default()
            },
        }
    }

    /// Repeat every `n` periods. Zero is treated as one.
    #[must_use]
    pub fn interval(mut self, n: u32) -> Self {
        self.rule.interval = n.max(1);
        self
    }

    /// Append a `BYDAY` entry.
    #[must_use]
    pub fn by_day(mut self, spec: WeekdaySpec) -> Self {
        self.rule.by_day.push(spec);
        self
    }

    /// Append every occurrence of `day`.
    #[must_use]
    pub fn on(self, day: Weekday) -> Self {
        self.by_day(WeekdaySpec::every(day))
    }

    /// Append the `n`th occurrence of `day` in the month (negative counts from
    /// the end).
    #[must_use]
    pub fn nth(self, n: i32, day: Weekday) -> Self {
        self.by_day(WeekdaySpec::nth(n, day))
    }

    /// Append a `BYMONTHDAY` entry.
    #[must_use]
    pub fn by_month_day(mut self, day: i32) -> Self {
        self.rule.by_month_day.push(day);
        self
    }

    /// Last date on which the rule applies, emitted as `YYYYMMDD`.
    #[must_use]
    pub fn until(self, date: NaiveDate) -> Self {
        self.until_raw(date.format("%Y%m%d").to_string())
    }

    /// Set the `UNTIL` value verbatim, up to the first `;`.
    ///
    /// Anything after a `;` would be read back as further rule parts, so it
    /// is dropped.
    #[must_use]
    pub fn until_raw(mut self, value: impl Into<String>) -> Self {
        let mut value = value.into();
        if let Some(end) = value.find(';') {
            value.truncate(end);
        }
        self.rule.until = Some(value);
        self
    }

    /// Cap the number of occurrences. Zero clears the cap.
    #[must_use]
    pub fn count(mut self, n: u32) -> Self {
        self.rule.count = (n > 0).then_some(n);
        self
    }

    #[must_use]
    pub fn build(self) -> Rule {
        self.rule
    }

    /// Render the canonical rule string without consuming the builder.
    #[must_use]
    pub fn generate(&self) -> String {
        crate::generate::generate(&self.rule)
    }
}
