use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::NaiveDate;

use super::context::MatchContext;
use super::weekday::Weekday;
use crate::parse::ParseError;

/// The recurrence period granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    /// Accepted by the parser and the generator, but never matched.
    Yearly,
}

impl Frequency {
    /// The value used for the `FREQ` rule part.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }

    pub(crate) fn from_value(value: &str) -> Option<Frequency> {
        match value {
            "DAILY" => Some(Frequency::Daily),
            "WEEKLY" => Some(Frequency::Weekly),
            "MONTHLY" => Some(Frequency::Monthly),
            "YEARLY" => Some(Frequency::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `BYDAY` entry: a weekday, optionally qualified by its position in the
/// month (`2FR` is the second Friday, `-1MO` the last Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdaySpec {
    ordinal: Option<i32>,
    day: Weekday,
}

impl WeekdaySpec {
    /// Every occurrence of `day`.
    #[must_use]
    pub fn every(day: Weekday) -> Self {
        Self { ordinal: None, day }
    }

    /// The `n`th occurrence of `day` in the month, counting from the end when
    /// `n` is negative. An `n` of zero means every occurrence.
    #[must_use]
    pub fn nth(n: i32, day: Weekday) -> Self {
        Self {
            ordinal: (n != 0).then_some(n),
            day,
        }
    }

    /// The position within the month, never `Some(0)`.
    #[must_use]
    pub fn ordinal(&self) -> Option<i32> {
        self.ordinal
    }

    #[must_use]
    pub fn day(&self) -> Weekday {
        self.day
    }
}

impl fmt::Display for WeekdaySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ordinal {
            Some(n) => write!(f, "{n}{}", self.day),
            None => write!(f, "{}", self.day),
        }
    }
}

/// A parsed recurrence rule.
///
/// Rules are immutable once built. Obtain one by parsing a stored string with
/// [`parse`](crate::parse::parse) (or [`str::parse`]), or by constructing one
/// with [`RuleBuilder`](super::RuleBuilder). The canonical string form is
/// available through [`Display`](fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub(crate) frequency: Frequency,
    pub(crate) interval: u32,
    pub(crate) by_day: Vec<WeekdaySpec>,
    pub(crate) by_month_day: Vec<i32>,
    pub(crate) until: Option<String>,
    pub(crate) count: Option<u32>,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            frequency: Frequency::Daily,
            interval: 1,
            by_day: Vec::new(),
            by_month_day: Vec::new(),
            until: None,
            count: None,
        }
    }
}

impl Rule {
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Always at least `1`.
    #[must_use]
    pub fn interval(&self) -> u32 {
        self.interval
    }

    #[must_use]
    pub fn by_day(&self) -> &[WeekdaySpec] {
        &self.by_day
    }

    #[must_use]
    pub fn by_month_day(&self) -> &[i32] {
        &self.by_month_day
    }

    /// The raw `UNTIL` value as it appeared in the rule string.
    #[must_use]
    pub fn until(&self) -> Option<&str> {
        self.until.as_deref()
    }

    /// The `UNTIL` value as a date, or `None` if absent or unparseable.
    #[must_use]
    pub fn until_date(&self) -> Option<NaiveDate> {
        self.until.as_deref().and_then(crate::parse::parse_ical_date)
    }

    /// The occurrence cap. Carried through parsing and generation only; the
    /// matcher never consults it.
    #[must_use]
    pub fn count(&self) -> Option<u32> {
        self.count
    }

    /// Evaluate this rule against a full [`MatchContext`].
    #[must_use]
    pub fn matches(&self, ctx: &MatchContext) -> bool {
        crate::evaluate::evaluate(self, ctx)
    }

    /// Iterate over the dates in `range` that satisfy this rule.
    ///
    /// Each date is evaluated on its own, without a last-satisfied date. The
    /// range bounds the work, so callers control how far ahead to look.
    pub fn occurrences(
        &self,
        range: RangeInclusive<NaiveDate>,
        anchor: Option<NaiveDate>,
    ) -> impl Iterator<Item = NaiveDate> + '_ {
        let (start, end) = range.into_inner();
        start
            .iter_days()
            .take_while(move |d| *d <= end)
            .filter(move |d| {
                let mut ctx = MatchContext::new(*d);
                if let Some(anchor) = anchor {
                    ctx = ctx.anchor(anchor);
                }
                self.matches(&ctx)
            })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::generate::generate(self))
    }
}

impl FromStr for Rule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}
