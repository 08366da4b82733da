pub mod calendar;
mod evaluate;
mod generate;
pub mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
mod types;

pub use evaluate::is_match;
pub use parse::{parse, parse_ical_date, ParseError};
pub use types::{Frequency, MatchContext, Rule, RuleBuilder, Weekday, WeekdaySpec};
