mod builder;
mod context;
mod rule;
mod weekday;

pub use builder::RuleBuilder;
pub use context::MatchContext;
pub use rule::{Frequency, Rule, WeekdaySpec};
pub use weekday::Weekday;
