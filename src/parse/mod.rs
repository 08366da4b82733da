mod error;
mod grammar;

use chrono::{NaiveDate, NaiveTime};
use winnow::Parser;

pub use error::ParseError;

use crate::{Frequency, Rule, WeekdaySpec};

const PREFIX: &str = "FREQ=";

/// Parse a rule string such as `FREQ=MONTHLY;BYDAY=2FR` into a [`Rule`].
///
/// Rule parts may appear in any order; when a key repeats, the last one
/// wins. Unknown keys and malformed values are skipped rather than rejected:
/// an unknown `FREQ` leaves the rule daily, a bad `INTERVAL` leaves it at 1,
/// and unreadable `BYDAY`/`BYMONTHDAY` entries are dropped. `UNTIL` is kept
/// verbatim and only interpreted at match time.
///
/// # Errors
///
/// Returns [`ParseError::NotARule`] if `input` does not begin with `FREQ=`.
#[tracing::instrument(level = "debug", skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> Result<Rule, ParseError> {
    if !input.starts_with(PREFIX) {
        tracing::debug!("Input is missing the FREQ= prefix");
        return Err(ParseError::NotARule {
            input: input.to_owned(),
        });
    }

    let mut rule = Rule::default();
    for part in input.split(';') {
        let Some((key, value)) = part.split_once('=') else {
            tracing::trace!(part, "Skipping rule part without '='");
            continue;
        };
        match key {
            "FREQ" => match Frequency::from_value(value) {
                Some(freq) => rule.frequency = freq,
                None => tracing::trace!(value, "Unknown FREQ value, keeping default"),
            },
            "INTERVAL" => rule.interval = parse_interval(value),
            "BYDAY" => rule.by_day = parse_by_day(value),
            "BYMONTHDAY" => rule.by_month_day = parse_by_month_day(value),
            "UNTIL" => rule.until = Some(value.to_owned()),
            "COUNT" => rule.count = value.parse::<u32>().ok().filter(|n| *n > 0),
            other => tracing::trace!(key = other, "Ignoring unknown rule part"),
        }
    }

    tracing::trace!(rule = %rule, "Parsed recurrence rule");
    Ok(rule)
}

fn parse_interval(value: &str) -> u32 {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::trace!(value, "Invalid INTERVAL, using 1");
            1
        }
    }
}

fn parse_by_day(value: &str) -> Vec<WeekdaySpec> {
    value
        .split(',')
        .filter_map(|token| {
            let spec = grammar::weekday_spec.parse(token).ok();
            if spec.is_none() {
                tracing::trace!(token, "Dropping malformed BYDAY entry");
            }
            spec
        })
        .collect()
}

fn parse_by_month_day(value: &str) -> Vec<i32> {
    value
        .split(',')
        .filter_map(|token| {
            let day = token.parse::<i32>().ok();
            if day.is_none() {
                tracing::trace!(token, "Dropping malformed BYMONTHDAY entry");
            }
            day
        })
        .collect()
}

/// Parse an iCalendar `DATE` (`YYYYMMDD`) or UTC `DATE-TIME`
/// (`YYYYMMDDTHHMMSSZ`), keeping only the date.
///
/// Returns `None` for any other shape and for fields out of range, such as
/// month 13, February 30 or hour 24.
#[must_use]
pub fn parse_ical_date(s: &str) -> Option<NaiveDate> {
    let fields = grammar::ical_date.parse(s).ok()?;
    if let Some((hour, minute, second)) = fields.time {
        NaiveTime::from_hms_opt(hour, minute, second)?;
    }
    NaiveDate::from_ymd_opt(i32::try_from(fields.year).ok()?, fields.month, fields.day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(matches!(
            parse("BYDAY=MO"),
            Err(ParseError::NotARule { .. })
        ));
        assert!(parse("").is_err());
        assert!(parse("freq=DAILY").is_err());
        assert!(parse(" FREQ=DAILY").is_err());
    }

    #[test]
    fn parses_every_key() {
        let rule =
            parse("FREQ=MONTHLY;INTERVAL=2;BYDAY=2FR,-1MO;BYMONTHDAY=1,15;UNTIL=20241231;COUNT=10")
                .unwrap();
        assert_eq!(rule.frequency(), Frequency::Monthly);
        assert_eq!(rule.interval(), 2);
        assert_eq!(
            rule.by_day(),
            &[
                WeekdaySpec::nth(2, Weekday::Friday),
                WeekdaySpec::nth(-1, Weekday::Monday)
            ]
        );
        assert_eq!(rule.by_month_day(), &[1, 15]);
        assert_eq!(rule.until(), Some("20241231"));
        assert_eq!(rule.count(), Some(10));
    }

    #[test]
    fn unknown_frequency_keeps_daily() {
        assert_eq!(parse("FREQ=HOURLY").unwrap().frequency(), Frequency::Daily);
        assert_eq!(parse("FREQ=weekly").unwrap().frequency(), Frequency::Daily);
        assert_eq!(parse("FREQ=").unwrap().frequency(), Frequency::Daily);
    }

    #[test]
    fn yearly_is_accepted() {
        assert_eq!(parse("FREQ=YEARLY").unwrap().frequency(), Frequency::Yearly);
    }

    #[test]
    fn invalid_interval_defaults_to_one() {
        for input in [
            "FREQ=DAILY;INTERVAL=abc",
            "FREQ=DAILY;INTERVAL=0",
            "FREQ=DAILY;INTERVAL=-3",
            "FREQ=DAILY;INTERVAL=",
            "FREQ=DAILY",
        ] {
            assert_eq!(parse(input).unwrap().interval(), 1, "input {input}");
        }
    }

    #[test]
    fn malformed_by_day_tokens_dropped() {
        let rule = parse("FREQ=WEEKLY;BYDAY=MO,monday,W,FR,+2TU").unwrap();
        assert_eq!(
            rule.by_day(),
            &[
                WeekdaySpec::every(Weekday::Monday),
                WeekdaySpec::every(Weekday::Friday)
            ]
        );
    }

    #[test]
    fn malformed_by_month_day_tokens_dropped() {
        let rule = parse("FREQ=MONTHLY;BYMONTHDAY=1,x,15,,-1").unwrap();
        assert_eq!(rule.by_month_day(), &[1, 15, -1]);
    }

    #[test]
    fn count_parsing() {
        assert_eq!(parse("FREQ=DAILY;COUNT=5").unwrap().count(), Some(5));
        assert_eq!(parse("FREQ=DAILY;COUNT=five").unwrap().count(), None);
        assert_eq!(parse("FREQ=DAILY;COUNT=0").unwrap().count(), None);
    }

    #[test]
    fn unknown_keys_and_bare_parts_ignored() {
        let rule = parse("FREQ=WEEKLY;WKST=MO;X-CUSTOM=1;;junk;BYDAY=TU").unwrap();
        assert_eq!(rule.frequency(), Frequency::Weekly);
        assert_eq!(rule.by_day(), &[WeekdaySpec::every(Weekday::Tuesday)]);
    }

    #[test]
    fn order_independent_and_last_wins() {
        let a = parse("FREQ=WEEKLY;BYDAY=MO;INTERVAL=2").unwrap();
        let b = parse("FREQ=WEEKLY;INTERVAL=2;BYDAY=MO").unwrap();
        assert_eq!(a, b);

        let repeated = parse("FREQ=DAILY;FREQ=MONTHLY;BYMONTHDAY=1;BYMONTHDAY=2").unwrap();
        assert_eq!(repeated.frequency(), Frequency::Monthly);
        assert_eq!(repeated.by_month_day(), &[2]);
    }

    #[test]
    fn value_split_on_first_equals_only() {
        let rule = parse("FREQ=DAILY;UNTIL=2024=01").unwrap();
        assert_eq!(rule.until(), Some("2024=01"));
    }

    #[test]
    fn ical_date_shapes() {
        assert_eq!(parse_ical_date("20240315"), Some(date(2024, 3, 15)));
        assert_eq!(parse_ical_date("20240315T120000Z"), Some(date(2024, 3, 15)));
        assert_eq!(parse_ical_date("2024-03-15"), None);
        assert_eq!(parse_ical_date("20240315T120000"), None);
        assert_eq!(parse_ical_date(""), None);
    }

    #[test]
    fn ical_date_out_of_range_fields() {
        assert_eq!(parse_ical_date("20241301"), None);
        assert_eq!(parse_ical_date("20240230"), None);
        assert_eq!(parse_ical_date("20230229"), None);
        assert_eq!(parse_ical_date("20240229"), Some(date(2024, 2, 29)));
        assert_eq!(parse_ical_date("20240100"), None);
        assert_eq!(parse_ical_date("20240101T240000Z"), None);
        assert_eq!(parse_ical_date("20240101T126000Z"), None);
    }
}
