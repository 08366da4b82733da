use winnow::combinator::{delimited, opt};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

use crate::{Weekday, WeekdaySpec};

/// Raw fields of an iCalendar DATE or UTC DATE-TIME, not yet range-checked.
pub(super) struct IcalFields {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub time: Option<(u32, u32, u32)>,
}

// -- Numbers ----------------------------------------------------------------

fn fixed_digits(width: usize) -> impl FnMut(&mut &str) -> ModalResult<u32> {
    move |input: &mut &str| {
        take_while(width, |c: char| c.is_ascii_digit())
            .try_map(|s: &str| s.parse::<u32>())
            .parse_next(input)
    }
}

fn signed_ordinal(input: &mut &str) -> ModalResult<i32> {
    (opt('-'), take_while(1.., |c: char| c.is_ascii_digit()))
        .take()
        .try_map(|s: &str| s.parse::<i32>())
        .parse_next(input)
}

// -- BYDAY ------------------------------------------------------------------

fn weekday_code<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(2, |c: char| c.is_ascii_uppercase()).parse_next(input)
}

/// `[-]digits` followed by exactly two uppercase letters. Any two letters are
/// accepted; unknown codes resolve through [`Weekday::from_code`].
pub(super) fn weekday_spec(input: &mut &str) -> ModalResult<WeekdaySpec> {
    let ordinal = opt(signed_ordinal).parse_next(input)?;
    let code = weekday_code.parse_next(input)?;
    Ok(WeekdaySpec::nth(ordinal.unwrap_or(0), Weekday::from_code(code)))
}

// -- UNTIL ------------------------------------------------------------------

fn utc_time(input: &mut &str) -> ModalResult<(u32, u32, u32)> {
    delimited(
        'T',
        (fixed_digits(2), fixed_digits(2), fixed_digits(2)),
        'Z',
    )
    .parse_next(input)
}

/// `YYYYMMDD` optionally followed by `THHMMSSZ`.
pub(super) fn ical_date(input: &mut &str) -> ModalResult<IcalFields> {
    let year = fixed_digits(4).parse_next(input)?;
    let month = fixed_digits(2).parse_next(input)?;
    let day = fixed_digits(2).parse_next(input)?;
    let time = opt(utc_time).parse_next(input)?;
    Ok(IcalFields {
        year,
        month,
        day,
        time,
    })
}
