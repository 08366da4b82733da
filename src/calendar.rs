//! Month arithmetic used to resolve ordinal weekdays.

use chrono::{Datelike, Days, NaiveDate};

use crate::Weekday;

/// The last day of `month` in `year`, or `None` if the pair is not a valid
/// calendar month.
#[must_use]
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    match month {
        12 => NaiveDate::from_ymd_opt(year, 12, 31),
        1..=11 => NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt(),
        _ => None,
    }
}

/// The date of the last `weekday` in `month` of `year`.
///
/// Walks back from the last day of the month by the distance to the previous
/// (or same) `weekday`, so the result always lies within the final seven days
/// of the month.
#[must_use]
pub fn last_occurrence_of_weekday_in_month(
    year: i32,
    month: u32,
    weekday: Weekday,
) -> Option<NaiveDate> {
    let last = last_day_of_month(year, month)?;
    let last_weekday = Weekday::from(last.weekday());
    let back = (7 + u64::from(last_weekday.ordinal()) - u64::from(weekday.ordinal())) % 7;
    last.checked_sub_days(Days::new(back))
}

/// Which seven-day block of its month `date` falls in, starting at 1.
///
/// Days 1-7 are week 1, days 8-14 week 2, and so on; the `n`th occurrence of
/// any weekday always falls in week `n`.
#[must_use]
pub fn week_of_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}
