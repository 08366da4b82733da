use std::fmt;

/// A day of the week, numbered from Sunday (`0`) to Saturday (`6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

const CODES: [(&str, Weekday); 7] = [
    ("SU", Weekday::Sunday),
    ("MO", Weekday::Monday),
    ("TU", Weekday::Tuesday),
    ("WE", Weekday::Wednesday),
    ("TH", Weekday::Thursday),
    ("FR", Weekday::Friday),
    ("SA", Weekday::Saturday),
];

impl Weekday {
    /// All weekdays in ordinal order, starting with Sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// The day's ordinal, `0` for Sunday through `6` for Saturday.
    #[must_use]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Inverse of [`ordinal()`](Self::ordinal). Returns `None` above `6`.
    #[must_use]
    pub fn from_ordinal(n: u8) -> Option<Weekday> {
        Self::ALL.get(usize::from(n)).copied()
    }

    /// The two-letter calendar code (`SU`, `MO`, ... `SA`).
    #[must_use]
    pub fn to_code(self) -> &'static str {
        CODES[usize::from(self.ordinal())].0
    }

    /// Look up a weekday by its two-letter code, ignoring case.
    ///
    /// Unrecognized codes resolve to [`Weekday::Sunday`]. Stored rules rely on
    /// this fallback, so it is not reported as an error.
    #[must_use]
    pub fn from_code(code: &str) -> Weekday {
        CODES
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map_or(Weekday::Sunday, |&(_, day)| day)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_code())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sunday => chrono::Weekday::Sun,
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
        }
    }
}
