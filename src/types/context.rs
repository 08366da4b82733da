use chrono::NaiveDate;

/// The inputs to a single evaluation.
///
/// All dates are plain calendar dates. The caller resolves "today" in
/// whatever timezone it uses before building the context.
///
/// # Example
///
/// ```
/// use cadence::MatchContext;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
/// let ctx = MatchContext::new(today)
///     .last_satisfied(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
///     .anchor(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
/// assert_eq!(ctx.candidate(), today);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchContext {
    candidate: NaiveDate,
    last_satisfied: Option<NaiveDate>,
    anchor: Option<NaiveDate>,
}

impl MatchContext {
    /// Create a context for evaluating `candidate` with no history.
    #[must_use]
    pub fn new(candidate: NaiveDate) -> Self {
        Self {
            candidate,
            last_satisfied: None,
            anchor: None,
        }
    }

    /// Record the date on which the rule was last satisfied. A rule never
    /// matches again on that same date.
    #[must_use]
    pub fn last_satisfied(mut self, date: NaiveDate) -> Self {
        self.last_satisfied = Some(date);
        self
    }

    /// Set the date the schedule started. `INTERVAL` is only enforced for
    /// weekly and monthly rules, and only satisfiable for daily rules, when an
    /// anchor is present.
    #[must_use]
    pub fn anchor(mut self, date: NaiveDate) -> Self {
        self.anchor = Some(date);
        self
    }

    #[must_use]
    pub fn candidate(&self) -> NaiveDate {
        self.candidate
    }

    #[must_use]
    pub fn last_satisfied_date(&self) -> Option<NaiveDate> {
        self.last_satisfied
    }

    #[must_use]
    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.anchor
    }
}
