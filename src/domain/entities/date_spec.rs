/// A target day of the year, optionally pinned to a year.
///
/// Day and month are kept as raw integers: out-of-range values are not an
/// error and get normalized when the date is materialized (Feb 30 -> Mar 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpec {
    pub day: i64,
    pub month: i64,
    pub year: Option<i64>,
}

impl DateSpec {
    pub fn new(day: i64, month: i64, year: Option<i64>) -> Self {
        Self { day, month, year }
    }

    /// Next occurrence of a day/month, no year attached
    pub fn annual(day: i64, month: i64) -> Self {
        Self::new(day, month, None)
    }

    /// Day in 1-31, month in 1-12 and, when present, year in 1-9999.
    /// Month lengths are not checked.
    pub fn is_valid(&self) -> bool {
        (1..=31).contains(&self.day)
            && (1..=12).contains(&self.month)
            && self.year.is_none_or(|year| (1..=9999).contains(&year))
    }
}

/// Distance between now and a target, split into calendar units.
///
/// The integer fields partition `total_seconds`: weeks and days cover whole
/// days, hours/minutes/seconds the remainder of the current day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBreakdown {
    pub is_past: bool,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub total_seconds: f64,
}
