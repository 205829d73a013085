use super::plural_forms::PluralForms;

/// Units a countdown is broken into, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Weeks,
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
    ];

    /// Length of one unit in seconds
    pub fn seconds(&self) -> u64 {
        match self {
            TimeUnit::Weeks => 7 * 24 * 60 * 60,
            TimeUnit::Days => 24 * 60 * 60,
            TimeUnit::Hours => 60 * 60,
            TimeUnit::Minutes => 60,
            TimeUnit::Seconds => 1,
        }
    }

    pub fn forms(&self) -> PluralForms {
        match self {
            TimeUnit::Weeks => PluralForms::WEEKS,
            TimeUnit::Days => PluralForms::DAYS,
            TimeUnit::Hours => PluralForms::HOURS,
            TimeUnit::Minutes => PluralForms::MINUTES,
            TimeUnit::Seconds => PluralForms::SECONDS,
        }
    }
}
