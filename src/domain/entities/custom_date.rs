use chrono::{DateTime, Utc};

use super::date_spec::DateSpec;

pub const MAX_NAME_LENGTH: usize = 64;

/// A user's named event. Identified by `(user_id, name)`.
#[derive(Debug, Clone)]
pub struct CustomDate {
    pub user_id: u64,
    pub name: String,
    pub day: i64,
    pub month: i64,
    pub year: Option<i64>, // None repeats every year
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CustomDate {
    pub fn new(user_id: u64, name: String, date: DateSpec) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            name,
            day: date.day,
            month: date.month,
            year: date.year,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn date_spec(&self) -> DateSpec {
        DateSpec::new(self.day, self.month, self.year)
    }

    pub fn is_valid(&self) -> bool {
        let name = self.name.trim();
        self.user_id > 0
            && !name.is_empty()
            && name.chars().count() <= MAX_NAME_LENGTH
            && self.date_spec().is_valid()
    }
}

impl PartialEq for CustomDate {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id && self.name == other.name
    }
}
