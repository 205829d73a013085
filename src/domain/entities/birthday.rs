use chrono::{DateTime, Utc};

use super::date_spec::DateSpec;

#[derive(Debug, Clone)]
pub struct Birthday {
    pub user_id: u64,
    pub day: i64,
    pub month: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Birthday {
    pub fn new(user_id: u64, day: i64, month: i64) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            day,
            month,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_date(&mut self, day: i64, month: i64) {
        self.day = day;
        self.month = month;
        self.updated_at = Utc::now();
    }

    pub fn is_valid(&self) -> bool {
        self.user_id > 0 && DateSpec::annual(self.day, self.month).is_valid()
    }
}

impl PartialEq for Birthday {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}
