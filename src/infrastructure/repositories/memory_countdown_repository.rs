use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Birthday, CustomDate};
use crate::domain::repositories::birthday_repository::{
    BirthdayRepository, RepositoryError, Result,
};
use crate::domain::repositories::custom_date_repository::CustomDateRepository;

fn poisoned() -> RepositoryError {
    RepositoryError::StorageError("In-memory store lock poisoned".into())
}

/// In-memory implementation of BirthdayRepository, used by tests
#[derive(Debug, Clone, Default)]
pub struct MemoryBirthdayRepository {
    birthdays: Arc<RwLock<HashMap<u64, Birthday>>>,
}

impl MemoryBirthdayRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BirthdayRepository for MemoryBirthdayRepository {
    async fn get(&self, user_id: u64) -> Result<Option<Birthday>> {
        let birthdays = self.birthdays.read().map_err(|_| poisoned())?;
        Ok(birthdays.get(&user_id).cloned())
    }

    async fn save(&self, birthday: &Birthday) -> Result<()> {
        if !birthday.is_valid() {
            return Err(RepositoryError::InvalidData("Invalid birthday".into()));
        }

        let mut birthdays = self.birthdays.write().map_err(|_| poisoned())?;
        birthdays.insert(birthday.user_id, birthday.clone());
        Ok(())
    }
}

/// In-memory implementation of CustomDateRepository, used by tests
#[derive(Debug, Clone, Default)]
pub struct MemoryCustomDateRepository {
    // BTreeMap keeps each user's events ordered by name
    events: Arc<RwLock<HashMap<u64, BTreeMap<String, CustomDate>>>>,
}

impl MemoryCustomDateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomDateRepository for MemoryCustomDateRepository {
    async fn get(&self, user_id: u64, name: &str) -> Result<Option<CustomDate>> {
        let events = self.events.read().map_err(|_| poisoned())?;
        Ok(events
            .get(&user_id)
            .and_then(|user_events| user_events.get(name))
            .cloned())
    }

    async fn upsert(&self, custom_date: &CustomDate) -> Result<()> {
        if !custom_date.is_valid() {
            return Err(RepositoryError::InvalidData("Invalid custom date".into()));
        }

        let mut events = self.events.write().map_err(|_| poisoned())?;
        let user_events = events.entry(custom_date.user_id).or_default();

        match user_events.get_mut(&custom_date.name) {
            Some(existing) => {
                existing.day = custom_date.day;
                existing.month = custom_date.month;
                existing.year = custom_date.year;
                existing.updated_at = custom_date.updated_at;
            }
            None => {
                user_events.insert(custom_date.name.clone(), custom_date.clone());
            }
        }
        Ok(())
    }

    async fn list(&self, user_id: u64) -> Result<Vec<CustomDate>> {
        let events = self.events.read().map_err(|_| poisoned())?;
        Ok(events
            .get(&user_id)
            .map(|user_events| user_events.values().cloned().collect())
            .unwrap_or_default())
    }
}
