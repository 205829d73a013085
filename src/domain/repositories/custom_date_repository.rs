use async_trait::async_trait;
use std::fmt::Debug;

use super::birthday_repository::Result;
use crate::domain::entities::custom_date::CustomDate;

#[async_trait]
pub trait CustomDateRepository: Send + Sync + Debug {
    /// Obtain a user's event by its exact name
    async fn get(&self, user_id: u64, name: &str) -> Result<Option<CustomDate>>;

    /// Insert the event or replace the date of an existing one with the same name
    async fn upsert(&self, custom_date: &CustomDate) -> Result<()>;

    /// All events of a user, ordered by name
    async fn list(&self, user_id: u64) -> Result<Vec<CustomDate>>;
}
