use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::entities::birthday::Birthday;

#[derive(Debug)]
pub enum RepositoryError {
    InvalidData(String),
    StorageError(String),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RepositoryError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            RepositoryError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for RepositoryError {}

pub type Result<T> = std::result::Result<T, RepositoryError>;

#[async_trait]
pub trait BirthdayRepository: Send + Sync + Debug {
    /// Obtain user's birthday by user ID
    async fn get(&self, user_id: u64) -> Result<Option<Birthday>>;

    /// Save or update user's birthday
    async fn save(&self, birthday: &Birthday) -> Result<()>;
}
