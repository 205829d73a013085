use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, params};

use crate::domain::entities::birthday::Birthday;
use crate::domain::repositories::birthday_repository::{
    BirthdayRepository, RepositoryError, Result,
};
use crate::infrastructure::database::DatabaseManager;

pub struct SqliteBirthdayRepository {
    db: DatabaseManager,
}

impl SqliteBirthdayRepository {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }
}

/// Stored timestamps are unix seconds; unreadable ones fall back to the epoch
pub(crate) fn timestamp_to_utc(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).unwrap_or_default()
}

#[async_trait]
impl BirthdayRepository for SqliteBirthdayRepository {
    async fn get(&self, user_id: u64) -> Result<Option<Birthday>> {
        self.db
            .execute_blocking(move |conn| {
                conn.query_row(
                    "SELECT user_id, day, month, created_at, updated_at
                     FROM birthdays WHERE user_id = ?1",
                    params![user_id as i64],
                    |row| {
                        Ok(Birthday {
                            user_id: row.get::<_, i64>(0)? as u64,
                            day: row.get(1)?,
                            month: row.get(2)?,
                            created_at: timestamp_to_utc(row.get(3)?),
                            updated_at: timestamp_to_utc(row.get(4)?),
                        })
                    },
                )
                .optional()
            })
            .await
            .map_err(|e| RepositoryError::StorageError(e.to_string()))
    }

    async fn save(&self, birthday: &Birthday) -> Result<()> {
        if !birthday.is_valid() {
            return Err(RepositoryError::InvalidData(format!(
                "Invalid birthday {:02}.{:02}",
                birthday.day, birthday.month
            )));
        }

        let birthday = birthday.clone();

        self.db
            .execute_blocking(move |conn| {
                conn.execute(
                    r#"
                    INSERT INTO birthdays (user_id, day, month, created_at, updated_at)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    ON CONFLICT(user_id) DO UPDATE SET
                        day = excluded.day,
                        month = excluded.month,
                        updated_at = excluded.updated_at;
                    "#,
                    params![
                        birthday.user_id as i64,
                        birthday.day,
                        birthday.month,
                        birthday.created_at.timestamp(),
                        birthday.updated_at.timestamp()
                    ],
                )?;
                Ok(())
            })
            .await
            .map_err(|e| RepositoryError::StorageError(e.to_string()))
    }
}

impl std::fmt::Debug for SqliteBirthdayRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBirthdayRepository").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repository() -> SqliteBirthdayRepository {
        let db = DatabaseManager::new(":memory:").unwrap();
        db.initialize_database().await.unwrap();
        SqliteBirthdayRepository::new(db)
    }

    #[tokio::test]
    async fn test_missing_birthday_is_none() {
        let repo = repository().await;
        assert!(repo.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_read_back() {
        let repo = repository().await;
        repo.save(&Birthday::new(42, 31, 12)).await.unwrap();

        let stored = repo.get(42).await.unwrap().unwrap();
        assert_eq!(stored.user_id, 42);
        assert_eq!((stored.day, stored.month), (31, 12));
    }

    #[tokio::test]
    async fn test_save_twice_updates_in_place() {
        let repo = repository().await;
        let mut birthday = Birthday::new(42, 1, 1);
        repo.save(&birthday).await.unwrap();

        birthday.update_date(15, 7);
        repo.save(&birthday).await.unwrap();

        let stored = repo.get(42).await.unwrap().unwrap();
        assert_eq!((stored.day, stored.month), (15, 7));
        assert_eq!(stored.created_at.timestamp(), birthday.created_at.timestamp());
    }

    #[tokio::test]
    async fn test_invalid_birthday_is_rejected() {
        let repo = repository().await;
        let result = repo.save(&Birthday::new(42, 1, 13)).await;
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert!(repo.get(42).await.unwrap().is_none());
    }

    #[test]
    fn test_timestamp_conversion() {
        assert_eq!(timestamp_to_utc(86_400).timestamp(), 86_400);
        assert_eq!(timestamp_to_utc(i64::MAX).timestamp(), 0);
    }
}
