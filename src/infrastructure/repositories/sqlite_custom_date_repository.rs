use async_trait::async_trait;
use rusqlite::{OptionalExtension, Row, params};

use super::sqlite_birthday_repository::timestamp_to_utc;
use crate::domain::entities::custom_date::CustomDate;
use crate::domain::repositories::birthday_repository::{RepositoryError, Result};
use crate::domain::repositories::custom_date_repository::CustomDateRepository;
use crate::infrastructure::database::DatabaseManager;

pub struct SqliteCustomDateRepository {
    db: DatabaseManager,
}

impl SqliteCustomDateRepository {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }

    // kept synchronous because it runs inside spawn_blocking
    fn row_to_custom_date(row: &Row) -> rusqlite::Result<CustomDate> {
        Ok(CustomDate {
            user_id: row.get::<_, i64>("user_id")? as u64,
            name: row.get("name")?,
            day: row.get("day")?,
            month: row.get("month")?,
            year: row.get("year")?,
            created_at: timestamp_to_utc(row.get("created_at")?),
            updated_at: timestamp_to_utc(row.get("updated_at")?),
        })
    }
}

#[async_trait]
impl CustomDateRepository for SqliteCustomDateRepository {
    async fn get(&self, user_id: u64, name: &str) -> Result<Option<CustomDate>> {
        let name = name.to_string();

        self.db
            .execute_blocking(move |conn| {
                conn.query_row(
                    "SELECT user_id, name, day, month, year, created_at, updated_at
                     FROM custom_dates WHERE user_id = ?1 AND name = ?2",
                    params![user_id as i64, name],
                    Self::row_to_custom_date,
                )
                .optional()
            })
            .await
            .map_err(|e| RepositoryError::StorageError(e.to_string()))
    }

    async fn upsert(&self, custom_date: &CustomDate) -> Result<()> {
        if !custom_date.is_valid() {
            return Err(RepositoryError::InvalidData(format!(
                "Invalid custom date '{}'",
                custom_date.name
            )));
        }

        let event = custom_date.clone();

        self.db
            .execute_blocking(move |conn| {
                conn.execute(
                    r#"
                    INSERT INTO custom_dates (user_id, name, day, month, year, created_at, updated_at)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                    ON CONFLICT(user_id, name) DO UPDATE SET
                        day = excluded.day,
                        month = excluded.month,
                        year = excluded.year,
                        updated_at = excluded.updated_at;
                    "#,
                    params![
                        event.user_id as i64,
                        event.name,
                        event.day,
                        event.month,
                        event.year,
                        event.created_at.timestamp(),
                        event.updated_at.timestamp()
                    ],
                )?;
                Ok(())
            })
            .await
            .map_err(|e| RepositoryError::StorageError(e.to_string()))
    }

    async fn list(&self, user_id: u64) -> Result<Vec<CustomDate>> {
        self.db
            .execute_blocking(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT user_id, name, day, month, year, created_at, updated_at
                     FROM custom_dates WHERE user_id = ?1 ORDER BY name",
                )?;

                let rows = stmt.query_map(params![user_id as i64], Self::row_to_custom_date)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
            })
            .await
            .map_err(|e| RepositoryError::StorageError(e.to_string()))
    }
}

impl std::fmt::Debug for SqliteCustomDateRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteCustomDateRepository").finish()
    }
}
