use anyhow::{Context, Result, anyhow};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use tracing::{debug, error};

/// Primary manager for SQLite database operations; provides async-friendly access to synchronous rusqlite connections using tokio's spawn_blocking.
#[derive(Clone)]
pub struct DatabaseManager {
    connection: Arc<Mutex<Connection>>,
}

impl DatabaseManager {
    /// Create a new instance of the DatabaseManager; opens the SQLite database and configures it for better performance.
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();
        let connection = Connection::open(db_path)
            .with_context(|| format!("Failed to open SQLite database at {}", db_path.display()))?;

        // WAL keeps readers from blocking on the single writer; in-memory databases answer "memory".
        let journal_mode: String =
            connection.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        connection.pragma_update(None, "synchronous", "NORMAL")?;
        debug!("SQLite journal mode: {}", journal_mode);

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Execute a blocking database operation in a tokio-aware manner; moves the operation to a blocking thread pool to avoid blocking the async runtime.
    pub async fn execute_blocking<F, T>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let connection = self.connection.clone();
        tokio::task::spawn_blocking(move || {
            let conn = connection
                .lock()
                .map_err(|_| anyhow!("Database connection mutex poisoned"))?;
            operation(&conn).context("Database operation failed")
        })
        .await
        .context("Failed to execute blocking database operation - task join error")?
    }

    /// Initialize the database by creating all the tables; reads and executes schema.sql to set up the database structure.
    pub async fn initialize_database(&self) -> Result<()> {
        let schema = include_str!("schema.sql");

        self.execute_blocking(move |connection| {
            let statements: Vec<&str> = schema.split(';').collect();
            for (i, statement) in statements.iter().enumerate() {
                let trimmed = statement.trim();

                // Skip empty statements and comments.
                if !trimmed.is_empty() && !trimmed.starts_with("--") {
                    match connection.execute(trimmed, []) {
                        Ok(_) => debug!("Schema statement {} applied", i + 1),
                        Err(e) => {
                            error!("Schema statement {} failed: {}\n{}", i + 1, e, trimmed);
                            return Err(e);
                        }
                    }
                }
            }
            Ok(())
        })
        .await
    }
}
