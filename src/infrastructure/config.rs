use anyhow::{Result, anyhow};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

const DEFAULT_DATABASE_PATH: &str = "database.db";

/// Runtime settings, read from the environment (a `.env` file is loaded first)
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord_token: String,
    pub database_path: PathBuf,
    pub log_level: Level,
    pub register_global_commands: bool,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset and blank values count as missing
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let discord_token = get("DISCORD_TOKEN")
            .ok_or_else(|| anyhow!("Expected DISCORD_TOKEN in environment"))?;

        let database_path = get("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

        let log_level = match get("LOG_LEVEL") {
            Some(level) => Level::from_str(level.trim())
                .map_err(|_| anyhow!("Invalid LOG_LEVEL: {}", level))?,
            None => Level::INFO,
        };

        let register_global_commands = get("REGISTER_GLOBAL_COMMANDS")
            .map(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            discord_token,
            database_path,
            log_level,
            register_global_commands,
        })
    }
}
