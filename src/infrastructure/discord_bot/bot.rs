use crate::application::handlers::CommandHandler;
use crate::application::services::CountdownService;
use crate::infrastructure::config::BotConfig;
use crate::infrastructure::database::DatabaseManager;
use crate::infrastructure::repositories::{SqliteBirthdayRepository, SqliteCustomDateRepository};

use anyhow::Result;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

// Initialize storage and start bot
pub async fn run_bot(config: BotConfig) -> Result<()> {
    let db = DatabaseManager::new(&config.database_path)?;
    db.initialize_database().await?;
    info!("Database ready at {}", config.database_path.display());

    let countdown_service = Arc::new(CountdownService::new(
        Arc::new(SqliteBirthdayRepository::new(db.clone())),
        Arc::new(SqliteCustomDateRepository::new(db)),
    ));

    let handler = CommandHandler {
        countdown_service,
        register_global_commands: config.register_global_commands,
    };

    // slash commands only need the guild list delivered on ready
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    // stop shards cleanly on Ctrl+C
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received, stopping shards");
                shard_manager.shutdown_all().await;
            }
            Err(e) => error!("Failed to listen for shutdown signal: {}", e),
        }
    });

    client.start().await?;
    Ok(())
}
