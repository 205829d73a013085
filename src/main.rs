use dotenvy::dotenv;
mod application;
mod domain;
mod infrastructure;
mod utils;
use crate::infrastructure::config::BotConfig;
use crate::infrastructure::discord_bot::run_bot;
use tracing::{Level, error};

#[tokio::main]
async fn main() {
    dotenv().ok();
    let config = BotConfig::from_env();

    // an unusable config is still reported at the default level
    utils::setup_logging(config.as_ref().map_or(Level::INFO, |config| config.log_level));

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };

    if let Err(e) = run_bot(config).await {
        error!("Error running bot: {:#}", e);
    }
}
