pub mod config;
pub mod database;
pub mod discord_bot;
pub mod repositories;
