pub mod commands;
pub mod handlers;
pub mod messages;
pub mod services;
