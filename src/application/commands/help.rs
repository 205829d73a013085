use serenity::all::{CommandInteraction, CreateCommand};
use serenity::prelude::*;

use super::utils::respond;
use crate::application::messages::{HELP_DESCRIPTION, HELP_MESSAGE, UNKNOWN_COMMAND};

pub fn register_help_command() -> CreateCommand {
    CreateCommand::new("help").description(HELP_DESCRIPTION)
}

pub fn register_start_command() -> CreateCommand {
    CreateCommand::new("start").description("Начать")
}

pub async fn run_help_command(ctx: &Context, command: &CommandInteraction) {
    respond(ctx, command, HELP_MESSAGE.as_str(), false).await;
}

/// Fallback for command names this bot no longer handles
pub async fn run_unknown_command(ctx: &Context, command: &CommandInteraction) {
    respond(ctx, command, UNKNOWN_COMMAND, true).await;
}
