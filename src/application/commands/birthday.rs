use serenity::all::{CommandInteraction, CreateCommand};
use serenity::prelude::*;
use std::sync::Arc;
use tracing::error;

use super::utils::{day_option, get_integer_option, month_option, parse_birthday_args, respond};
use crate::application::messages::{BIRTHDAY_DESCRIPTION, BIRTHDAY_USAGE, INTERNAL_FAILURE};
use crate::application::services::CountdownService;

pub const BIRTHDAY_COMMAND_NAMES: [&str; 2] = ["birthday", "dr"];

pub fn register_birthday_commands() -> Vec<CreateCommand> {
    BIRTHDAY_COMMAND_NAMES
        .iter()
        .map(|name| {
            CreateCommand::new(*name)
                .description(BIRTHDAY_DESCRIPTION)
                .add_option(day_option(false))
                .add_option(month_option(false))
        })
        .collect()
}

pub async fn run_birthday(
    ctx: &Context,
    command: &CommandInteraction,
    countdown_service: &Arc<CountdownService>,
) {
    let options = &command.data.options;
    let request = match parse_birthday_args(
        get_integer_option(options, "day"),
        get_integer_option(options, "month"),
    ) {
        Some(request) => request,
        None => {
            respond(ctx, command, BIRTHDAY_USAGE, true).await;
            return;
        }
    };

    let user_id = command.user.id.get();
    match countdown_service.birthday(user_id, request).await {
        Ok(content) => respond(ctx, command, content, false).await,
        Err(e) => {
            error!("Failed to handle /birthday for user {}: {}", user_id, e);
            respond(ctx, command, INTERNAL_FAILURE, true).await;
        }
    }
}
