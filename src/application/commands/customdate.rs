use serenity::all::{CommandInteraction, CreateCommand};
use serenity::prelude::*;
use std::sync::Arc;
use tracing::error;

use super::utils::{
    day_option, get_integer_option, get_string_option, month_option, name_option,
    parse_custom_date_args, respond, year_option,
};
use crate::application::messages::{CUSTOM_DATE_DESCRIPTION, CUSTOM_DATE_USAGE, INTERNAL_FAILURE};
use crate::application::services::CountdownService;

pub fn register_customdate_command() -> CreateCommand {
    CreateCommand::new("customdate")
        .description(CUSTOM_DATE_DESCRIPTION)
        .add_option(name_option())
        .add_option(day_option(false))
        .add_option(month_option(false))
        .add_option(year_option())
}

pub async fn run_customdate(
    ctx: &Context,
    command: &CommandInteraction,
    countdown_service: &Arc<CountdownService>,
) {
    let options = &command.data.options;
    let request = match parse_custom_date_args(
        get_string_option(options, "name"),
        get_integer_option(options, "day"),
        get_integer_option(options, "month"),
        get_integer_option(options, "year"),
    ) {
        Some(request) => request,
        None => {
            respond(ctx, command, CUSTOM_DATE_USAGE, true).await;
            return;
        }
    };

    let user_id = command.user.id.get();
    match countdown_service.custom_date(user_id, request).await {
        Ok(content) => respond(ctx, command, content, false).await,
        Err(e) => {
            error!("Failed to handle /customdate for user {}: {}", user_id, e);
            respond(ctx, command, INTERNAL_FAILURE, true).await;
        }
    }
}
