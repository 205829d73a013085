use serenity::all::{CommandInteraction, CreateCommand};
use serenity::prelude::*;
use std::sync::Arc;

use super::utils::{
    day_option, get_integer_option, month_option, parse_date_args, respond, year_option,
};
use crate::application::messages::{DATE_DESCRIPTION, DATE_USAGE};
use crate::application::services::CountdownService;

pub fn register_date_command() -> CreateCommand {
    CreateCommand::new("date")
        .description(DATE_DESCRIPTION)
        .add_option(day_option(true))
        .add_option(month_option(true))
        .add_option(year_option())
}

pub async fn run_date(
    ctx: &Context,
    command: &CommandInteraction,
    countdown_service: &Arc<CountdownService>,
) {
    let options = &command.data.options;

    match parse_date_args(
        get_integer_option(options, "day"),
        get_integer_option(options, "month"),
        get_integer_option(options, "year"),
    ) {
        Some(date) => respond(ctx, command, countdown_service.date(date), false).await,
        None => respond(ctx, command, DATE_USAGE, true).await,
    }
}
