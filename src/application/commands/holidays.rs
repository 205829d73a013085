use serenity::all::{CommandInteraction, CreateCommand};
use serenity::prelude::*;
use std::sync::Arc;

use super::utils::respond;
use crate::application::services::CountdownService;
use crate::domain::Holiday;

/// One command per name, aliases included
pub fn register_holiday_commands() -> Vec<CreateCommand> {
    Holiday::ALL
        .iter()
        .flat_map(|holiday| {
            holiday
                .command_names()
                .iter()
                .map(move |name| CreateCommand::new(*name).description(holiday.description()))
        })
        .collect()
}

pub async fn run_holiday(
    ctx: &Context,
    command: &CommandInteraction,
    countdown_service: &Arc<CountdownService>,
    holiday: Holiday,
) {
    let content = countdown_service.holiday(holiday);
    respond(ctx, command, content, false).await;
}
