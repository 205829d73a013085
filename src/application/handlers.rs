use crate::application::commands::{
    BIRTHDAY_COMMAND_NAMES, all_commands, run_birthday, run_customdate, run_date,
    run_help_command, run_holiday, run_unknown_command,
};
use crate::application::services::CountdownService;
use crate::domain::Holiday;

use serenity::model::application::{Command, Interaction};
use serenity::model::{gateway::Ready, id::GuildId};
use serenity::prelude::*;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct CommandHandler {
    pub countdown_service: Arc<CountdownService>,
    pub register_global_commands: bool,
}

#[serenity::async_trait]
impl EventHandler for CommandHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Bot ready as {}", ready.user.name);

        // register commands in each guild
        for guild_status in ready.guilds {
            let guild_id: GuildId = guild_status.id;

            match guild_id.set_commands(&ctx.http, all_commands()).await {
                Ok(_) => info!("Commands registered for guild {}", guild_id.get()),
                Err(err) => warn!(
                    "Failed to register commands for guild {}: {}",
                    guild_id.get(),
                    err
                ),
            }
        }

        if self.register_global_commands {
            match Command::set_global_commands(&ctx.http, all_commands()).await {
                Ok(commands) => info!("{} global commands registered", commands.len()),
                Err(err) => error!("Failed to register global commands: {}", err),
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let name = command.data.name.as_str();
        info!("Received command interaction: {}", name);

        if let Some(holiday) = Holiday::from_command(name) {
            run_holiday(&ctx, &command, &self.countdown_service, holiday).await;
            return;
        }

        match name {
            "start" | "help" => run_help_command(&ctx, &command).await,
            "date" => run_date(&ctx, &command, &self.countdown_service).await,
            "customdate" => run_customdate(&ctx, &command, &self.countdown_service).await,
            n if BIRTHDAY_COMMAND_NAMES.iter().any(|b| *b == n) => {
                run_birthday(&ctx, &command, &self.countdown_service).await
            }
            _ => {
                warn!("Command not recognized: {}", name);
                run_unknown_command(&ctx, &command).await;
            }
        }
    }
}
