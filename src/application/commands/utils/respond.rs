use serenity::all::{
    CommandInteraction, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::prelude::*;
use tracing::error;

/// Reply to a slash command with a plain message
pub async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
    ephemeral: bool,
) {
    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::default()
            .content(content)
            .ephemeral(ephemeral),
    );

    if let Err(e) = command.create_response(&ctx.http, builder).await {
        error!("Failed to send /{} response: {}", command.data.name, e);
    }
}
