//! Interaction dispatch for slash commands and message components.

use serenity::all::{Context, Interaction};

use crate::{
    bot::command::{initialize, select_pronouns, verify, BotCommand, BotComponent},
    state::AppState,
};

/// Routes an interaction to its command or component handler.
///
/// Unknown commands and components are logged and ignored. Handler errors are
/// logged here since there is no one left to report them to.
///
/// # Arguments
/// - `state` - Loaded roster and guild registry
/// - `ctx` - Discord context passed through to the handler
/// - `interaction` - Incoming interaction
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            let Some(kind) = BotCommand::from_name(&command.data.name) else {
                tracing::warn!("Received unknown command /{}", command.data.name);
                return;
            };

            let result = match kind {
                BotCommand::Verify => verify::run(state, &ctx, &command).await,
                BotCommand::Initialize => initialize::run(state, &ctx, &command).await,
                BotCommand::SelectPronouns => select_pronouns::run(state, &ctx, &command).await,
            };

            if let Err(e) = result {
                tracing::error!("Failed to handle /{}: {}", kind.name(), e);
            }
        }
        Interaction::Component(component) => {
            let Some(kind) = BotComponent::from_custom_id(&component.data.custom_id) else {
                tracing::warn!("Received unknown component {}", component.data.custom_id);
                return;
            };

            let result = match kind {
                BotComponent::PronounSelect => select_pronouns::submit(state, &ctx, &component).await,
            };

            if let Err(e) = result {
                tracing::error!("Failed to handle component {}: {}", kind.custom_id(), e);
            }
        }
        _ => {}
    }
}
