//! `/select_pronouns` and the pronoun select menu it sends.

use serenity::all::{
    CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, Context,
    CreateCommand,
};

use crate::{
    bot::{command::BotCommand, member, response},
    error::AppError,
    service::PronounService,
    state::AppState,
};

pub const NOT_CONFIGURED: &str = "Please ask an administrator to configure pronoun roles.";
pub const PRONOUNS_SET: &str = "Success! Set your pronouns.";

pub fn register() -> CreateCommand {
    CreateCommand::new(BotCommand::SelectPronouns.name()).description("Select your pronouns.")
}

/// Handles a `/select_pronouns` command by sending the pronoun menu.
///
/// Options the member already holds are pre-selected.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = match command.guild_id {
        Some(guild_id) => {
            let role_ids = member::member_role_ids(member::interaction_member(&command.member));
            PronounService::new(&state.guilds)
                .menu(guild_id.get(), &role_ids)
                .await
        }
        None => None,
    };

    let reply = match options {
        Some(options) => response::pronoun_menu(&options),
        None => response::ephemeral_message(NOT_CONFIGURED),
    };

    command.create_response(&ctx.http, reply).await?;

    Ok(())
}

/// Values picked in a string select menu; empty for any other component.
pub fn selected_values(kind: &ComponentInteractionDataKind) -> &[String] {
    match kind {
        ComponentInteractionDataKind::StringSelect { values } => values,
        _ => &[],
    }
}

/// Handles a pronoun menu submission.
///
/// Grants the selected pronoun roles and removes the unselected ones.
///
/// # Arguments
/// - `state` - Loaded roster and guild registry
/// - `ctx` - Discord context for replying and editing the member
/// - `component` - The menu submission
///
/// # Returns
/// - `Ok(())` - A reply was sent
/// - `Err(AppError::DiscordErr)` - The reply could not be sent
pub async fn submit(
    state: &AppState,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = component.guild_id else {
        component
            .create_response(&ctx.http, response::ephemeral_message(NOT_CONFIGURED))
            .await?;
        return Ok(());
    };

    let selected = selected_values(&component.data.kind);
    let Some(changes) = PronounService::new(&state.guilds)
        .apply_selection(guild_id.get(), selected)
        .await
    else {
        component
            .create_response(&ctx.http, response::ephemeral_message(NOT_CONFIGURED))
            .await?;
        return Ok(());
    };

    component
        .create_response(&ctx.http, response::ephemeral_message(PRONOUNS_SET))
        .await?;

    let user_id = component.user.id;
    let failures = member::apply_role_changes(&ctx.http, guild_id, user_id, &changes).await;

    tracing::debug!(
        "Set pronouns for user {} in guild {}: {} added, {} removed, {} failed",
        user_id,
        guild_id,
        changes.add.len(),
        changes.remove.len(),
        failures
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_string_select_values() {
        let kind = ComponentInteractionDataKind::StringSelect {
            values: vec!["he/him".to_string(), "they/them".to_string()],
        };

        assert_eq!(selected_values(&kind), ["he/him", "they/them"]);
        assert!(selected_values(&ComponentInteractionDataKind::Button).is_empty());
    }
}
