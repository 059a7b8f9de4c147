//! Reply builders. Every reply the bot sends is ephemeral.

use serenity::all::{
    CreateActionRow, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption,
};

use crate::{bot::command::BotComponent, model::PronounOption};

/// Upper bound on pronouns a member can pick at once.
pub const MAX_PRONOUN_SELECTIONS: usize = 3;

/// Ephemeral text reply.
pub fn ephemeral_message(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

/// Ephemeral reply carrying the pronoun select menu.
///
/// `options` must not be empty; Discord rejects a menu without options.
pub fn pronoun_menu(options: &[PronounOption]) -> CreateInteractionResponse {
    let menu_options: Vec<CreateSelectMenuOption> = options
        .iter()
        .map(|option| {
            CreateSelectMenuOption::new(&option.label, &option.value)
                .default_selection(option.selected)
        })
        .collect();

    let menu = CreateSelectMenu::new(
        BotComponent::PronounSelect.custom_id(),
        CreateSelectMenuKind::String {
            options: menu_options,
        },
    )
    .placeholder("Select your pronouns")
    .min_values(1)
    .max_values(pronoun_max_values(options.len()));

    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content("Select your pronouns.")
            .ephemeral(true)
            .components(vec![CreateActionRow::SelectMenu(menu)]),
    )
}

/// Largest selection the menu allows for `option_count` options.
pub fn pronoun_max_values(option_count: usize) -> u8 {
    option_count.clamp(1, MAX_PRONOUN_SELECTIONS) as u8
}
