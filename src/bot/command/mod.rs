//! Slash commands and message components.
//!
//! Interactions are dispatched on typed enums instead of string-keyed handler
//! maps: `BotCommand` for slash commands and `BotComponent` for component
//! custom ids.

pub mod initialize;
pub mod option;
pub mod select_pronouns;
pub mod verify;

use serenity::all::{Command, CreateCommand, GuildId, Http};

use crate::error::AppError;

/// Slash commands the bot registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Verify,
    Initialize,
    SelectPronouns,
}

impl BotCommand {
    pub const ALL: [BotCommand; 3] = [Self::Verify, Self::Initialize, Self::SelectPronouns];

    pub fn name(self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::Initialize => "initialize",
            Self::SelectPronouns => "select_pronouns",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Builder used to register the command with Discord.
    pub fn create(self) -> CreateCommand {
        match self {
            Self::Verify => verify::register(),
            Self::Initialize => initialize::register(),
            Self::SelectPronouns => select_pronouns::register(),
        }
    }
}

/// Message components the bot sends and handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotComponent {
    /// Pronoun select menu sent by `/select_pronouns`.
    PronounSelect,
}

impl BotComponent {
    pub fn custom_id(self) -> &'static str {
        match self {
            Self::PronounSelect => "sp",
        }
    }

    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        [Self::PronounSelect]
            .into_iter()
            .find(|component| component.custom_id() == custom_id)
    }
}

/// Registers every slash command, replacing whatever was registered before.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `guild_id` - Register in this guild only; global registration when `None`
///
/// # Returns
/// - `Ok(usize)` - Number of commands registered
/// - `Err(AppError::DiscordErr)` - Discord rejected the registration
pub async fn register_commands(http: &Http, guild_id: Option<u64>) -> Result<usize, AppError> {
    let commands: Vec<CreateCommand> = BotCommand::ALL
        .into_iter()
        .map(BotCommand::create)
        .collect();

    let registered = match guild_id {
        Some(guild_id) => GuildId::new(guild_id).set_commands(http, commands).await?,
        None => Command::set_global_commands(http, commands).await?,
    };

    Ok(registered.len())
}
