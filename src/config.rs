use std::{num::NonZeroU64, path::PathBuf};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_STUDENTS_PATH: &str = "students.json";
const DEFAULT_GUILDS_PATH: &str = "guilds.json";

pub struct Config {
    pub discord_bot_token: String,

    pub students_path: PathBuf,
    pub guilds_path: PathBuf,

    /// Guild to register slash commands in. Commands are global when unset.
    /// Never zero.
    pub command_guild_id: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count
    /// as unset.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let discord_bot_token = var("DISCORD_BOT_TOKEN")
            .or_else(|| var("BOT_TOKEN"))
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let command_guild_id = var("COMMAND_GUILD_ID")
            .map(|value| {
                value
                    .trim()
                    .parse::<NonZeroU64>()
                    .map(NonZeroU64::get)
                    .map_err(|_| ConfigError::InvalidEnvVar {
                        name: "COMMAND_GUILD_ID".to_string(),
                        value,
                    })
            })
            .transpose()?;

        Ok(Self {
            discord_bot_token,
            students_path: var("STUDENTS_PATH")
                .unwrap_or_else(|| DEFAULT_STUDENTS_PATH.to_string())
                .into(),
            guilds_path: var("GUILDS_PATH")
                .unwrap_or_else(|| DEFAULT_GUILDS_PATH.to_string())
                .into(),
            command_guild_id,
        })
    }
}
