//! Error types for the bot.
//!
//! `AppError` is the top-level error that wraps the domain-specific errors
//! raised while loading configuration, reading and writing the flat-file
//! stores, validating identity claims, and talking to Discord. Handlers turn
//! these into ephemeral replies; anything that is not the user's fault is
//! logged and replaced with a generic message.

pub mod config;
pub mod storage;
pub mod verification;

use thiserror::Error;

use crate::error::{config::ConfigError, storage::StorageError, verification::VerificationError};

/// Top-level application error type.
///
/// Most variants use `#[from]` so that `?` lifts domain errors into `AppError`
/// at the service and handler boundaries.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Roster or guild registry file could not be read, parsed, or written.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Identity claim was malformed (empty name, non-letter initial, bad grade).
    ///
    /// Shown to the user verbatim as `Error: <message>`.
    #[error(transparent)]
    VerificationErr(#[from] VerificationError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// A slash command arrived without one of its required options, or with
    /// an option of the wrong type.
    ///
    /// # Fields
    /// - Name of the missing option
    #[error("Missing or malformed command option `{0}`")]
    MissingOption(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
