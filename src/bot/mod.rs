//! Discord bot integration.
//!
//! This module is the adapter between Discord and the services: it starts the
//! serenity client, registers the slash commands, turns interactions into
//! service calls, and applies the resulting role and nickname changes.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is required. Everything the bot needs about the invoking
//! member (roles, permissions) arrives with the interaction itself.

pub mod command;
pub mod handler;
pub mod member;
pub mod response;
pub mod start;
