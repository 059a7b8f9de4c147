//! Ready event handler for bot initialization.
//!
//! Fired once the bot has connected to Discord's gateway. Sets the presence and
//! registers the slash commands, guild-scoped when a command guild is
//! configured and global otherwise.

use serenity::all::{ActivityData, Context, Ready};

use crate::bot::command::register_commands;

/// Handles the ready event when the bot connects to Discord.
///
/// A failed command registration is logged; the bot keeps running and serves
/// whatever commands Discord already has registered.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
/// - `command_guild_id` - Guild to register commands in, if any
pub async fn handle_ready(ctx: Context, ready: Ready, command_guild_id: Option<u64>) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::listening("/verify")));

    match register_commands(&ctx.http, command_guild_id).await {
        Ok(count) => match command_guild_id {
            Some(guild_id) => {
                tracing::info!("Registered {} commands in guild {}", count, guild_id)
            }
            None => tracing::info!("Registered {} global commands", count),
        },
        Err(e) => tracing::error!("Failed to register commands: {}", e),
    }
}
