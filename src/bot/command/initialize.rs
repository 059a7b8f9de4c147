//! `/initialize`: administrator-only guild setup.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::{
        command::{option::CommandOptions, BotCommand},
        member, response,
    },
    error::AppError,
    model::{guild::GRADE_ROLE_COUNT, InitializeParam},
    service::GuildService,
    state::AppState,
};

pub const INSUFFICIENT_PERMISSIONS: &str =
    "You do not have sufficient permissions. You must be an administrator.";

/// Role option names for grades 7 through 12, in grade order.
pub const GRADE_ROLE_OPTIONS: [&str; GRADE_ROLE_COUNT] = [
    "grade_7_role",
    "grade_8_role",
    "grade_9_role",
    "grade_10_role",
    "grade_11_role",
    "grade_12_role",
];

pub fn register() -> CreateCommand {
    let command = CreateCommand::new(BotCommand::Initialize.name())
        .description("Initialize the server with Woodlands Checkpoint.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Role,
                "verified_role",
                "Role given to every verified student.",
            )
            .required(true),
        );

    GRADE_ROLE_OPTIONS
        .iter()
        .zip(7..)
        .fold(command, |command, (name, grade)| {
            command.add_option(
                CreateCommandOption::new(
                    CommandOptionType::Role,
                    *name,
                    format!("Role for grade {} students.", grade),
                )
                .required(true),
            )
        })
}

/// Reads the verified role and the six grade roles.
pub fn parse_param(options: &CommandOptions<'_>) -> Result<InitializeParam, AppError> {
    let mut grade_role_ids = [0; GRADE_ROLE_COUNT];
    for (slot, name) in grade_role_ids.iter_mut().zip(GRADE_ROLE_OPTIONS) {
        *slot = options.role(name)?;
    }

    Ok(InitializeParam {
        verified_role_id: options.role("verified_role")?,
        grade_role_ids,
    })
}

/// Handles an `/initialize` command.
///
/// Replaces the guild's configuration after checking the invoking member is an
/// administrator. A registry write failure is reported to the administrator,
/// though the new configuration is already active in memory.
///
/// # Arguments
/// - `state` - Loaded roster and guild registry
/// - `ctx` - Discord context for replying
/// - `command` - The `/initialize` interaction
///
/// # Returns
/// - `Ok(())` - A reply was sent
/// - `Err(AppError::DiscordErr)` - The reply could not be sent
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let content = match command.guild_id {
        None => super::verify::GUILD_ONLY.to_string(),
        Some(_) if !member::is_admin(member::interaction_member(&command.member)) => {
            tracing::info!(
                "User {} attempted /initialize without administrator permission",
                command.user.id
            );
            INSUFFICIENT_PERMISSIONS.to_string()
        }
        Some(guild_id) => match parse_param(&CommandOptions::new(&command.data.options)) {
            Err(e) => format!("Error: {}", e),
            Ok(param) => match GuildService::new(&state.guilds)
                .initialize(guild_id.get(), param)
                .await
            {
                Ok(config) => format!("Set role to <@&{}>", config.verified_role_id),
                Err(e) => {
                    tracing::error!("Failed to save guild registry for guild {}: {}", guild_id, e);
                    format!("Error while saving guilds.json: {}", e)
                }
            },
        },
    };

    command
        .create_response(&ctx.http, response::ephemeral_message(content))
        .await?;

    Ok(())
}
