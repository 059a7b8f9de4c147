//! `/verify`: check a member's submitted identity against the roster.
//!
//! On a match in an initialized guild the member's grade roles are replaced,
//! the verified role is granted and the nickname is set to `"First L."`. The
//! student number is collected but never checked or logged.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::{
        command::{option::CommandOptions, BotCommand},
        member, response,
    },
    error::{verification::VerificationError, AppError},
    model::VerificationRequest,
    service::{VerificationOutcome, VerificationService},
    state::AppState,
};

pub const VERIFIED: &str = "You are verified! Welcome!";
pub const NOT_INITIALIZED: &str = "Please ask an admin to use `/initialize`.";
pub const NO_MATCH: &str = "Sorry, your information is invalid.";
pub const GUILD_ONLY: &str = "This command can only be used in a server.";

pub fn register() -> CreateCommand {
    CreateCommand::new(BotCommand::Verify.name())
        .description("Verify that you are a student.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "first_name", "Your first name.")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "last_name", "Your last name.")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "grade", "Your grade.")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "teacher_name",
                "The last name of your homeroom teacher (Week 1, Period 1).",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "student_number",
                "Your student number (6 digits).",
            )
            .required(true),
        )
}

/// Reads the `/verify` options into a request.
///
/// # Returns
/// - `Ok(VerificationRequest)` - All five options were present
/// - `Err(AppError::MissingOption)` - An option is missing or mistyped
pub fn parse_request(options: &CommandOptions<'_>) -> Result<VerificationRequest, AppError> {
    Ok(VerificationRequest {
        first_name: options.string("first_name")?.to_string(),
        last_name: options.string("last_name")?.to_string(),
        grade: options.integer("grade")?,
        teacher_name: options.string("teacher_name")?.to_string(),
        student_number: options.integer("student_number")?,
    })
}

/// Reply text for a verification result.
pub fn reply_content(outcome: &Result<VerificationOutcome, VerificationError>) -> String {
    match outcome {
        Ok(VerificationOutcome::Verified { .. }) => VERIFIED.to_string(),
        Ok(VerificationOutcome::GuildNotInitialized) => NOT_INITIALIZED.to_string(),
        Ok(VerificationOutcome::NoMatch) => NO_MATCH.to_string(),
        Err(e) => format!("Error: {}", e),
    }
}

/// Handles a `/verify` command.
///
/// Replies first and applies role and nickname changes afterwards; failures of
/// individual changes are logged and do not alter the reply.
///
/// # Arguments
/// - `state` - Loaded roster and guild registry
/// - `ctx` - Discord context for replying and editing the member
/// - `command` - The `/verify` interaction
///
/// # Returns
/// - `Ok(())` - A reply was sent
/// - `Err(AppError::DiscordErr)` - The reply could not be sent
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        command
            .create_response(&ctx.http, response::ephemeral_message(GUILD_ONLY))
            .await?;
        return Ok(());
    };

    let options = CommandOptions::new(&command.data.options);
    let request = match parse_request(&options) {
        Ok(request) => request,
        Err(e) => {
            command
                .create_response(&ctx.http, response::ephemeral_message(format!("Error: {}", e)))
                .await?;
            return Ok(());
        }
    };

    let service = VerificationService::new(&state.roster, &state.guilds);
    let outcome = service.verify(guild_id.get(), &request).await;

    command
        .create_response(&ctx.http, response::ephemeral_message(reply_content(&outcome)))
        .await?;

    match outcome {
        Ok(VerificationOutcome::Verified { nickname, roles }) => {
            let user_id = command.user.id;
            let failures = member::apply_role_changes(&ctx.http, guild_id, user_id, &roles).await;
            let nickname_set = member::set_nickname(&ctx.http, guild_id, user_id, &nickname).await;

            tracing::info!(
                "Verified user {} in guild {} ({} role change failures, nickname set: {})",
                user_id,
                guild_id,
                failures,
                nickname_set
            );
        }
        Ok(VerificationOutcome::GuildNotInitialized) => {
            tracing::info!(
                "User {} matched the roster but guild {} is not initialized",
                command.user.id,
                guild_id
            );
        }
        Ok(VerificationOutcome::NoMatch) => {
            tracing::debug!("No roster match for user {} in guild {}", command.user.id, guild_id);
        }
        Err(e) => {
            tracing::debug!("Invalid verification input from user {}: {}", command.user.id, e);
        }
    }

    Ok(())
}
