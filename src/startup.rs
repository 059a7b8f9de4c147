//! Startup helpers: logging and state loading.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::Config,
    data::{GuildRepository, RosterRepository},
    error::AppError,
    state::AppState,
};

/// Installs the tracing subscriber.
///
/// Defaults to `info`; override with `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Loads the roster and guild registry named in the config.
///
/// # Returns
/// - `Ok(AppState)` - Roster and registry ready to serve interactions
/// - `Err(AppError::StorageErr)` - Roster missing or malformed, or registry malformed
pub async fn load_state(config: &Config) -> Result<AppState, AppError> {
    let roster = RosterRepository::new(&config.students_path).load().await?;
    if roster.is_empty() {
        tracing::warn!("Roster at {} has no students", config.students_path.display());
    }

    let guilds = GuildRepository::load(&config.guilds_path).await?;
    let guild_count = guilds.len().await;
    tracing::debug!(
        "Guild registry at {} holds {} guilds",
        guilds.path().display(),
        guild_count
    );

    Ok(AppState::new(roster, guilds))
}
