//! Guild initialization.

use crate::{
    data::GuildRepository,
    error::storage::StorageError,
    model::{GuildConfig, InitializeParam},
};

pub struct GuildService<'a> {
    guilds: &'a GuildRepository,
}

impl<'a> GuildService<'a> {
    pub fn new(guilds: &'a GuildRepository) -> Self {
        Self { guilds }
    }

    /// Stores a fresh configuration for a guild, replacing any previous one.
    ///
    /// Pronoun roles from a previous configuration are not carried over.
    /// Callers are responsible for checking that the requester is an
    /// administrator.
    ///
    /// # Arguments
    /// - `guild_id` - Guild being initialized
    /// - `param` - Verified and grade roles chosen by the administrator
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The stored configuration
    /// - `Err(StorageError)` - Registry file could not be written; the
    ///   configuration is still active in memory
    pub async fn initialize(
        &self,
        guild_id: u64,
        param: InitializeParam,
    ) -> Result<GuildConfig, StorageError> {
        let config = GuildConfig::new(guild_id, param);

        self.guilds.upsert(config.clone()).await?;

        tracing::info!(
            "Initialized guild {} with verified role {}",
            guild_id,
            config.verified_role_id
        );

        Ok(config)
    }
}
