//! Guild registry repository.
//!
//! Holds every guild's configuration in memory and mirrors it to a JSON file.
//! Each upsert rewrites the whole file. Writers are serialized by the registry
//! lock, which is held across the file write so two `/initialize` calls cannot
//! interleave their snapshots.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{
    data::json::{read_json, write_json_atomic},
    error::storage::StorageError,
    model::GuildConfig,
};

/// A guild as stored in the registry file. Ids are snowflake strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GuildEntry {
    pub id: String,
    pub verified_role: String,
    pub grade_roles: Vec<String>,
    #[serde(default)]
    pub pronoun_roles: Vec<PronounRoleEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PronounRoleEntry {
    pub label: String,
    pub value: String,
    pub id: String,
}

/// Top-level registry document.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GuildFile {
    #[serde(default)]
    pub guilds: Vec<GuildEntry>,
}

/// Repository for per-guild configuration.
pub struct GuildRepository {
    path: PathBuf,
    guilds: RwLock<Vec<GuildConfig>>,
}

impl GuildRepository {
    /// Loads the registry from `path`.
    ///
    /// A missing file is treated as an empty registry; it is created on the
    /// first upsert. If the file lists a guild more than once, the last entry
    /// wins.
    ///
    /// # Arguments
    /// - `path` - Location of the registry file
    ///
    /// # Returns
    /// - `Ok(GuildRepository)` - Registry ready for lookups
    /// - `Err(StorageError)` - File unreadable, malformed, or holding an invalid entry
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let file: GuildFile = match read_json(&path).await {
            Ok(file) => file,
            Err(StorageError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "Guild registry {} not found, starting with no configured guilds",
                    path.display()
                );
                GuildFile::default()
            }
            Err(e) => return Err(e),
        };

        let mut guilds: Vec<GuildConfig> = Vec::with_capacity(file.guilds.len());
        for entry in file.guilds {
            let config = GuildConfig::from_entry(entry)?;
            guilds.retain(|existing| existing.guild_id != config.guild_id);
            guilds.push(config);
        }

        tracing::info!(
            "Loaded {} guild configurations from {}",
            guilds.len(),
            path.display()
        );

        Ok(Self {
            path,
            guilds: RwLock::new(guilds),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Finds a guild's configuration by its Discord guild ID
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Some(GuildConfig)`: Guild has been initialized
    /// - `None`: Guild has not been initialized
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Option<GuildConfig> {
        self.guilds
            .read()
            .await
            .iter()
            .find(|guild| guild.guild_id == guild_id)
            .cloned()
    }

    /// Number of configured guilds.
    pub async fn len(&self) -> usize {
        self.guilds.read().await.len()
    }

    pub async fn get_all(&self) -> Vec<GuildConfig> {
        self.guilds.read().await.clone()
    }

    /// Inserts or replaces a guild's configuration and persists the registry.
    ///
    /// Any existing config with the same guild ID is removed and the new one is
    /// appended. The in-memory registry keeps the change even when the file
    /// write fails, so the caller must surface the error.
    ///
    /// # Arguments
    /// - `config` - Configuration to store
    ///
    /// # Returns
    /// - `Ok(())` - Registry updated and written to disk
    /// - `Err(StorageError)` - Registry updated in memory but the file write failed
    pub async fn upsert(&self, config: GuildConfig) -> Result<(), StorageError> {
        let mut guilds = self.guilds.write().await;

        guilds.retain(|existing| existing.guild_id != config.guild_id);
        guilds.push(config);

        let file = GuildFile {
            guilds: guilds.iter().map(GuildConfig::to_entry).collect(),
        };

        write_json_atomic(&self.path, &file).await
    }
}
