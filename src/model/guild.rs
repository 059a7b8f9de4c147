use crate::{
    data::guild::{GuildEntry, PronounRoleEntry},
    error::storage::StorageError,
    model::pronoun::PronounRole,
    util::parse::parse_u64_from_string,
};

/// Number of grade roles per guild, one per grade from 7 to 12.
pub const GRADE_ROLE_COUNT: usize = 6;

pub const LOWEST_GRADE: i64 = 7;
pub const HIGHEST_GRADE: i64 = 12;

/// Per-guild role configuration.
///
/// Written by `/initialize` and read by every other command. A guild without
/// a config has not been initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildConfig {
    pub guild_id: u64,
    /// Role granted to every verified member.
    pub verified_role_id: u64,
    /// Grade roles, index 0 being grade 7.
    pub grade_role_ids: [u64; GRADE_ROLE_COUNT],
    pub pronoun_roles: Vec<PronounRole>,
}

/// Roles chosen by an administrator through `/initialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializeParam {
    pub verified_role_id: u64,
    pub grade_role_ids: [u64; GRADE_ROLE_COUNT],
}

impl GuildConfig {
    /// Creates a fresh config with no pronoun roles.
    pub fn new(guild_id: u64, param: InitializeParam) -> Self {
        Self {
            guild_id,
            verified_role_id: param.verified_role_id,
            grade_role_ids: param.grade_role_ids,
            pronoun_roles: Vec::new(),
        }
    }

    /// Grade role for a grade between 7 and 12.
    pub fn grade_role_id(&self, grade: i64) -> Option<u64> {
        let offset = usize::try_from(grade.checked_sub(LOWEST_GRADE)?).ok()?;
        self.grade_role_ids.get(offset).copied()
    }

    /// Converts a guild registry entry into a config at the repository boundary.
    ///
    /// # Arguments
    /// - `entry` - Raw guild record from the registry file
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Converted config
    /// - `Err(StorageError::InvalidId)` - An id is not a non-zero numeric snowflake
    /// - `Err(StorageError::InvalidRecord)` - `grade_roles` does not hold exactly six roles
    pub fn from_entry(entry: GuildEntry) -> Result<Self, StorageError> {
        let grade_role_ids: Vec<u64> = entry
            .grade_roles
            .iter()
            .map(|id| parse_u64_from_string(id))
            .collect::<Result<_, _>>()?;
        let grade_role_ids: [u64; GRADE_ROLE_COUNT] =
            grade_role_ids.try_into().map_err(|ids: Vec<u64>| {
                StorageError::InvalidRecord(format!(
                    "guild {} has {} grade roles, expected {}",
                    entry.id,
                    ids.len(),
                    GRADE_ROLE_COUNT
                ))
            })?;

        let pronoun_roles: Vec<PronounRole> = entry
            .pronoun_roles
            .into_iter()
            .map(|role| {
                Ok(PronounRole {
                    role_id: parse_u64_from_string(&role.id)?,
                    label: role.label,
                    value: role.value,
                })
            })
            .collect::<Result<_, StorageError>>()?;

        Ok(Self {
            guild_id: parse_u64_from_string(&entry.id)?,
            verified_role_id: parse_u64_from_string(&entry.verified_role)?,
            grade_role_ids,
            pronoun_roles,
        })
    }

    /// Converts the config back into its on-disk form.
    pub fn to_entry(&self) -> GuildEntry {
        GuildEntry {
            id: self.guild_id.to_string(),
            verified_role: self.verified_role_id.to_string(),
            grade_roles: self.grade_role_ids.iter().map(u64::to_string).collect(),
            pronoun_roles: self
                .pronoun_roles
                .iter()
                .map(|role| PronounRoleEntry {
                    label: role.label.clone(),
                    value: role.value.clone(),
                    id: role.role_id.to_string(),
                })
                .collect(),
        }
    }
}
