//! Guild registry entry factory.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for guild registry entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::GuildFactory;
///
/// let guild = GuildFactory::new()
///     .guild_id(42)
///     .verified_role(100)
///     .pronoun_role("She/Her", "she/her", 300)
///     .build();
/// ```
pub struct GuildFactory {
    guild_id: u64,
    verified_role: u64,
    grade_roles: Vec<u64>,
    pronoun_roles: Vec<(String, String, u64)>,
}

impl GuildFactory {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id, verified_role: unique generated ids
    /// - grade_roles: six unique generated ids
    /// - pronoun_roles: none
    pub fn new() -> Self {
        Self {
            guild_id: next_id(),
            verified_role: next_id(),
            grade_roles: (0..6).map(|_| next_id()).collect(),
            pronoun_roles: Vec::new(),
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn verified_role(mut self, role_id: u64) -> Self {
        self.verified_role = role_id;
        self
    }

    /// Sets the grade roles. Any count is accepted so tests can write invalid entries.
    pub fn grade_roles(mut self, role_ids: &[u64]) -> Self {
        self.grade_roles = role_ids.to_vec();
        self
    }

    /// Adds a pronoun role.
    pub fn pronoun_role(
        mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        role_id: u64,
    ) -> Self {
        self.pronoun_roles
            .push((label.into(), value.into(), role_id));
        self
    }

    /// Builds the registry file record, with every id as a string.
    pub fn build(self) -> Value {
        let pronoun_roles: Vec<Value> = self
            .pronoun_roles
            .into_iter()
            .map(|(label, value, id)| {
                json!({ "label": label, "value": value, "id": id.to_string() })
            })
            .collect();

        json!({
            "id": self.guild_id.to_string(),
            "verified_role": self.verified_role.to_string(),
            "grade_roles": self.grade_roles.iter().map(u64::to_string).collect::<Vec<_>>(),
            "pronoun_roles": pronoun_roles,
        })
    }
}

impl Default for GuildFactory {
    fn default() -> Self {
        Self::new()
    }
}
