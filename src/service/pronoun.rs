//! Pronoun menu and selection.

use crate::{
    data::GuildRepository,
    model::{
        pronoun::{pronoun_options, pronoun_role_changes},
        PronounOption, RoleChanges,
    },
};

pub struct PronounService<'a> {
    guilds: &'a GuildRepository,
}

impl<'a> PronounService<'a> {
    pub fn new(guilds: &'a GuildRepository) -> Self {
        Self { guilds }
    }

    /// Builds the pronoun select menu options for a member.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the menu is shown in
    /// - `member_role_ids` - Roles the member currently holds
    ///
    /// # Returns
    /// - `Some(options)` - One option per configured pronoun role
    /// - `None` - Guild not initialized or has no pronoun roles
    pub async fn menu(&self, guild_id: u64, member_role_ids: &[u64]) -> Option<Vec<PronounOption>> {
        let guild = self.guilds.find_by_guild_id(guild_id).await?;

        if guild.pronoun_roles.is_empty() {
            return None;
        }

        Some(pronoun_options(&guild.pronoun_roles, member_role_ids))
    }

    /// Works out role changes for a submitted pronoun selection.
    ///
    /// # Returns
    /// - `Some(RoleChanges)` - Selected pronoun roles to add, the rest to remove
    /// - `None` - Guild not initialized
    pub async fn apply_selection(&self, guild_id: u64, selected: &[String]) -> Option<RoleChanges> {
        let guild = self.guilds.find_by_guild_id(guild_id).await?;

        Some(pronoun_role_changes(&guild.pronoun_roles, selected))
    }
}
