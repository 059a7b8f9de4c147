//! Member inspection and mutation through the Discord API.
//!
//! Individual role or nickname failures are logged and counted but never abort
//! the rest of the changes; the member still gets the reply for their request.

use std::borrow::Borrow;

use serenity::all::{EditMember, GuildId, Http, Member, RoleId, UserId};

use crate::model::RoleChanges;

const AUDIT_LOG_REASON: &str = "Woodlands Checkpoint";

/// Borrows the member from an interaction payload.
///
/// Command interactions box the member and component interactions do not;
/// this accepts either.
pub fn interaction_member<M: Borrow<Member>>(member: &Option<M>) -> Option<&Member> {
    member.as_ref().map(|m| <M as Borrow<Member>>::borrow(m))
}

/// Whether the member holds the ADMINISTRATOR permission.
///
/// Members without resolved permissions, or no member at all, are not admins.
pub fn is_admin(member: Option<&Member>) -> bool {
    member
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator())
}

/// Role ids held by the member.
pub fn member_role_ids(member: Option<&Member>) -> Vec<u64> {
    member
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default()
}

/// Applies role changes to a member, removals first.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `guild_id` - Guild the member belongs to
/// - `user_id` - Member to change
/// - `changes` - Roles to remove, then roles to add
///
/// # Returns
/// - Number of role changes that failed
pub async fn apply_role_changes(
    http: &Http,
    guild_id: GuildId,
    user_id: UserId,
    changes: &RoleChanges,
) -> usize {
    let mut failures = 0;

    for &role_id in &changes.remove {
        if let Err(e) = http
            .remove_member_role(guild_id, user_id, RoleId::new(role_id), Some(AUDIT_LOG_REASON))
            .await
        {
            tracing::warn!(
                "Failed to remove role {} from user {} in guild {}: {}",
                role_id,
                user_id,
                guild_id,
                e
            );
            failures += 1;
        }
    }

    for &role_id in &changes.add {
        if let Err(e) = http
            .add_member_role(guild_id, user_id, RoleId::new(role_id), Some(AUDIT_LOG_REASON))
            .await
        {
            tracing::warn!(
                "Failed to add role {} to user {} in guild {}: {}",
                role_id,
                user_id,
                guild_id,
                e
            );
            failures += 1;
        }
    }

    failures
}

/// Sets a member's nickname, logging on failure.
///
/// Fails for the guild owner and for members above the bot's highest role.
pub async fn set_nickname(http: &Http, guild_id: GuildId, user_id: UserId, nickname: &str) -> bool {
    match guild_id
        .edit_member(http, user_id, EditMember::new().nickname(nickname))
        .await
    {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(
                "Failed to set nickname for user {} in guild {}: {}",
                user_id,
                guild_id,
                e
            );
            false
        }
    }
}
