//! Pronoun role selection.

/// A self-assignable pronoun role configured for a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounRole {
    /// Text shown in the select menu.
    pub label: String,
    /// Value submitted by the select menu.
    pub value: String,
    pub role_id: u64,
}

/// One entry of the pronoun select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounOption {
    pub label: String,
    pub value: String,
    /// Pre-selected because the member already holds the role.
    pub selected: bool,
}

/// Roles to add to and remove from a member.
///
/// Removals are applied before additions, so a role present in both ends up
/// granted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleChanges {
    pub add: Vec<u64>,
    pub remove: Vec<u64>,
}

/// Splits the configured pronoun roles by whether their value was selected.
///
/// # Arguments
/// - `roles` - Pronoun roles configured for the guild
/// - `selected` - Values submitted from the select menu
///
/// # Returns
/// - `RoleChanges` - Selected roles in `add`, every other configured role in `remove`
pub fn pronoun_role_changes(roles: &[PronounRole], selected: &[String]) -> RoleChanges {
    let (add, remove): (Vec<&PronounRole>, Vec<&PronounRole>) = roles
        .iter()
        .partition(|role| selected.iter().any(|value| *value == role.value));

    RoleChanges {
        add: add.into_iter().map(|role| role.role_id).collect(),
        remove: remove.into_iter().map(|role| role.role_id).collect(),
    }
}

/// Builds select menu options, marking roles the member already has.
pub fn pronoun_options(roles: &[PronounRole], member_role_ids: &[u64]) -> Vec<PronounOption> {
    roles
        .iter()
        .map(|role| PronounOption {
            label: role.label.clone(),
            value: role.value.clone(),
            selected: member_role_ids.contains(&role.role_id),
        })
        .collect()
}
