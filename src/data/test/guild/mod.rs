use crate::{
    data::guild::GuildRepository,
    error::storage::StorageError,
    model::{GuildConfig, InitializeParam, PronounRole},
};
use test_utils::{builder::TestBuilder, factory::GuildFactory};

mod find_by_guild_id;
mod load;
mod upsert;

fn config(guild_id: u64, verified_role_id: u64) -> GuildConfig {
    GuildConfig::new(
        guild_id,
        InitializeParam {
            verified_role_id,
            grade_role_ids: [7, 8, 9, 10, 11, 12],
        },
    )
}
