use super::*;
use std::collections::HashSet;

/// Tests upserting into an empty registry.
///
/// Verifies that the config is visible immediately and that the registry file
/// is created with the snowflakes written as strings.
///
/// Expected: Ok with the guild persisted
#[tokio::test]
async fn upserts_new_guild() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().unwrap();
    let repo = GuildRepository::load(&test.guilds_path).await?;

    repo.upsert(config(1, 100)).await?;

    assert_eq!(repo.find_by_guild_id(1).await, Some(config(1, 100)));

    let file = test.read_guilds();
    assert_eq!(file["guilds"][0]["id"], "1");
    assert_eq!(file["guilds"][0]["verified_role"], "100");
    assert_eq!(file["guilds"][0]["grade_roles"][5], "12");
    assert_eq!(
        file["guilds"][0]["pronoun_roles"],
        serde_json::Value::Array(vec![])
    );

    Ok(())
}

/// Tests upserting the same guild id twice with different roles.
///
/// Expected: Ok with exactly one entry holding the latest verified role
#[tokio::test]
async fn replaces_existing_guild() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_guild(GuildFactory::new().guild_id(7))
        .build()
        .unwrap();
    let repo = GuildRepository::load(&test.guilds_path).await?;

    repo.upsert(config(1, 100)).await?;
    repo.upsert(config(1, 200)).await?;

    let all = repo.get_all().await;
    assert_eq!(all.iter().filter(|g| g.guild_id == 1).count(), 1);
    assert_eq!(repo.find_by_guild_id(1).await.unwrap().verified_role_id, 200);
    assert!(repo.find_by_guild_id(7).await.is_some());

    Ok(())
}

/// Tests upserting an identical config twice.
///
/// Expected: Ok with a single entry for the guild
#[tokio::test]
async fn upsert_is_idempotent() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().unwrap();
    let repo = GuildRepository::load(&test.guilds_path).await?;

    repo.upsert(config(1, 100)).await?;
    repo.upsert(config(1, 100)).await?;

    assert_eq!(repo.get_all().await, vec![config(1, 100)]);

    Ok(())
}

/// Tests that upserting replaces pronoun roles along with the rest.
///
/// Expected: Ok with the re-initialized guild holding no pronoun roles
#[tokio::test]
async fn reinitialize_clears_pronoun_roles() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_guild(
            GuildFactory::new()
                .guild_id(1)
                .pronoun_role("She/Her", "she/her", 20),
        )
        .build()
        .unwrap();
    let repo = GuildRepository::load(&test.guilds_path).await?;

    repo.upsert(config(1, 100)).await?;

    assert!(repo.find_by_guild_id(1).await.unwrap().pronoun_roles.is_empty());

    Ok(())
}

/// Tests that the persisted registry reloads to the same set of configs.
///
/// Expected: Ok with identical configs regardless of order
#[tokio::test]
async fn persisted_registry_round_trips() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_guild(
            GuildFactory::new()
                .guild_id(5)
                .pronoun_role("They/Them", "they/them", 55),
        )
        .build()
        .unwrap();
    let repo = GuildRepository::load(&test.guilds_path).await?;

    repo.upsert(config(1, 100)).await?;
    repo.upsert(config(2, 200)).await?;
    repo.upsert(config(1, 300)).await?;

    let reloaded = GuildRepository::load(&test.guilds_path).await?;

    let key = |g: &GuildConfig| (g.guild_id, g.verified_role_id, g.pronoun_roles.len());
    let before: HashSet<_> = repo.get_all().await.iter().map(key).collect();
    let after: HashSet<_> = reloaded.get_all().await.iter().map(key).collect();
    assert_eq!(before, after);
    assert_eq!(before.len(), 3);
    assert_eq!(
        reloaded.find_by_guild_id(5).await,
        repo.find_by_guild_id(5).await
    );

    Ok(())
}

/// Tests a failed write.
///
/// A non-empty directory occupies the registry path, so the final rename
/// fails. The in-memory registry still holds the new config.
///
/// Expected: Err(StorageError::Io) with the config still findable
#[tokio::test]
async fn failed_write_keeps_memory_update() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().unwrap();
    let repo = GuildRepository::load(&test.guilds_path).await?;

    std::fs::create_dir(&test.guilds_path).unwrap();
    std::fs::write(test.guilds_path.join("occupied"), "x").unwrap();

    let result = repo.upsert(config(1, 100)).await;

    assert!(matches!(result, Err(StorageError::Io { .. })));
    assert_eq!(repo.find_by_guild_id(1).await, Some(config(1, 100)));

    Ok(())
}
