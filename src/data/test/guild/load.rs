use super::*;

/// Tests loading when the registry file does not exist yet.
///
/// Expected: Ok with an empty registry
#[tokio::test]
async fn missing_file_is_empty_registry() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().unwrap();

    let repo = GuildRepository::load(&test.guilds_path).await?;

    assert!(repo.get_all().await.is_empty());
    assert!(!test.guilds_path.exists());

    Ok(())
}

/// Tests loading a registry file that exists but lists no guilds.
///
/// Expected: Ok with an empty registry
#[tokio::test]
async fn empty_file_is_empty_registry() -> Result<(), StorageError> {
    let test = TestBuilder::new().with_empty_guild_file().build().unwrap();

    let repo = GuildRepository::load(&test.guilds_path).await?;

    assert!(test.guilds_path.exists());
    assert_eq!(repo.len().await, 0);
    assert!(repo.find_by_guild_id(1).await.is_none());

    Ok(())
}

/// Tests loading guild entries with pronoun roles.
///
/// Expected: Ok with every field converted
#[tokio::test]
async fn loads_guild_entries() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_guild(
            GuildFactory::new()
                .guild_id(1)
                .verified_role(2)
                .grade_roles(&[70, 80, 90, 100, 110, 120])
                .pronoun_role("He/Him", "he/him", 10)
                .pronoun_role("She/Her", "she/her", 20),
        )
        .with_guild(GuildFactory::new().guild_id(3))
        .build()
        .unwrap();

    let repo = GuildRepository::load(&test.guilds_path).await?;

    assert_eq!(repo.len().await, 2);

    let guild = repo.find_by_guild_id(1).await.unwrap();
    assert_eq!(guild.verified_role_id, 2);
    assert_eq!(guild.grade_role_ids, [70, 80, 90, 100, 110, 120]);
    assert_eq!(
        guild.pronoun_roles[1],
        PronounRole {
            label: "She/Her".to_string(),
            value: "she/her".to_string(),
            role_id: 20,
        }
    );
    assert_eq!(repo.get_all().await.len(), 2);

    Ok(())
}

/// Tests that a file missing `pronoun_roles` still loads.
///
/// Expected: Ok with no pronoun roles
#[tokio::test]
async fn pronoun_roles_default_to_empty() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_raw_guilds(
            r#"{"guilds":[{"id":"1","verified_role":"2","grade_roles":["3","4","5","6","7","8"]}]}"#,
        )
        .build()
        .unwrap();

    let repo = GuildRepository::load(&test.guilds_path).await?;

    assert!(repo.find_by_guild_id(1).await.unwrap().pronoun_roles.is_empty());

    Ok(())
}

/// Tests that a duplicated guild id keeps the later entry.
///
/// Expected: Ok with one entry holding the second verified role
#[tokio::test]
async fn duplicate_entries_keep_last() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_guild(GuildFactory::new().guild_id(1).verified_role(10))
        .with_guild(GuildFactory::new().guild_id(1).verified_role(20))
        .build()
        .unwrap();

    let repo = GuildRepository::load(&test.guilds_path).await?;

    assert_eq!(repo.get_all().await.len(), 1);
    assert_eq!(repo.find_by_guild_id(1).await.unwrap().verified_role_id, 20);

    Ok(())
}

/// Tests loading an entry with the wrong number of grade roles.
///
/// Expected: Err(StorageError::InvalidRecord)
#[tokio::test]
async fn rejects_wrong_grade_role_count() {
    let test = TestBuilder::new()
        .with_guild(GuildFactory::new().grade_roles(&[1, 2, 3]))
        .build()
        .unwrap();

    let result = GuildRepository::load(&test.guilds_path).await;

    assert!(matches!(result, Err(StorageError::InvalidRecord(_))));
}

/// Tests loading a registry file that is not JSON.
///
/// Expected: Err(StorageError::Json)
#[tokio::test]
async fn rejects_malformed_file() {
    let test = TestBuilder::new()
        .with_raw_guilds("not json")
        .build()
        .unwrap();

    let result = GuildRepository::load(&test.guilds_path).await;

    assert!(matches!(result, Err(StorageError::Json { .. })));
}
