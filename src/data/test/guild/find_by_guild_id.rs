use super::*;

/// Tests finding an initialized guild.
///
/// Expected: Some(config)
#[tokio::test]
async fn finds_existing_guild() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_guild(GuildFactory::new().guild_id(123456789).verified_role(42))
        .build()
        .unwrap();

    let repo = GuildRepository::load(&test.guilds_path).await?;
    let guild = repo.find_by_guild_id(123456789).await;

    assert!(guild.is_some());
    assert_eq!(guild.unwrap().verified_role_id, 42);

    Ok(())
}

/// Tests finding a guild that was never initialized.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_guild(GuildFactory::new().guild_id(1))
        .build()
        .unwrap();

    let repo = GuildRepository::load(&test.guilds_path).await?;

    assert!(repo.find_by_guild_id(999999999).await.is_none());

    Ok(())
}
