use super::*;

#[tokio::test]
async fn creates_deck_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = DeckRepository::new(db);
    let id = Uuid::new_v4();
    let deck = repo
        .create(CreateDeckParams {
            id,
            user_id: user.id,
            name: "Aggro".to_string(),
        })
        .await?;

    assert_eq!(deck.id, id);
    assert_eq!(deck.user_id, user.id);
    assert_eq!(deck.name, "Aggro");

    Ok(())
}

/// Tests that the owner foreign key is enforced.
///
/// Expected: Err for a user ID with no row
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db);
    let result = repo
        .create(CreateDeckParams {
            id: Uuid::new_v4(),
            user_id: 404,
            name: "Orphan".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
