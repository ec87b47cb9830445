use super::*;

/// Tests tagging a card with a theme.
///
/// Expected: Ok with the association readable by composite key
#[tokio::test]
async fn adds_card_to_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;

    let repo = CardThemeRepository::new(db);
    let added = repo.add(tag(card.id, "elves")).await?;

    let fetched = repo.get((card.id, "elves".to_string())).await?;
    assert_eq!(fetched, Some(added));

    Ok(())
}

/// Tests that adding an existing tag again is a no-op.
///
/// Expected: Ok both times with a single stored row
#[tokio::test]
async fn adding_twice_keeps_one_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;

    let repo = CardThemeRepository::new(db);
    repo.add(tag(card.id, "elves")).await?;
    repo.add(tag(card.id, "elves")).await?;

    assert_eq!(repo.list().await?.len(), 1);

    Ok(())
}

/// Tests that tagging an unknown card violates the foreign key.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_unknown_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardThemeRepository::new(db);
    let result = repo.add(tag(uuid::Uuid::new_v4(), "elves")).await;

    assert!(result.is_err());

    Ok(())
}
