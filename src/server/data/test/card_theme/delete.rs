use super::*;

/// Tests removing a card from a theme by composite key.
///
/// Expected: Ok(Some) for the removed tag, other tags of the card untouched
#[tokio::test]
async fn removes_only_the_given_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    factory::create_card_theme(db, card.id, "elves").await?;
    factory::create_card_theme(db, card.id, "ramp").await?;

    let repo = CardThemeRepository::new(db);
    let removed = repo.delete((card.id, "elves".to_string())).await?;

    assert_eq!(removed, Some(tag(card.id, "elves")));
    assert_eq!(repo.list().await?, vec![tag(card.id, "ramp")]);

    Ok(())
}

#[tokio::test]
async fn returns_none_when_not_tagged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;

    let repo = CardThemeRepository::new(db);
    let removed = repo.delete((card.id, "elves".to_string())).await?;

    assert!(removed.is_none());

    Ok(())
}
