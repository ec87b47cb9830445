use super::*;

#[tokio::test]
async fn returns_themes_of_requested_cards_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card_a = factory::create_card(db).await?;
    let card_b = factory::create_card(db).await?;
    let other = factory::create_card(db).await?;
    factory::create_card_theme(db, card_a.id, "elves").await?;
    factory::create_card_theme(db, card_b.id, "elves").await?;
    factory::create_card_theme(db, other.id, "goblins").await?;

    let repo = CardThemeRepository::new(db);
    let themes = repo.get_for_cards(vec![card_a.id, card_b.id]).await?;

    assert_eq!(themes.len(), 2);
    assert!(themes.iter().all(|t| t.theme == "elves"));

    Ok(())
}

#[tokio::test]
async fn returns_empty_for_no_cards() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardThemeRepository::new(db);
    let themes = repo.get_for_cards(Vec::new()).await?;

    assert!(themes.is_empty());

    Ok(())
}
