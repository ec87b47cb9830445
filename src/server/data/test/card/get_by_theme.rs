use super::*;

#[tokio::test]
async fn returns_cards_tagged_with_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let elf = factory::card::CardFactory::new(db)
        .name("Elvish Mystic")
        .build()
        .await?;
    let goblin = factory::create_card(db).await?;
    factory::create_card_theme(db, elf.id, "elves").await?;
    factory::create_card_theme(db, goblin.id, "goblins").await?;

    let repo = CardRepository::new(db);
    let cards = repo.get_by_theme("elves").await?;

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, elf.id);

    Ok(())
}

#[tokio::test]
async fn returns_empty_for_unknown_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_card(db).await?;

    let repo = CardRepository::new(db);
    let cards = repo.get_by_theme("zombies").await?;

    assert!(cards.is_empty());

    Ok(())
}
