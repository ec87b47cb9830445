use super::*;

#[tokio::test]
async fn removes_card_from_deck() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, deck) = factory::create_deck_with_owner(db).await?;
    let card = factory::create_card(db).await?;
    factory::add_deck_card(db, deck.id, card.id, 4).await?;

    let repo = DeckCardRepository::new(db);
    let removed = repo.delete((deck.id, card.id)).await?;

    assert_eq!(removed.map(|r| r.quantity), Some(4));
    assert!(repo.get((deck.id, card.id)).await?.is_none());

    Ok(())
}
