use super::*;

#[tokio::test]
async fn returns_rows_of_deck_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, deck) = factory::create_deck_with_owner(db).await?;
    let other_deck = factory::create_deck(db, user.id).await?;
    let card_a = factory::create_card(db).await?;
    let card_b = factory::create_card(db).await?;
    factory::add_deck_card(db, deck.id, card_a.id, 1).await?;
    factory::add_deck_card(db, deck.id, card_b.id, 3).await?;
    factory::add_deck_card(db, other_deck.id, card_a.id, 2).await?;

    let repo = DeckCardRepository::new(db);
    let rows = repo.get_by_deck(deck.id).await?;

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.deck_id == deck.id));
    assert_eq!(rows.iter().map(|r| r.quantity).sum::<i32>(), 4);

    Ok(())
}
