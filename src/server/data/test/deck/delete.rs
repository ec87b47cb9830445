use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting a deck removes its card rows but keeps the cards.
///
/// Expected: Ok(Some), no deck-card rows left, card still present
#[tokio::test]
async fn deletes_deck_and_its_card_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, deck) = factory::create_deck_with_owner(db).await?;
    let card = factory::create_card(db).await?;
    factory::add_deck_card(db, deck.id, card.id, 2).await?;

    let repo = DeckRepository::new(db);
    let deleted = repo.delete(deck.id).await?;

    assert_eq!(deleted.map(|d| d.id), Some(deck.id));
    assert_eq!(entity::prelude::DeckCard::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Card::find().count(db).await?, 1);

    Ok(())
}
