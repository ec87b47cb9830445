use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting a card removes its theme and price rows.
///
/// Expected: Ok(Some) and no association rows left for the card
#[tokio::test]
async fn deletes_card_and_cascades_associations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    factory::create_card_theme(db, card.id, "elves").await?;
    factory::create_price(
        db,
        card.id,
        Decimal::new(1, 0),
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
    .await?;

    let repo = CardRepository::new(db);
    let deleted = repo.delete(card.id).await?;
    assert_eq!(deleted.map(|c| c.id), Some(card.id));

    let themes = entity::prelude::CardTheme::find().count(db).await?;
    let prices = entity::prelude::PriceHistory::find().count(db).await?;
    assert_eq!(themes, 0);
    assert_eq!(prices, 0);

    Ok(())
}
