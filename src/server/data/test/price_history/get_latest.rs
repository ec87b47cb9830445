use super::*;

/// Tests that the observation with the greatest date wins regardless of insert order.
///
/// Expected: Ok(Some) with the March price
#[tokio::test]
async fn returns_price_with_max_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    factory::create_price(db, card.id, Decimal::new(2, 0), date(2024, 1, 1)).await?;
    factory::create_price(db, card.id, Decimal::new(5, 0), date(2024, 3, 1)).await?;
    factory::create_price(db, card.id, Decimal::new(3, 0), date(2024, 2, 1)).await?;

    let repo = PriceHistoryRepository::new(db);
    let latest = repo.get_latest(card.id).await?.unwrap();

    assert_eq!(latest.price, Decimal::new(5, 0));
    assert_eq!(latest.date, date(2024, 3, 1));

    Ok(())
}

/// Tests that the most recently recorded row wins a same-day tie.
///
/// Expected: Ok(Some) with the second row recorded on that date
#[tokio::test]
async fn breaks_date_tie_by_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    factory::create_price(db, card.id, Decimal::new(2, 0), date(2024, 1, 1)).await?;
    let second = factory::create_price(db, card.id, Decimal::new(4, 0), date(2024, 1, 1)).await?;

    let repo = PriceHistoryRepository::new(db);
    let latest = repo.get_latest(card.id).await?.unwrap();

    assert_eq!(latest.id, second.id);

    Ok(())
}

#[tokio::test]
async fn returns_none_without_prices() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;

    let repo = PriceHistoryRepository::new(db);
    let latest = repo.get_latest(card.id).await?;

    assert!(latest.is_none());

    Ok(())
}
