use super::*;

/// Tests that history is ordered by date descending and scoped to the card.
///
/// Expected: Ok with three rows, newest first
#[tokio::test]
async fn returns_history_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    let other = factory::create_card(db).await?;
    factory::create_price(db, card.id, Decimal::new(2, 0), date(2024, 1, 1)).await?;
    factory::create_price(db, card.id, Decimal::new(5, 0), date(2024, 3, 1)).await?;
    factory::create_price(db, card.id, Decimal::new(3, 0), date(2024, 2, 1)).await?;
    factory::create_price(db, other.id, Decimal::new(9, 0), date(2024, 4, 1)).await?;

    let repo = PriceHistoryRepository::new(db);
    let history = repo.get_history(card.id).await?;

    let dates: Vec<NaiveDate> = history.iter().map(|p| p.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 3, 1), date(2024, 2, 1), date(2024, 1, 1)]
    );

    Ok(())
}
