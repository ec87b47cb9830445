use super::*;

#[tokio::test]
async fn records_price() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;

    let repo = PriceHistoryRepository::new(db);
    let record = repo
        .create(RecordPriceParams {
            card_id: card.id,
            price: Decimal::new(1050, 2),
            date: date(2024, 3, 1),
        })
        .await?;

    assert!(record.id > 0);
    assert_eq!(record.card_id, card.id);
    assert_eq!(record.price, Decimal::new(1050, 2));
    assert_eq!(record.date, date(2024, 3, 1));

    Ok(())
}
