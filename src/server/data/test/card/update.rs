use super::*;

/// Tests that a card patch keeps absent nullable columns untouched.
///
/// Expected: Ok(Some) with mana cost and color changed, price preserved
#[tokio::test]
async fn updates_present_fields_and_keeps_optional_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::card::CardFactory::new(db)
        .price(Decimal::new(300, 2))
        .build()
        .await?;

    let repo = CardRepository::new(db);
    let patch = UpdateCardParams {
        id: card.id,
        mana_cost: Some(5),
        color: Some("Red".to_string()),
        ..Default::default()
    };
    let updated = repo
        .update(patch.into_active_model())
        .await?
        .unwrap();

    assert_eq!(updated.name, card.name);
    assert_eq!(updated.mana_cost, 5);
    assert_eq!(updated.color.as_deref(), Some("Red"));
    assert_eq!(updated.price, Some(Decimal::new(3, 0)));

    Ok(())
}
