use super::*;

/// Tests creating a card with a client-chosen ID and optional fields.
///
/// Expected: Ok with the card persisted under the given ID and the optional
/// fields that were set
#[tokio::test]
async fn creates_card_with_given_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let id = Uuid::new_v4();
    let repo = CardRepository::new(db);
    let card = repo
        .create(CreateCardParams {
            id,
            name: "Llanowar Elves".to_string(),
            card_type: "Creature".to_string(),
            mana_cost: 1,
            color: Some("Green".to_string()),
            power: Some(1),
            toughness: Some(1),
            effect: None,
            card_set: None,
            price: Some(Decimal::new(25, 2)),
        })
        .await?;

    assert_eq!(card.id, id);
    assert_eq!(card.color.as_deref(), Some("Green"));
    assert_eq!(card.price, Some(Decimal::new(25, 2)));
    assert!(card.effect.is_none());

    let fetched = repo.get(id).await?.unwrap();
    assert_eq!(fetched, card);

    Ok(())
}
