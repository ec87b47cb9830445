use super::*;

/// Tests that every calculation is stored as its own row.
///
/// Expected: Ok twice with distinct IDs for identical inputs
#[tokio::test]
async fn stores_each_calculation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, deck) = factory::create_deck_with_owner(db).await?;

    let repo = SynergyScoreRepository::new(db);
    let first = repo.create(params(deck.id, 3, 1)).await?;
    let second = repo.create(params(deck.id, 3, 1)).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.synergy_score, Decimal::from(3));
    assert_eq!(repo.list().await?.len(), 2);

    Ok(())
}
