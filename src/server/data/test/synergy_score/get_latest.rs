use super::*;

#[tokio::test]
async fn returns_most_recent_calculation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, deck) = factory::create_deck_with_owner(db).await?;

    let repo = SynergyScoreRepository::new(db);
    repo.create(params(deck.id, 1, 1)).await?;
    repo.create(params(deck.id, 7, 3)).await?;
    repo.create(params(deck.id, 4, 2)).await?;

    let latest = repo.get_latest(deck.id).await?.unwrap();

    assert_eq!(latest.synergy_score, Decimal::from(7));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unscored_deck() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, deck) = factory::create_deck_with_owner(db).await?;

    let repo = SynergyScoreRepository::new(db);

    assert!(repo.get_latest(deck.id).await?.is_none());

    Ok(())
}
