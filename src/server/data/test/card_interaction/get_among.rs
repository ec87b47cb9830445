use super::*;

/// Tests that only interactions with both ends in the set are returned.
///
/// Expected: Ok with the single A-B interaction
#[tokio::test]
async fn returns_interactions_inside_the_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card_a = factory::create_card(db).await?;
    let card_b = factory::create_card(db).await?;
    let outsider = factory::create_card(db).await?;
    factory::create_interaction(db, card_a.id, card_b.id, "combo").await?;
    factory::create_interaction(db, card_a.id, outsider.id, "combo").await?;

    let repo = CardInteractionRepository::new(db);
    let interactions = repo.get_among(vec![card_a.id, card_b.id]).await?;

    assert_eq!(interactions.len(), 1);
    assert!(interactions[0].links(card_a.id, card_b.id));

    Ok(())
}
