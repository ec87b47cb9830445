use super::*;

/// Tests that interactions are found whichever side the card is on.
///
/// Expected: Ok with both interactions touching card A
#[tokio::test]
async fn returns_interactions_on_either_side() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card_a = factory::create_card(db).await?;
    let card_b = factory::create_card(db).await?;
    let card_c = factory::create_card(db).await?;
    factory::create_interaction(db, card_a.id, card_b.id, "combo").await?;
    factory::create_interaction(db, card_c.id, card_a.id, "counter").await?;
    factory::create_interaction(db, card_b.id, card_c.id, "synergy").await?;

    let repo = CardInteractionRepository::new(db);
    let interactions = repo.get_for_card(card_a.id).await?;

    let types: Vec<&str> = interactions
        .iter()
        .map(|i| i.interaction_type.as_str())
        .collect();
    assert_eq!(types, vec!["combo", "counter"]);

    Ok(())
}
