use super::*;

#[tokio::test]
async fn creates_interaction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card_a = factory::create_card(db).await?;
    let card_b = factory::create_card(db).await?;

    let repo = CardInteractionRepository::new(db);
    let interaction = CardInteraction {
        card_id_1: card_a.id,
        card_id_2: card_b.id,
        interaction_type: "combo".to_string(),
    };
    let created = repo.create(interaction.clone()).await?;

    assert_eq!(created, interaction);

    Ok(())
}

/// Tests that the full triple is the identity of an interaction.
///
/// Expected: Err on the exact duplicate, Ok for a different interaction type
#[tokio::test]
async fn rejects_duplicate_triple() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card_a = factory::create_card(db).await?;
    let card_b = factory::create_card(db).await?;
    factory::create_interaction(db, card_a.id, card_b.id, "combo").await?;

    let repo = CardInteractionRepository::new(db);
    let duplicate = repo
        .create(CardInteraction {
            card_id_1: card_a.id,
            card_id_2: card_b.id,
            interaction_type: "combo".to_string(),
        })
        .await;
    assert!(duplicate.is_err());

    let other = repo
        .create(CardInteraction {
            card_id_1: card_a.id,
            card_id_2: card_b.id,
            interaction_type: "counter".to_string(),
        })
        .await;
    assert!(other.is_ok());

    Ok(())
}
