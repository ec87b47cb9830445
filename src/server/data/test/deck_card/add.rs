use super::*;

/// Tests adding a card that is not yet in the deck.
///
/// Expected: Ok with a new row holding the given quantity
#[tokio::test]
async fn inserts_new_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, deck) = factory::create_deck_with_owner(db).await?;
    let card = factory::create_card(db).await?;

    let repo = DeckCardRepository::new(db);
    let row = repo
        .add(AddDeckCardParams {
            deck_id: deck.id,
            card_id: card.id,
            quantity: 2,
        })
        .await?
        .unwrap();

    assert_eq!(row.deck_id, deck.id);
    assert_eq!(row.card_id, card.id);
    assert_eq!(row.quantity, 2);

    Ok(())
}

/// Tests that adding a card already in the deck merges the quantities.
///
/// Expected: Ok with a single row of quantity 5 after adding 2 then 3
#[tokio::test]
async fn merges_quantity_for_existing_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, deck) = factory::create_deck_with_owner(db).await?;
    let card = factory::create_card(db).await?;

    let repo = DeckCardRepository::new(db);
    repo.add(AddDeckCardParams {
        deck_id: deck.id,
        card_id: card.id,
        quantity: 2,
    })
    .await?;
    let merged = repo
        .add(AddDeckCardParams {
            deck_id: deck.id,
            card_id: card.id,
            quantity: 3,
        })
        .await?
        .unwrap();

    assert_eq!(merged.quantity, 5);

    let rows = repo.get_by_deck(deck.id).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quantity, 5);

    Ok(())
}

/// Tests that the same card in two decks is tracked separately.
#[tokio::test]
async fn keeps_decks_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, deck_a) = factory::create_deck_with_owner(db).await?;
    let deck_b = factory::create_deck(db, user.id).await?;
    let card = factory::create_card(db).await?;

    let repo = DeckCardRepository::new(db);
    for deck_id in [deck_a.id, deck_b.id] {
        repo.add(AddDeckCardParams {
            deck_id,
            card_id: card.id,
            quantity: 1,
        })
        .await?;
    }

    assert_eq!(repo.get_by_deck(deck_a.id).await?[0].quantity, 1);
    assert_eq!(repo.get_by_deck(deck_b.id).await?[0].quantity, 1);

    Ok(())
}

/// Tests that a merge which would overflow the quantity column is refused.
///
/// Expected: Ok(None) and the existing row keeps its quantity and stays readable
#[tokio::test]
async fn refuses_merge_past_max_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, deck) = factory::create_deck_with_owner(db).await?;
    let card = factory::create_card(db).await?;

    let repo = DeckCardRepository::new(db);
    let full = repo
        .add(AddDeckCardParams {
            deck_id: deck.id,
            card_id: card.id,
            quantity: i32::MAX,
        })
        .await?;
    assert_eq!(full.map(|row| row.quantity), Some(i32::MAX));

    let refused = repo
        .add(AddDeckCardParams {
            deck_id: deck.id,
            card_id: card.id,
            quantity: 1,
        })
        .await?;
    assert!(refused.is_none());

    let rows = repo.get_by_deck(deck.id).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quantity, i32::MAX);

    Ok(())
}

/// Tests that a merge landing exactly on the maximum quantity is accepted.
///
/// Expected: Ok(Some) with quantity `i32::MAX`
#[tokio::test]
async fn merges_up_to_max_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, deck) = factory::create_deck_with_owner(db).await?;
    let card = factory::create_card(db).await?;

    let repo = DeckCardRepository::new(db);
    repo.add(AddDeckCardParams {
        deck_id: deck.id,
        card_id: card.id,
        quantity: i32::MAX - 1,
    })
    .await?;
    let merged = repo
        .add(AddDeckCardParams {
            deck_id: deck.id,
            card_id: card.id,
            quantity: 1,
        })
        .await?;

    assert_eq!(merged.map(|row| row.quantity), Some(i32::MAX));

    Ok(())
}
