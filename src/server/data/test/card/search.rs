use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    factory::card::CardFactory::new(db)
        .name("Goblin Guide")
        .card_type("Creature")
        .mana_cost(1)
        .build()
        .await?;
    factory::card::CardFactory::new(db)
        .name("Goblin Bombardment")
        .card_type("Enchantment")
        .mana_cost(2)
        .build()
        .await?;
    factory::card::CardFactory::new(db)
        .name("Lightning Bolt")
        .card_type("Instant")
        .mana_cost(1)
        .build()
        .await?;

    Ok(())
}

/// Tests name substring search.
///
/// Expected: Ok with both goblins ordered by name
#[tokio::test]
async fn matches_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CardRepository::new(db);
    let cards = repo
        .search(CardFilter {
            name: Some("Goblin".to_string()),
            ..Default::default()
        })
        .await?;

    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Goblin Bombardment", "Goblin Guide"]);

    Ok(())
}

/// Tests combining mana cost and card type filters.
///
/// Expected: Ok with only the one-mana creature
#[tokio::test]
async fn combines_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CardRepository::new(db);
    let cards = repo
        .search(CardFilter {
            mana_cost: Some(1),
            card_type: Some("Creature".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Goblin Guide");

    Ok(())
}

/// Tests that an empty filter matches every card.
#[tokio::test]
async fn empty_filter_lists_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CardRepository::new(db);
    let cards = repo.search(CardFilter::default()).await?;

    assert_eq!(cards.len(), 3);

    Ok(())
}

/// Tests that `%` and `_` in the name filter match only themselves.
///
/// Expected: Ok with no wildcard matches, and the card literally containing `0%`
#[tokio::test]
async fn treats_like_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;
    factory::card::CardFactory::new(db)
        .name("100% Pure")
        .build()
        .await?;

    let repo = CardRepository::new(db);
    let search = |name: &str| CardFilter {
        name: Some(name.to_string()),
        ..Default::default()
    };

    assert!(repo.search(search("n_B")).await?.is_empty());
    assert!(repo.search(search("Goblin%Guide")).await?.is_empty());

    let cards = repo.search(search("0%")).await?;
    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["100% Pure"]);

    Ok(())
}
