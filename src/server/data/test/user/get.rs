use super::*;

/// Tests that get returns what create stored.
///
/// Expected: Ok(Some) equal to the created user
#[tokio::test]
async fn returns_created_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(params("alice", "a@b.com")).await?;
    let fetched = repo.get(created.id).await?;

    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Tests that an unknown ID yields None rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let fetched = repo.get(999).await?;

    assert!(fetched.is_none());

    Ok(())
}
