use super::*;

/// Tests that delete returns the removed row and a later get finds nothing.
///
/// Expected: Ok(Some) from delete, then Ok(None) from get
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(params("alice", "a@b.com")).await?;

    let deleted = repo.delete(created.id).await?;
    assert_eq!(deleted, Some(created.clone()));

    assert!(repo.get(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
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
    let deleted = repo.delete(7).await?;

    assert!(deleted.is_none());

    Ok(())
}
