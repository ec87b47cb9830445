use super::*;

/// Tests creating a user.
///
/// Verifies that the repository inserts only the given fields and returns the row
/// with the store-assigned ID.
///
/// Expected: Ok with user created and ID assigned
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("alice", "a@b.com")).await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.password_hash, "hash");
    assert!(user.active);

    Ok(())
}

/// Tests that the unique index on email rejects a duplicate.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("alice", "a@b.com")).await?;
    let result = repo.create(params("bob", "a@b.com")).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
