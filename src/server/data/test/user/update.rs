use super::*;
use sea_orm::IntoActiveModel;

/// Tests that a partial update overwrites present fields and keeps absent ones.
///
/// Expected: Ok(Some) with username changed and every other field preserved
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(params("alice", "a@b.com")).await?;

    let patch = UpdateUserParams {
        id: created.id,
        username: Some("alicia".to_string()),
        ..Default::default()
    };
    let updated = repo
        .update(patch.into_active_model())
        .await?
        .unwrap();

    assert_eq!(updated.username, "alicia");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.password_hash, created.password_hash);
    assert_eq!(updated.active, created.active);

    Ok(())
}

/// Tests that an empty patch re-reads the row instead of failing.
///
/// Expected: Ok(Some) equal to the stored user
#[tokio::test]
async fn empty_patch_returns_current_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(params("alice", "a@b.com")).await?;

    let patch = UpdateUserParams {
        id: created.id,
        ..Default::default()
    };
    let updated = repo.update(patch.into_active_model()).await?;

    assert_eq!(updated, Some(created));

    Ok(())
}

/// Tests updating a user that does not exist.
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
    let patch = UpdateUserParams {
        id: 42,
        active: Some(false),
        ..Default::default()
    };
    let updated = repo.update(patch.into_active_model()).await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests that the row written is the one named by the key inside the patch.
///
/// Expected: only the second user changes
#[tokio::test]
async fn updates_row_named_by_patch_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.create(params("alice", "a@b.com")).await?;
    let second = repo.create(params("bob", "b@b.com")).await?;

    let patch = UpdateUserParams {
        id: second.id,
        active: Some(false),
        ..Default::default()
    };
    let updated = repo.update(patch.into_active_model()).await?.unwrap();

    assert_eq!(updated.id, second.id);
    assert!(!updated.active);
    assert_eq!(repo.get(first.id).await?, Some(first));

    Ok(())
}

/// Tests a patch that carries no primary key.
///
/// Expected: Err(DbErr::AttrNotSet) and no row changes
#[tokio::test]
async fn rejects_patch_without_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(params("alice", "a@b.com")).await?;

    let patch = entity::user::ActiveModel {
        active: sea_orm::ActiveValue::Set(false),
        ..Default::default()
    };
    let result = repo.update(patch).await;

    assert!(matches!(result, Err(DbErr::AttrNotSet(_))));
    assert_eq!(repo.get(created.id).await?, Some(created));

    Ok(())
}
