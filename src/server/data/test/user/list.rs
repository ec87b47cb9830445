use super::*;

#[tokio::test]
async fn lists_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;
    factory::user::UserFactory::new(db).active(false).build().await?;

    let repo = UserRepository::new(db);
    let users = repo.list().await?;

    assert_eq!(users.len(), 3);

    Ok(())
}

#[tokio::test]
async fn returns_empty_list_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.list().await?;

    assert!(users.is_empty());

    Ok(())
}
