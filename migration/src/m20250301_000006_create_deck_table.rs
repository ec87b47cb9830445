use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Decks::Table)
                    .if_not_exists()
                    .col(pk_uuid(Decks::Id))
                    .col(integer(Decks::UserId))
                    .col(string(Decks::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_decks_user_id")
                            .from(Decks::Table, Decks::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Decks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Decks {
    Table,
    Id,
    UserId,
    Name,
}
