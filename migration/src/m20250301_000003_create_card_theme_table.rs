use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_card_table::Cards;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardThemes::Table)
                    .if_not_exists()
                    .col(uuid(CardThemes::CardId))
                    .col(string(CardThemes::Theme))
                    .primary_key(
                        Index::create()
                            .col(CardThemes::CardId)
                            .col(CardThemes::Theme),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_themes_card_id")
                            .from(CardThemes::Table, CardThemes::CardId)
                            .to(Cards::Table, Cards::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CardThemes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CardThemes {
    Table,
    CardId,
    Theme,
}
