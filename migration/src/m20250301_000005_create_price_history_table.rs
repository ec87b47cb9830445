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
                    .table(PriceHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(PriceHistory::Id))
                    .col(uuid(PriceHistory::CardId))
                    .col(decimal_len(PriceHistory::Price, 10, 2))
                    .col(date(PriceHistory::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_history_card_id")
                            .from(PriceHistory::Table, PriceHistory::CardId)
                            .to(Cards::Table, Cards::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_price_history_card_date")
                    .table(PriceHistory::Table)
                    .col(PriceHistory::CardId)
                    .col(PriceHistory::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PriceHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PriceHistory {
    Table,
    Id,
    CardId,
    Price,
    Date,
}
