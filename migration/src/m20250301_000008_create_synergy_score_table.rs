use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000006_create_deck_table::Decks;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SynergyScores::Table)
                    .if_not_exists()
                    .col(pk_auto(SynergyScores::Id))
                    .col(uuid(SynergyScores::DeckId))
                    .col(decimal_len(SynergyScores::SynergyScore, 24, 4))
                    .col(date(SynergyScores::CalculatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_synergy_scores_deck_id")
                            .from(SynergyScores::Table, SynergyScores::DeckId)
                            .to(Decks::Table, Decks::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SynergyScores::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SynergyScores {
    Table,
    Id,
    DeckId,
    SynergyScore,
    CalculatedAt,
}
