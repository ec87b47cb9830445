use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250301_000002_create_card_table::Cards, m20250301_000006_create_deck_table::Decks};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeckCards::Table)
                    .if_not_exists()
                    .col(uuid(DeckCards::DeckId))
                    .col(uuid(DeckCards::CardId))
                    .col(
                        integer(DeckCards::Quantity)
                            .default(1)
                            .check(Expr::col(DeckCards::Quantity).gte(1)),
                    )
                    .primary_key(
                        Index::create()
                            .col(DeckCards::DeckId)
                            .col(DeckCards::CardId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deck_cards_deck_id")
                            .from(DeckCards::Table, DeckCards::DeckId)
                            .to(Decks::Table, Decks::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deck_cards_card_id")
                            .from(DeckCards::Table, DeckCards::CardId)
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
            .drop_table(Table::drop().table(DeckCards::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeckCards {
    Table,
    DeckId,
    CardId,
    Quantity,
}
