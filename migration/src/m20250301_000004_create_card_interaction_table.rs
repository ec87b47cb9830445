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
                    .table(CardInteractions::Table)
                    .if_not_exists()
                    .col(uuid(CardInteractions::CardId1))
                    .col(uuid(CardInteractions::CardId2))
                    .col(string(CardInteractions::InteractionType))
                    .primary_key(
                        Index::create()
                            .col(CardInteractions::CardId1)
                            .col(CardInteractions::CardId2)
                            .col(CardInteractions::InteractionType),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_interactions_card_id_1")
                            .from(CardInteractions::Table, CardInteractions::CardId1)
                            .to(Cards::Table, Cards::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_interactions_card_id_2")
                            .from(CardInteractions::Table, CardInteractions::CardId2)
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
            .drop_table(Table::drop().table(CardInteractions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CardInteractions {
    Table,
    #[sea_orm(iden = "card_id_1")]
    CardId1,
    #[sea_orm(iden = "card_id_2")]
    CardId2,
    InteractionType,
}
