use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cards::Table)
                    .if_not_exists()
                    .col(pk_uuid(Cards::Id))
                    .col(string(Cards::Name))
                    .col(string(Cards::CardType))
                    .col(integer(Cards::ManaCost))
                    .col(string_null(Cards::Color))
                    .col(integer_null(Cards::Power))
                    .col(integer_null(Cards::Toughness))
                    .col(text_null(Cards::Effect))
                    .col(string_null(Cards::CardSet))
                    .col(decimal_len_null(Cards::Price, 10, 2))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cards_name")
                    .table(Cards::Table)
                    .col(Cards::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cards::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cards {
    Table,
    Id,
    Name,
    CardType,
    ManaCost,
    Color,
    Power,
    Toughness,
    Effect,
    CardSet,
    Price,
}
