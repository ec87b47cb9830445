pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_card_table;
mod m20250301_000003_create_card_theme_table;
mod m20250301_000004_create_card_interaction_table;
mod m20250301_000005_create_price_history_table;
mod m20250301_000006_create_deck_table;
mod m20250301_000007_create_deck_card_table;
mod m20250301_000008_create_synergy_score_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_card_table::Migration),
            Box::new(m20250301_000003_create_card_theme_table::Migration),
            Box::new(m20250301_000004_create_card_interaction_table::Migration),
            Box::new(m20250301_000005_create_price_history_table::Migration),
            Box::new(m20250301_000006_create_deck_table::Migration),
            Box::new(m20250301_000007_create_deck_card_table::Migration),
            Box::new(m20250301_000008_create_synergy_score_table::Migration),
        ]
    }
}
