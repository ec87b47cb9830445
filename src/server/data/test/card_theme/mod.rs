use crate::server::{data::card_theme::CardThemeRepository, model::card::CardTheme};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod delete;
mod get_for_cards;

fn tag(card_id: uuid::Uuid, theme: &str) -> CardTheme {
    CardTheme {
        card_id,
        theme: theme.to_string(),
    }
}
