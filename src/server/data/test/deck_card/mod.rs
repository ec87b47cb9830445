use crate::server::{data::deck_card::DeckCardRepository, model::deck::AddDeckCardParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod delete;
mod get_by_deck;
