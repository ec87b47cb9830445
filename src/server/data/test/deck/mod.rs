use crate::server::{data::deck::DeckRepository, model::deck::CreateDeckParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
