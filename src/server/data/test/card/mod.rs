use crate::server::{
    data::card::CardRepository,
    model::card::{CardFilter, CreateCardParams, UpdateCardParams},
};
use rust_decimal::Decimal;
use sea_orm::{DbErr, IntoActiveModel};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_by_theme;
mod search;
mod update;
