use crate::server::{
    data::synergy_score::SynergyScoreRepository, model::deck::CreateSynergyScoreParams,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_latest;

fn params(deck_id: uuid::Uuid, score: i64, day: u32) -> CreateSynergyScoreParams {
    CreateSynergyScoreParams {
        deck_id,
        synergy_score: Decimal::from(score),
        calculated_at: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
    }
}
