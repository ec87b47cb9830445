use crate::server::{data::price_history::PriceHistoryRepository, model::card::RecordPriceParams};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_history;
mod get_latest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
