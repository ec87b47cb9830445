use crate::server::{
    data::card_interaction::CardInteractionRepository, model::card::CardInteraction,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_among;
mod get_for_card;
