//! Database repository layer for all domain entities.
//!
//! This module contains the generic `Repository` and the entity-specific query
//! extensions for each catalog table. Repositories use SeaORM entity models internally
//! and return domain models to maintain separation between the data layer and business
//! logic layer. Store failures are returned as `DbErr` and never interpreted here.

pub mod card;
pub mod card_interaction;
pub mod card_theme;
pub mod deck;
pub mod deck_card;
pub mod price_history;
pub mod repository;
pub mod synergy_score;
pub mod user;

#[cfg(test)]
mod test;
