//! Domain models for decks, deck membership and synergy scores.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    model::deck::{DeckCardDto, DeckDto, SynergyScoreDto},
    server::data::repository::Record,
};

/// Deck owned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub id: Uuid,
    /// ID of the owning user.
    pub user_id: i32,
    pub name: String,
}

impl Deck {
    /// Converts the deck domain model to a DTO for API responses.
    pub fn into_dto(self) -> DeckDto {
        DeckDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
        }
    }
}

impl Record for Deck {
    type Entity = entity::deck::Entity;

    fn from_entity(entity: entity::deck::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
        }
    }
}

/// Parameters for creating a deck.
#[derive(Debug, Clone)]
pub struct CreateDeckParams {
    pub id: Uuid,
    pub user_id: i32,
    pub name: String,
}

/// Card membership within a deck.
///
/// At most one row exists per (`deck_id`, `card_id`); repeated adds merge into
/// `quantity`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckCard {
    pub deck_id: Uuid,
    pub card_id: Uuid,
    /// Number of copies, always at least 1.
    pub quantity: i32,
}

impl DeckCard {
    pub fn into_dto(self) -> DeckCardDto {
        DeckCardDto {
            deck_id: self.deck_id,
            card_id: self.card_id,
            quantity: self.quantity,
        }
    }
}

impl Record for DeckCard {
    type Entity = entity::deck_card::Entity;

    fn from_entity(entity: entity::deck_card::Model) -> Self {
        Self {
            deck_id: entity.deck_id,
            card_id: entity.card_id,
            quantity: entity.quantity,
        }
    }
}

/// Parameters for adding copies of a card to a deck.
#[derive(Debug, Clone)]
pub struct AddDeckCardParams {
    pub deck_id: Uuid,
    pub card_id: Uuid,
    pub quantity: i32,
}

/// Persisted synergy calculation for a deck.
#[derive(Debug, Clone, PartialEq)]
pub struct SynergyScore {
    pub id: i32,
    pub deck_id: Uuid,
    pub synergy_score: Decimal,
    pub calculated_at: NaiveDate,
}

impl SynergyScore {
    pub fn into_dto(self) -> SynergyScoreDto {
        SynergyScoreDto {
            id: self.id,
            deck_id: self.deck_id,
            synergy_score: self.synergy_score,
            calculated_at: self.calculated_at,
        }
    }
}

impl Record for SynergyScore {
    type Entity = entity::synergy_score::Entity;

    fn from_entity(entity: entity::synergy_score::Model) -> Self {
        Self {
            id: entity.id,
            deck_id: entity.deck_id,
            synergy_score: entity.synergy_score,
            calculated_at: entity.calculated_at,
        }
    }
}

/// Parameters for storing a new synergy calculation.
#[derive(Debug, Clone)]
pub struct CreateSynergyScoreParams {
    pub deck_id: Uuid,
    pub synergy_score: Decimal,
    pub calculated_at: NaiveDate,
}
