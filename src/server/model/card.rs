//! Domain models for cards and their catalog associations.
//!
//! Defines the card model plus the theme, interaction and price history records
//! attached to a card, and the parameter types used to create and patch them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    model::card::{
        CardDto, CardInteractionDto, CardThemeDto, CreateCardDto, PriceHistoryDto, UpdateCardDto,
    },
    server::data::repository::Record,
};

/// Card in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: Uuid,
    pub name: String,
    pub card_type: String,
    pub mana_cost: i32,
    pub color: Option<String>,
    pub power: Option<i32>,
    pub toughness: Option<i32>,
    /// Rules text of the card.
    pub effect: Option<String>,
    pub card_set: Option<String>,
    /// List price, independent of the recorded price history.
    pub price: Option<Decimal>,
}

impl Card {
    /// Converts the card domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `CardDto` - The converted card DTO
    pub fn into_dto(self) -> CardDto {
        CardDto {
            id: self.id,
            name: self.name,
            card_type: self.card_type,
            mana_cost: self.mana_cost,
            color: self.color,
            power: self.power,
            toughness: self.toughness,
            effect: self.effect,
            card_set: self.card_set,
            price: self.price,
        }
    }
}

impl Record for Card {
    type Entity = entity::card::Entity;

    fn from_entity(entity: entity::card::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            card_type: entity.card_type,
            mana_cost: entity.mana_cost,
            color: entity.color,
            power: entity.power,
            toughness: entity.toughness,
            effect: entity.effect,
            card_set: entity.card_set,
            price: entity.price,
        }
    }
}

/// Parameters for creating a card.
#[derive(Debug, Clone)]
pub struct CreateCardParams {
    pub id: Uuid,
    pub name: String,
    pub card_type: String,
    pub mana_cost: i32,
    pub color: Option<String>,
    pub power: Option<i32>,
    pub toughness: Option<i32>,
    pub effect: Option<String>,
    pub card_set: Option<String>,
    pub price: Option<Decimal>,
}

impl CreateCardParams {
    /// Builds creation parameters from the request DTO.
    ///
    /// Generates a fresh v4 UUID when the client did not supply one.
    ///
    /// # Arguments
    /// - `dto` - Card creation payload
    ///
    /// # Returns
    /// - `CreateCardParams` - Parameters with a guaranteed identifier
    pub fn from_dto(dto: CreateCardDto) -> Self {
        Self {
            id: dto.id.unwrap_or_else(Uuid::new_v4),
            name: dto.name,
            card_type: dto.card_type,
            mana_cost: dto.mana_cost,
            color: dto.color,
            power: dto.power,
            toughness: dto.toughness,
            effect: dto.effect,
            card_set: dto.card_set,
            price: dto.price,
        }
    }
}

/// Partial update for an existing card.
///
/// Optional columns can be overwritten but not cleared; `None` always means
/// "leave as stored".
#[derive(Debug, Clone, Default)]
pub struct UpdateCardParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub card_type: Option<String>,
    pub mana_cost: Option<i32>,
    pub color: Option<String>,
    pub power: Option<i32>,
    pub toughness: Option<i32>,
    pub effect: Option<String>,
    pub card_set: Option<String>,
    pub price: Option<Decimal>,
}

impl UpdateCardParams {
    pub fn from_dto(id: Uuid, dto: UpdateCardDto) -> Self {
        Self {
            id,
            name: dto.name,
            card_type: dto.card_type,
            mana_cost: dto.mana_cost,
            color: dto.color,
            power: dto.power,
            toughness: dto.toughness,
            effect: dto.effect,
            card_set: dto.card_set,
            price: dto.price,
        }
    }
}

/// Optional filters for card search. Unset filters match every card.
#[derive(Debug, Clone, Default)]
pub struct CardFilter {
    /// Case-sensitive substring of the card name.
    pub name: Option<String>,
    pub mana_cost: Option<i32>,
    pub card_type: Option<String>,
}

/// Membership of a card in a named theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardTheme {
    pub card_id: Uuid,
    pub theme: String,
}

impl CardTheme {
    pub fn into_dto(self) -> CardThemeDto {
        CardThemeDto {
            card_id: self.card_id,
            theme: self.theme,
        }
    }
}

impl Record for CardTheme {
    type Entity = entity::card_theme::Entity;

    fn from_entity(entity: entity::card_theme::Model) -> Self {
        Self {
            card_id: entity.card_id,
            theme: entity.theme,
        }
    }
}

/// Directed interaction between two cards.
///
/// The triple (`card_id_1`, `card_id_2`, `interaction_type`) is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardInteraction {
    pub card_id_1: Uuid,
    pub card_id_2: Uuid,
    pub interaction_type: String,
}

impl CardInteraction {
    pub fn into_dto(self) -> CardInteractionDto {
        CardInteractionDto {
            card_id_1: self.card_id_1,
            card_id_2: self.card_id_2,
            interaction_type: self.interaction_type,
        }
    }

    /// Returns true if the interaction links the two cards in either direction.
    pub fn links(&self, a: Uuid, b: Uuid) -> bool {
        (self.card_id_1 == a && self.card_id_2 == b)
            || (self.card_id_1 == b && self.card_id_2 == a)
    }
}

impl Record for CardInteraction {
    type Entity = entity::card_interaction::Entity;

    fn from_entity(entity: entity::card_interaction::Model) -> Self {
        Self {
            card_id_1: entity.card_id_1,
            card_id_2: entity.card_id_2,
            interaction_type: entity.interaction_type,
        }
    }
}

/// One recorded price observation for a card.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    pub id: i32,
    pub card_id: Uuid,
    pub price: Decimal,
    pub date: NaiveDate,
}

impl PriceHistory {
    pub fn into_dto(self) -> PriceHistoryDto {
        PriceHistoryDto {
            id: self.id,
            card_id: self.card_id,
            price: self.price,
            date: self.date,
        }
    }
}

impl Record for PriceHistory {
    type Entity = entity::price_history::Entity;

    fn from_entity(entity: entity::price_history::Model) -> Self {
        Self {
            id: entity.id,
            card_id: entity.card_id,
            price: entity.price,
            date: entity.date,
        }
    }
}

/// Parameters for appending a price observation.
#[derive(Debug, Clone)]
pub struct RecordPriceParams {
    pub card_id: Uuid,
    pub price: Decimal,
    pub date: NaiveDate,
}
