//! Deck membership management.
//!
//! Adding a card that is already in the deck merges into the existing row by
//! incrementing its quantity; the merge happens in a single upsert statement, so
//! concurrent adds never create a second row for the same card.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{card::CardRepository, deck::DeckRepository, deck_card::DeckCardRepository},
    error::AppError,
    model::deck::{AddDeckCardParams, DeckCard},
    service::{card::card_not_found, deck::deck_not_found},
};

pub struct DeckCardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeckCardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds copies of a card to a deck.
    ///
    /// # Arguments
    /// - `params` - Deck, card and number of copies to add
    ///
    /// # Returns
    /// - `Ok(DeckCard)` - Deck row after the add, with the merged quantity
    /// - `Err(AppError::BadRequest)` - Quantity below 1, or the merged quantity would
    ///   exceed `i32::MAX`
    /// - `Err(AppError::NotFound)` - Unknown deck or card
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add(&self, params: AddDeckCardParams) -> Result<DeckCard, AppError> {
        if params.quantity < 1 {
            return Err(AppError::BadRequest(format!(
                "Quantity must be at least 1, got {}",
                params.quantity
            )));
        }

        if DeckRepository::new(self.db).get(params.deck_id).await?.is_none() {
            return Err(deck_not_found(params.deck_id));
        }

        if CardRepository::new(self.db).get(params.card_id).await?.is_none() {
            return Err(card_not_found(params.card_id));
        }

        let (deck_id, card_id, quantity) = (params.deck_id, params.card_id, params.quantity);

        let row = DeckCardRepository::new(self.db)
            .add(params)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Adding {} of card {} to deck {} would exceed the maximum quantity of {}",
                    quantity,
                    card_id,
                    deck_id,
                    i32::MAX
                ))
            })?;

        tracing::debug!(
            "Deck {} now holds {} of card {}",
            row.deck_id,
            row.quantity,
            row.card_id
        );

        Ok(row)
    }

    /// Removes a card from a deck, whatever its quantity.
    ///
    /// # Returns
    /// - `Ok(DeckCard)` - The removed row
    /// - `Err(AppError::NotFound)` - The card is not in the deck
    pub async fn remove(&self, deck_id: Uuid, card_id: Uuid) -> Result<DeckCard, AppError> {
        DeckCardRepository::new(self.db)
            .delete((deck_id, card_id))
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Card {} is not in deck {}", card_id, deck_id))
            })
    }

    /// Lists the card rows of a deck.
    ///
    /// # Returns
    /// - `Ok(Vec<DeckCard>)` - Rows ordered by card ID, empty for an empty deck
    /// - `Err(AppError::NotFound)` - No deck with that ID
    pub async fn list(&self, deck_id: Uuid) -> Result<Vec<DeckCard>, AppError> {
        if DeckRepository::new(self.db).get(deck_id).await?.is_none() {
            return Err(deck_not_found(deck_id));
        }

        Ok(DeckCardRepository::new(self.db).get_by_deck(deck_id).await?)
    }
}
