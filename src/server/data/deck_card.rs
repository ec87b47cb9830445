//! Deck membership repository.
//!
//! A deck holds at most one row per card. Adding a card that is already present
//! increments its quantity in the same statement, so concurrent adds of the same
//! card cannot produce duplicate rows or lose an increment.

use migration::OnConflict;
use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait},
    ActiveValue, ColumnTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::repository::{Record, Repository},
    model::deck::{AddDeckCardParams, DeckCard},
};

pub type DeckCardRepository<'a> = Repository<'a, DeckCard>;

impl IntoActiveModel<entity::deck_card::ActiveModel> for AddDeckCardParams {
    fn into_active_model(self) -> entity::deck_card::ActiveModel {
        entity::deck_card::ActiveModel {
            deck_id: ActiveValue::Set(self.deck_id),
            card_id: ActiveValue::Set(self.card_id),
            quantity: ActiveValue::Set(self.quantity),
        }
    }
}

impl<'a> Repository<'a, DeckCard> {
    /// Adds copies of a card to a deck, merging with an existing row.
    ///
    /// Runs `INSERT .. ON CONFLICT (deck_id, card_id) DO UPDATE SET quantity =
    /// quantity + excluded.quantity` and reads the merged row back.
    ///
    /// The update only applies while the merged quantity still fits in an `i32`;
    /// otherwise nothing is written and the existing row is left untouched.
    ///
    /// # Arguments
    /// - `params` - Deck, card and number of copies to add
    ///
    /// # Returns
    /// - `Ok(Some(DeckCard))` - The row after the insert or merge
    /// - `Ok(None)` - The merged quantity would exceed `i32::MAX`, nothing written
    /// - `Err(DbErr)` - Database error, e.g. unknown deck or card
    pub async fn add(&self, params: AddDeckCardParams) -> Result<Option<DeckCard>, DbErr> {
        let key = (params.deck_id, params.card_id);

        let current = || {
            Expr::col((
                entity::deck_card::Entity,
                entity::deck_card::Column::Quantity,
            ))
        };
        let excluded = || {
            Expr::col((
                Alias::new("excluded"),
                entity::deck_card::Column::Quantity,
            ))
        };

        let written = entity::prelude::DeckCard::insert(params.into_active_model())
            .on_conflict(
                OnConflict::columns([
                    entity::deck_card::Column::DeckId,
                    entity::deck_card::Column::CardId,
                ])
                .value(entity::deck_card::Column::Quantity, current().add(excluded()))
                .action_and_where(current().lte(Expr::val(i32::MAX).sub(excluded())))
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        if written == 0 {
            return Ok(None);
        }

        let entity = entity::prelude::DeckCard::find_by_id(key)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Deck card ({}, {}) not found after insert",
                key.0, key.1
            )))?;

        Ok(Some(DeckCard::from_entity(entity)))
    }

    /// Gets the card rows of a deck, ordered by card ID.
    pub async fn get_by_deck(&self, deck_id: Uuid) -> Result<Vec<DeckCard>, DbErr> {
        let entities = entity::prelude::DeckCard::find()
            .filter(entity::deck_card::Column::DeckId.eq(deck_id))
            .order_by_asc(entity::deck_card::Column::CardId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DeckCard::from_entity).collect())
    }
}
