//! Price history repository.
//!
//! Price observations are append-only: rows are created through the generic
//! `create` and read back here, newest first. "Latest" means the greatest date,
//! with the most recently inserted row winning on a tie.

use sea_orm::{
    ActiveValue, ColumnTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    Select,
};
use uuid::Uuid;

use crate::server::{
    data::repository::{Record, Repository},
    model::card::{PriceHistory, RecordPriceParams},
};

pub type PriceHistoryRepository<'a> = Repository<'a, PriceHistory>;

impl IntoActiveModel<entity::price_history::ActiveModel> for RecordPriceParams {
    fn into_active_model(self) -> entity::price_history::ActiveModel {
        entity::price_history::ActiveModel {
            card_id: ActiveValue::Set(self.card_id),
            price: ActiveValue::Set(self.price),
            date: ActiveValue::Set(self.date),
            ..Default::default()
        }
    }
}

/// Rows for one card, newest first.
fn newest_first(card_id: Uuid) -> Select<entity::price_history::Entity> {
    entity::prelude::PriceHistory::find()
        .filter(entity::price_history::Column::CardId.eq(card_id))
        .order_by_desc(entity::price_history::Column::Date)
        .order_by_desc(entity::price_history::Column::Id)
}

impl<'a> Repository<'a, PriceHistory> {
    /// Gets the latest price observation for a card.
    ///
    /// # Arguments
    /// - `card_id` - Card to look up
    ///
    /// # Returns
    /// - `Ok(Some(PriceHistory))` - Observation with the greatest date
    /// - `Ok(None)` - No price was ever recorded for the card
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_latest(&self, card_id: Uuid) -> Result<Option<PriceHistory>, DbErr> {
        let entity = newest_first(card_id).one(self.db).await?;

        Ok(entity.map(PriceHistory::from_entity))
    }

    /// Gets every price observation for a card, ordered by date descending.
    pub async fn get_history(&self, card_id: Uuid) -> Result<Vec<PriceHistory>, DbErr> {
        let entities = newest_first(card_id).all(self.db).await?;

        Ok(entities.into_iter().map(PriceHistory::from_entity).collect())
    }
}
