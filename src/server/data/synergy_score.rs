use sea_orm::{
    ActiveValue, ColumnTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::repository::{Record, Repository},
    model::deck::{CreateSynergyScoreParams, SynergyScore},
};

pub type SynergyScoreRepository<'a> = Repository<'a, SynergyScore>;

impl IntoActiveModel<entity::synergy_score::ActiveModel> for CreateSynergyScoreParams {
    fn into_active_model(self) -> entity::synergy_score::ActiveModel {
        entity::synergy_score::ActiveModel {
            deck_id: ActiveValue::Set(self.deck_id),
            synergy_score: ActiveValue::Set(self.synergy_score),
            calculated_at: ActiveValue::Set(self.calculated_at),
            ..Default::default()
        }
    }
}

impl<'a> Repository<'a, SynergyScore> {
    /// Gets the most recent synergy calculation for a deck.
    ///
    /// Ordered by calculation date, then by insertion order for calculations made
    /// on the same day.
    ///
    /// # Returns
    /// - `Ok(Some(SynergyScore))` - Latest calculation
    /// - `Ok(None)` - The deck was never scored
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_latest(&self, deck_id: Uuid) -> Result<Option<SynergyScore>, DbErr> {
        let entity = entity::prelude::SynergyScore::find()
            .filter(entity::synergy_score::Column::DeckId.eq(deck_id))
            .order_by_desc(entity::synergy_score::Column::CalculatedAt)
            .order_by_desc(entity::synergy_score::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(SynergyScore::from_entity))
    }
}
