use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{card::CardRepository, price_history::PriceHistoryRepository},
    error::AppError,
    model::card::{PriceHistory, RecordPriceParams},
    service::card::card_not_found,
};

pub struct PriceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PriceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a price observation for a card.
    ///
    /// # Returns
    /// - `Ok(PriceHistory)` - Stored observation
    /// - `Err(AppError::NotFound)` - No card with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn record(&self, params: RecordPriceParams) -> Result<PriceHistory, AppError> {
        let card_id = params.card_id;
        self.ensure_card(card_id).await?;

        let record = PriceHistoryRepository::new(self.db).create(params).await?;

        tracing::debug!(
            "Recorded price {} for card {} on {}",
            record.price,
            card_id,
            record.date
        );

        Ok(record)
    }

    /// Gets the most recent price observation for a card.
    ///
    /// # Returns
    /// - `Ok(PriceHistory)` - Observation with the greatest date
    /// - `Err(AppError::NotFound)` - Unknown card, or no price recorded
    pub async fn get_latest(&self, card_id: Uuid) -> Result<PriceHistory, AppError> {
        self.ensure_card(card_id).await?;

        PriceHistoryRepository::new(self.db)
            .get_latest(card_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No price recorded for card {}", card_id)))
    }

    /// Gets every price observation for a card, newest first.
    pub async fn get_history(&self, card_id: Uuid) -> Result<Vec<PriceHistory>, AppError> {
        self.ensure_card(card_id).await?;

        Ok(PriceHistoryRepository::new(self.db)
            .get_history(card_id)
            .await?)
    }

    async fn ensure_card(&self, card_id: Uuid) -> Result<(), AppError> {
        match CardRepository::new(self.db).get(card_id).await? {
            Some(_) => Ok(()),
            None => Err(card_not_found(card_id)),
        }
    }
}
