use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, IntoActiveModel};
use uuid::Uuid;

use crate::server::{
    data::{card::CardRepository, price_history::PriceHistoryRepository},
    error::AppError,
    model::card::{Card, CardFilter, CreateCardParams, UpdateCardParams},
    service::scoring::CardValueStrategy,
};

pub struct CardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a card to the catalog.
    ///
    /// # Returns
    /// - `Ok(Card)` - Created card
    /// - `Err(AppError::DbErr)` - Database error, e.g. a duplicate client-supplied ID
    pub async fn create(&self, params: CreateCardParams) -> Result<Card, AppError> {
        let card = CardRepository::new(self.db).create(params).await?;

        tracing::info!("Created card {} ({})", card.id, card.name);

        Ok(card)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Card>, AppError> {
        Ok(CardRepository::new(self.db).get(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Card>, AppError> {
        Ok(CardRepository::new(self.db).list().await?)
    }

    /// Applies a partial update to a card.
    ///
    /// # Returns
    /// - `Ok(Some(Card))` - Card after the update
    /// - `Ok(None)` - No card with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateCardParams) -> Result<Option<Card>, AppError> {
        Ok(CardRepository::new(self.db)
            .update(params.into_active_model())
            .await?)
    }

    /// Deletes a card along with its themes, interactions, prices and deck rows.
    pub async fn delete(&self, id: Uuid) -> Result<Option<Card>, AppError> {
        let deleted = CardRepository::new(self.db).delete(id).await?;

        if deleted.is_some() {
            tracing::info!("Deleted card {}", id);
        }

        Ok(deleted)
    }

    pub async fn search(&self, filter: CardFilter) -> Result<Vec<Card>, AppError> {
        Ok(CardRepository::new(self.db).search(filter).await?)
    }

    pub async fn get_by_theme(&self, theme: &str) -> Result<Vec<Card>, AppError> {
        Ok(CardRepository::new(self.db).get_by_theme(theme).await?)
    }

    /// Computes the value of a card with the given strategy.
    ///
    /// The strategy receives the card and its latest recorded price, if any.
    ///
    /// # Arguments
    /// - `id` - Card to value
    /// - `strategy` - Valuation algorithm
    ///
    /// # Returns
    /// - `Ok(Decimal)` - Computed value
    /// - `Err(AppError::NotFound)` - No card with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn calculate_card_value(
        &self,
        id: Uuid,
        strategy: &dyn CardValueStrategy,
    ) -> Result<Decimal, AppError> {
        let card = CardRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| card_not_found(id))?;

        let latest_price = PriceHistoryRepository::new(self.db).get_latest(id).await?;

        Ok(strategy.value(&card, latest_price.as_ref()))
    }
}

pub(super) fn card_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Card {} not found", id))
}
