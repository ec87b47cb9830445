use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{card::CardRepository, card_theme::CardThemeRepository},
    error::AppError,
    model::card::CardTheme,
    service::card::card_not_found,
};

pub struct CardThemeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardThemeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Tags a card with a theme. Tagging twice is a no-op.
    ///
    /// # Arguments
    /// - `theme` - Theme name
    /// - `card_id` - Card to tag
    ///
    /// # Returns
    /// - `Ok(CardTheme)` - The association
    /// - `Err(AppError::NotFound)` - No card with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add(&self, theme: &str, card_id: Uuid) -> Result<CardTheme, AppError> {
        if CardRepository::new(self.db).get(card_id).await?.is_none() {
            return Err(card_not_found(card_id));
        }

        let card_theme = CardThemeRepository::new(self.db)
            .add(CardTheme {
                card_id,
                theme: theme.to_string(),
            })
            .await?;

        tracing::debug!("Tagged card {} with theme {}", card_id, theme);

        Ok(card_theme)
    }

    /// Removes a theme tag from a card.
    ///
    /// # Returns
    /// - `Ok(CardTheme)` - The removed association
    /// - `Err(AppError::NotFound)` - The card was not tagged with the theme
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove(&self, theme: &str, card_id: Uuid) -> Result<CardTheme, AppError> {
        CardThemeRepository::new(self.db)
            .delete((card_id, theme.to_string()))
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Card {} is not in theme {}", card_id, theme))
            })
    }

    /// Lists the themes a card is tagged with, ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<CardTheme>)` - Tags, empty for an untagged card
    /// - `Err(AppError::NotFound)` - No card with that ID
    pub async fn list_for_card(&self, card_id: Uuid) -> Result<Vec<CardTheme>, AppError> {
        if CardRepository::new(self.db).get(card_id).await?.is_none() {
            return Err(card_not_found(card_id));
        }

        Ok(CardThemeRepository::new(self.db)
            .get_for_cards(vec![card_id])
            .await?)
    }
}
