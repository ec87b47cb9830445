use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        card_interaction::CardInteractionRepository, card_theme::CardThemeRepository,
        deck::DeckRepository, deck_card::DeckCardRepository,
        synergy_score::SynergyScoreRepository,
    },
    error::AppError,
    model::deck::{CreateSynergyScoreParams, SynergyScore},
    service::{
        deck::deck_not_found,
        scoring::{DeckSynergyInput, SynergyStrategy},
    },
};

/// Decimal places kept by the `synergy_score` column.
const SCORE_SCALE: u32 = 4;

/// Exclusive bound of the `synergy_score` column, which holds 20 integer digits.
fn max_storable_score() -> Decimal {
    Decimal::from_i128_with_scale(10_i128.pow(20), 0)
}

pub struct SynergyScoreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SynergyScoreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Scores a deck and stores the result dated today.
    ///
    /// Gathers the deck's card rows together with the themes of those cards and the
    /// interactions among them, then hands everything to the strategy.
    ///
    /// # Arguments
    /// - `deck_id` - Deck to score
    /// - `strategy` - Synergy algorithm
    ///
    /// # Returns
    /// - `Ok(SynergyScore)` - Newly stored score
    /// - `Err(AppError::NotFound)` - No deck with that ID
    /// - `Err(AppError::BadRequest)` - Score too large to store, nothing written
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn calculate(
        &self,
        deck_id: Uuid,
        strategy: &dyn SynergyStrategy,
    ) -> Result<SynergyScore, AppError> {
        if DeckRepository::new(self.db).get(deck_id).await?.is_none() {
            return Err(deck_not_found(deck_id));
        }

        let cards = DeckCardRepository::new(self.db).get_by_deck(deck_id).await?;
        let card_ids: Vec<Uuid> = cards.iter().map(|row| row.card_id).collect();

        let themes = CardThemeRepository::new(self.db)
            .get_for_cards(card_ids.clone())
            .await?;
        let interactions = CardInteractionRepository::new(self.db)
            .get_among(card_ids)
            .await?;

        let input = DeckSynergyInput {
            cards,
            themes,
            interactions,
        };

        let synergy_score = strategy.score(&input).round_dp(SCORE_SCALE);
        if synergy_score.abs() >= max_storable_score() {
            return Err(AppError::BadRequest(format!(
                "Synergy score {} of deck {} is out of the storable range",
                synergy_score, deck_id
            )));
        }

        let score = SynergyScoreRepository::new(self.db)
            .create(CreateSynergyScoreParams {
                deck_id,
                synergy_score,
                calculated_at: Utc::now().date_naive(),
            })
            .await?;

        tracing::info!("Deck {} scored {}", deck_id, score.synergy_score);

        Ok(score)
    }

    /// Gets the most recent score of a deck.
    ///
    /// # Returns
    /// - `Ok(SynergyScore)` - Latest score
    /// - `Err(AppError::NotFound)` - Unknown deck, or never scored
    pub async fn get_latest(&self, deck_id: Uuid) -> Result<SynergyScore, AppError> {
        SynergyScoreRepository::new(self.db)
            .get_latest(deck_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No synergy score calculated for deck {}", deck_id))
            })
    }
}
