use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, SqlErr};
use uuid::Uuid;

use crate::server::{
    data::{card::CardRepository, card_interaction::CardInteractionRepository},
    error::AppError,
    model::card::CardInteraction,
    service::{card::card_not_found, scoring::InteractionStrengthStrategy},
};

pub struct CardInteractionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardInteractionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a directed interaction between two cards.
    ///
    /// # Arguments
    /// - `interaction` - Both card IDs and the interaction type
    ///
    /// # Returns
    /// - `Ok(CardInteraction)` - Stored interaction
    /// - `Err(AppError::BadRequest)` - A referenced card does not exist, or the
    ///   interaction is already defined
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn define(&self, interaction: CardInteraction) -> Result<CardInteraction, AppError> {
        let cards = CardRepository::new(self.db);

        for card_id in [interaction.card_id_1, interaction.card_id_2] {
            if cards.get(card_id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Card {} does not exist",
                    card_id
                )));
            }
        }

        let description = format!(
            "{} between {} and {}",
            interaction.interaction_type, interaction.card_id_1, interaction.card_id_2
        );

        CardInteractionRepository::new(self.db)
            .create(interaction)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::BadRequest(format!("Interaction {} already exists", description))
                }
                _ => AppError::DbErr(err),
            })
    }

    /// Lists every interaction a card takes part in.
    ///
    /// # Returns
    /// - `Ok(Vec<CardInteraction>)` - Interactions, possibly empty
    /// - `Err(AppError::NotFound)` - No card with that ID
    pub async fn get_for_card(&self, card_id: Uuid) -> Result<Vec<CardInteraction>, AppError> {
        if CardRepository::new(self.db).get(card_id).await?.is_none() {
            return Err(card_not_found(card_id));
        }

        Ok(CardInteractionRepository::new(self.db)
            .get_for_card(card_id)
            .await?)
    }

    /// Scores how strongly a card interacts with the rest of the catalog.
    ///
    /// # Returns
    /// - `Ok(Decimal)` - Strength computed by the strategy
    /// - `Err(AppError::NotFound)` - No card with that ID
    pub async fn evaluate_interaction_strength(
        &self,
        card_id: Uuid,
        strategy: &dyn InteractionStrengthStrategy,
    ) -> Result<Decimal, AppError> {
        let interactions = self.get_for_card(card_id).await?;

        Ok(strategy.strength(card_id, &interactions))
    }
}
