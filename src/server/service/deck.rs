use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{deck::DeckRepository, user::UserRepository},
    error::AppError,
    model::deck::{CreateDeckParams, Deck},
};

pub struct DeckService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeckService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an empty deck owned by a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the owning user
    /// - `name` - Deck name
    ///
    /// # Returns
    /// - `Ok(Deck)` - Created deck with a fresh ID
    /// - `Err(AppError::BadRequest)` - The user does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_deck_for_user(&self, user_id: i32, name: String) -> Result<Deck, AppError> {
        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "User {} does not exist",
                user_id
            )));
        }

        let deck = DeckRepository::new(self.db)
            .create(CreateDeckParams {
                id: Uuid::new_v4(),
                user_id,
                name,
            })
            .await?;

        tracing::info!("Created deck {} for user {}", deck.id, user_id);

        Ok(deck)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Deck>, AppError> {
        Ok(DeckRepository::new(self.db).get(id).await?)
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Deck>, AppError> {
        Ok(DeckRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Deletes a deck with its card rows and synergy scores.
    pub async fn delete(&self, id: Uuid) -> Result<Option<Deck>, AppError> {
        let deleted = DeckRepository::new(self.db).delete(id).await?;

        if deleted.is_some() {
            tracing::info!("Deleted deck {}", id);
        }

        Ok(deleted)
    }
}

pub(super) fn deck_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Deck {} not found", id))
}
