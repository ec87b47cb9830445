//! Deck factory for creating test decks and deck memberships.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test decks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::deck::DeckFactory;
///
/// let deck = DeckFactory::new(&db, user.id).name("Aggro").build().await?;
/// ```
pub struct DeckFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
}

impl<'a> DeckFactory<'a> {
    /// Creates a new DeckFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Deck {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the existing user owning the deck
    ///
    /// # Returns
    /// - `DeckFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Deck {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the deck entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::deck::Model)` - Created deck entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::deck::Model, DbErr> {
        entity::deck::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a deck with default values for the given user.
pub async fn create_deck(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::deck::Model, DbErr> {
    DeckFactory::new(db, user_id).build().await
}

/// Inserts a deck-card row directly, bypassing the merge logic.
///
/// # Arguments
/// - `db` - Database connection
/// - `deck_id` - Existing deck
/// - `card_id` - Existing card
/// - `quantity` - Number of copies
///
/// # Returns
/// - `Ok(entity::deck_card::Model)` - Created row
/// - `Err(DbErr)` - Database error, e.g. the row already exists
pub async fn add_deck_card(
    db: &DatabaseConnection,
    deck_id: Uuid,
    card_id: Uuid,
    quantity: i32,
) -> Result<entity::deck_card::Model, DbErr> {
    entity::deck_card::ActiveModel {
        deck_id: ActiveValue::Set(deck_id),
        card_id: ActiveValue::Set(card_id),
        quantity: ActiveValue::Set(quantity),
    }
    .insert(db)
    .await
}
