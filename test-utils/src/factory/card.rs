//! Card factory for creating test card entities and their associations.
//!
//! Besides the `CardFactory` builder this module offers one-shot helpers for the
//! rows that hang off a card: theme tags, interactions and price observations.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test cards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::card::CardFactory;
///
/// let card = CardFactory::new(&db)
///     .name("Llanowar Elves")
///     .card_type("Creature")
///     .mana_cost(1)
///     .build()
///     .await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    name: String,
    card_type: String,
    mana_cost: i32,
    color: Option<String>,
    price: Option<Decimal>,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - name: `"Card {id}"` where id is auto-incremented
    /// - card_type: `"Creature"`
    /// - mana_cost: `2`
    /// - color, price: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CardFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            name: format!("Card {}", id),
            card_type: "Creature".to_string(),
            mana_cost: 2,
            color: None,
            price: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = card_type.into();
        self
    }

    pub fn mana_cost(mut self, mana_cost: i32) -> Self {
        self.mana_cost = mana_cost;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the card's list price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Builds and inserts the card entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::card::Model)` - Created card entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        entity::card::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            card_type: ActiveValue::Set(self.card_type),
            mana_cost: ActiveValue::Set(self.mana_cost),
            color: ActiveValue::Set(self.color),
            power: ActiveValue::Set(None),
            toughness: ActiveValue::Set(None),
            effect: ActiveValue::Set(None),
            card_set: ActiveValue::Set(None),
            price: ActiveValue::Set(self.price),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card with default values.
pub async fn create_card(db: &DatabaseConnection) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db).build().await
}

/// Tags a card with a theme.
///
/// # Arguments
/// - `db` - Database connection
/// - `card_id` - Existing card to tag
/// - `theme` - Theme name
///
/// # Returns
/// - `Ok(entity::card_theme::Model)` - Created association
/// - `Err(DbErr)` - Database error during insert
pub async fn create_card_theme(
    db: &DatabaseConnection,
    card_id: Uuid,
    theme: impl Into<String>,
) -> Result<entity::card_theme::Model, DbErr> {
    entity::card_theme::ActiveModel {
        card_id: ActiveValue::Set(card_id),
        theme: ActiveValue::Set(theme.into()),
    }
    .insert(db)
    .await
}

/// Records an interaction from `card_id_1` to `card_id_2`.
pub async fn create_interaction(
    db: &DatabaseConnection,
    card_id_1: Uuid,
    card_id_2: Uuid,
    interaction_type: impl Into<String>,
) -> Result<entity::card_interaction::Model, DbErr> {
    entity::card_interaction::ActiveModel {
        card_id_1: ActiveValue::Set(card_id_1),
        card_id_2: ActiveValue::Set(card_id_2),
        interaction_type: ActiveValue::Set(interaction_type.into()),
    }
    .insert(db)
    .await
}

/// Appends a price observation for a card.
///
/// # Arguments
/// - `db` - Database connection
/// - `card_id` - Existing card the price belongs to
/// - `price` - Observed price
/// - `date` - Observation date
///
/// # Returns
/// - `Ok(entity::price_history::Model)` - Created row with its assigned ID
/// - `Err(DbErr)` - Database error during insert
pub async fn create_price(
    db: &DatabaseConnection,
    card_id: Uuid,
    price: Decimal,
    date: NaiveDate,
) -> Result<entity::price_history::Model, DbErr> {
    entity::price_history::ActiveModel {
        card_id: ActiveValue::Set(card_id),
        price: ActiveValue::Set(price),
        date: ActiveValue::Set(date),
        ..Default::default()
    }
    .insert(db)
    .await
}
