//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let card = factory::create_card(&db).await?;
//! let (user, deck) = factory::create_deck_with_owner(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let card = factory::card::CardFactory::new(&db)
//!     .name("Lightning Bolt")
//!     .mana_cost(1)
//!     .card_type("Instant")
//!     .build()
//!     .await?;
//! ```

pub mod card;
pub mod deck;
pub mod helpers;
pub mod user;

pub use card::{create_card, create_card_theme, create_interaction, create_price};
pub use deck::{add_deck_card, create_deck};
pub use helpers::create_deck_with_owner;
pub use user::create_user;
