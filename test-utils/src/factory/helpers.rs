//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// names and emails to avoid tripping unique constraints.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a deck owned by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, deck))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_deck_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::deck::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let deck = crate::factory::deck::create_deck(db, user.id).await?;

    Ok((user, deck))
}
