//! User domain models and parameters.
//!
//! Provides the user domain model together with the parameter types used by the
//! user service for account creation and partial updates. Passwords only ever reach
//! this layer in hashed form.

use crate::{model::user::UserDto, server::data::repository::Record};

/// Catalog user account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Auto-increment identifier assigned by the store.
    pub id: i32,
    /// Display name of the user.
    pub username: String,
    /// Email address, unique across all users.
    pub email: String,
    /// Argon2id PHC string of the user's password.
    pub password_hash: String,
    /// Whether the account is active.
    pub active: bool,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped and never serialized.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            active: self.active,
        }
    }
}

impl Record for User {
    type Entity = entity::user::Entity;

    fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            active: entity.active,
        }
    }
}

/// Parameters for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    /// Already-hashed password.
    pub password_hash: String,
    pub active: bool,
}

/// Partial update for an existing user.
///
/// Only the fields set to `Some` are written back.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    /// ID of the user to update.
    pub id: i32,
    pub username: Option<String>,
    pub email: Option<String>,
    /// Replacement password hash, when the password changes.
    pub password_hash: Option<String>,
    pub active: Option<bool>,
}
