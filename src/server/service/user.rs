//! User account management.
//!
//! Handles account creation with password hashing, partial updates and the email
//! lookups. Email uniqueness is enforced twice: a lookup before writing gives the
//! common case a clear error, and the unique index on `user.email` catches
//! concurrent writers, whose violation is mapped to the same error.

use sea_orm::{DatabaseConnection, DbErr, IntoActiveModel, SqlErr};
use validator::Validate;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParams, UpdateUserParams, User},
        util::password::hash_password,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new, active user.
    ///
    /// # Arguments
    /// - `dto` - Username, email and plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::ValidationErr)` - Malformed email, empty username or short password
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, dto: CreateUserDto) -> Result<User, AppError> {
        dto.validate()?;

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&dto.email).await?.is_some() {
            return Err(email_taken(&dto.email));
        }

        let params = CreateUserParams {
            username: dto.username,
            email: dto.email.clone(),
            password_hash: hash_password(&dto.password)?,
            active: true,
        };

        let user = repo
            .create(params)
            .await
            .map_err(|e| unique_email_violation(e, &dto.email))?;

        tracing::info!("Created user {} ({})", user.id, user.email);

        Ok(user)
    }

    pub async fn get(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).get(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).list().await?)
    }

    /// Applies a partial update to an existing user.
    ///
    /// Only fields present in the payload are written. A new password is rehashed,
    /// and a changed email is checked against other accounts.
    ///
    /// # Arguments
    /// - `id` - ID of the user to update
    /// - `dto` - Fields to change
    ///
    /// # Returns
    /// - `Ok(User)` - User after the update
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::ValidationErr)` - A present field is malformed
    /// - `Err(AppError::BadRequest)` - New email belongs to another user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: i32, dto: UpdateUserDto) -> Result<User, AppError> {
        dto.validate()?;

        let repo = UserRepository::new(self.db);

        let existing = repo.get(id).await?.ok_or_else(|| user_not_found(id))?;

        if let Some(email) = dto.email.as_deref() {
            if email != existing.email {
                if let Some(other) = repo.find_by_email(email).await? {
                    if other.id != id {
                        return Err(email_taken(email));
                    }
                }
            }
        }

        let password_hash = dto
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let email = dto.email.clone().unwrap_or_default();
        let params = UpdateUserParams {
            id,
            username: dto.username,
            email: dto.email,
            password_hash,
            active: dto.active,
        };

        let user = repo
            .update(params.into_active_model())
            .await
            .map_err(|e| unique_email_violation(e, &email))?
            .ok_or_else(|| user_not_found(id))?;

        tracing::debug!("Updated user {}", user.id);

        Ok(user)
    }

    /// Deletes a user together with their decks.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The deleted user
    /// - `Ok(None)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<Option<User>, AppError> {
        let deleted = UserRepository::new(self.db).delete(id).await?;

        if deleted.is_some() {
            tracing::info!("Deleted user {}", id);
        }

        Ok(deleted)
    }

    /// Gets a user by email, treating absence as an error.
    ///
    /// # Returns
    /// - `Ok(User)` - User registered with the email
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))
    }

    pub async fn list_active(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_active().await?)
    }
}

fn user_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}

fn email_taken(email: &str) -> AppError {
    AppError::BadRequest(format!("Email {} is already registered", email))
}

/// Maps a unique index violation on insert or update to the duplicate email error.
fn unique_email_violation(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => email_taken(email),
        _ => AppError::DbErr(err),
    }
}
