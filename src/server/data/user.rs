//! User data repository for database operations.
//!
//! Extends the generic repository with the user-specific lookups (by email, active
//! accounts) and lowers the user parameter models to SeaORM active models.

use sea_orm::{
    ActiveValue, ColumnTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::repository::{patch, Record, Repository},
    model::user::{CreateUserParams, UpdateUserParams, User},
};

pub type UserRepository<'a> = Repository<'a, User>;

impl IntoActiveModel<entity::user::ActiveModel> for CreateUserParams {
    fn into_active_model(self) -> entity::user::ActiveModel {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
    }
}

impl IntoActiveModel<entity::user::ActiveModel> for UpdateUserParams {
    fn into_active_model(self) -> entity::user::ActiveModel {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(self.id),
            username: patch(self.username),
            email: patch(self.email),
            password_hash: patch(self.password_hash),
            active: patch(self.active),
        }
    }
}

impl<'a> Repository<'a, User> {
    /// Finds a user by email address.
    ///
    /// # Arguments
    /// - `email` - Exact email address to match
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User registered with that email
    /// - `Ok(None)` - No user has that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all users whose account is active, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Active users, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_active(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Active.eq(true))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
