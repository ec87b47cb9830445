use sea_orm::{
    ActiveValue, ColumnTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::repository::{Record, Repository},
    model::deck::{CreateDeckParams, Deck},
};

pub type DeckRepository<'a> = Repository<'a, Deck>;

impl IntoActiveModel<entity::deck::ActiveModel> for CreateDeckParams {
    fn into_active_model(self) -> entity::deck::ActiveModel {
        entity::deck::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
        }
    }
}

impl<'a> Repository<'a, Deck> {
    /// Gets every deck owned by a user, ordered by name.
    ///
    /// # Arguments
    /// - `user_id` - ID of the owning user
    ///
    /// # Returns
    /// - `Ok(Vec<Deck>)` - The user's decks, empty if none or the user does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Deck>, DbErr> {
        let entities = entity::prelude::Deck::find()
            .filter(entity::deck::Column::UserId.eq(user_id))
            .order_by_asc(entity::deck::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Deck::from_entity).collect())
    }
}
