use sea_orm::{
    ActiveValue, ColumnTrait, Condition, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::repository::{Record, Repository},
    model::card::CardInteraction,
};

pub type CardInteractionRepository<'a> = Repository<'a, CardInteraction>;

impl IntoActiveModel<entity::card_interaction::ActiveModel> for CardInteraction {
    fn into_active_model(self) -> entity::card_interaction::ActiveModel {
        entity::card_interaction::ActiveModel {
            card_id_1: ActiveValue::Set(self.card_id_1),
            card_id_2: ActiveValue::Set(self.card_id_2),
            interaction_type: ActiveValue::Set(self.interaction_type),
        }
    }
}

impl<'a> Repository<'a, CardInteraction> {
    /// Gets every interaction the card takes part in, on either side.
    ///
    /// # Arguments
    /// - `card_id` - Card whose interactions to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<CardInteraction>)` - Interactions where the card is first or second
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_card(&self, card_id: Uuid) -> Result<Vec<CardInteraction>, DbErr> {
        let entities = entity::prelude::CardInteraction::find()
            .filter(
                Condition::any()
                    .add(entity::card_interaction::Column::CardId1.eq(card_id))
                    .add(entity::card_interaction::Column::CardId2.eq(card_id)),
            )
            .order_by_asc(entity::card_interaction::Column::InteractionType)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(CardInteraction::from_entity)
            .collect())
    }

    /// Gets the interactions whose both ends are among the given cards.
    pub async fn get_among(&self, card_ids: Vec<Uuid>) -> Result<Vec<CardInteraction>, DbErr> {
        if card_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::CardInteraction::find()
            .filter(entity::card_interaction::Column::CardId1.is_in(card_ids.clone()))
            .filter(entity::card_interaction::Column::CardId2.is_in(card_ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(CardInteraction::from_entity)
            .collect())
    }
}
