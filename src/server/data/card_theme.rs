use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::repository::{Record, Repository},
    model::card::CardTheme,
};

pub type CardThemeRepository<'a> = Repository<'a, CardTheme>;

impl IntoActiveModel<entity::card_theme::ActiveModel> for CardTheme {
    fn into_active_model(self) -> entity::card_theme::ActiveModel {
        entity::card_theme::ActiveModel {
            card_id: ActiveValue::Set(self.card_id),
            theme: ActiveValue::Set(self.theme),
        }
    }
}

impl<'a> Repository<'a, CardTheme> {
    /// Tags a card with a theme, doing nothing if the tag already exists.
    ///
    /// # Arguments
    /// - `card_theme` - Card and theme to associate
    ///
    /// # Returns
    /// - `Ok(CardTheme)` - The association, new or pre-existing
    /// - `Err(DbErr)` - Database error, e.g. the card does not exist
    pub async fn add(&self, card_theme: CardTheme) -> Result<CardTheme, DbErr> {
        entity::prelude::CardTheme::insert(card_theme.clone().into_active_model())
            .on_conflict(
                OnConflict::columns([
                    entity::card_theme::Column::CardId,
                    entity::card_theme::Column::Theme,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(card_theme)
    }

    /// Gets every theme row for the given cards, ordered by card then theme.
    pub async fn get_for_cards(&self, card_ids: Vec<Uuid>) -> Result<Vec<CardTheme>, DbErr> {
        if card_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::CardTheme::find()
            .filter(entity::card_theme::Column::CardId.is_in(card_ids))
            .order_by_asc(entity::card_theme::Column::CardId)
            .order_by_asc(entity::card_theme::Column::Theme)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CardTheme::from_entity).collect())
    }
}
