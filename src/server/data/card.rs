//! Card data repository.
//!
//! Adds search and theme lookup on top of the generic CRUD operations.

use sea_orm::{
    sea_query::LikeExpr, ActiveValue, ColumnTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::{
    data::repository::{patch, Record, Repository},
    model::card::{Card, CardFilter, CreateCardParams, UpdateCardParams},
};

pub type CardRepository<'a> = Repository<'a, Card>;

impl IntoActiveModel<entity::card::ActiveModel> for CreateCardParams {
    fn into_active_model(self) -> entity::card::ActiveModel {
        entity::card::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            card_type: ActiveValue::Set(self.card_type),
            mana_cost: ActiveValue::Set(self.mana_cost),
            color: ActiveValue::Set(self.color),
            power: ActiveValue::Set(self.power),
            toughness: ActiveValue::Set(self.toughness),
            effect: ActiveValue::Set(self.effect),
            card_set: ActiveValue::Set(self.card_set),
            price: ActiveValue::Set(self.price),
        }
    }
}

impl IntoActiveModel<entity::card::ActiveModel> for UpdateCardParams {
    fn into_active_model(self) -> entity::card::ActiveModel {
        // Nullable columns: Some(v) overwrites, None leaves the stored value alone.
        entity::card::ActiveModel {
            id: ActiveValue::Unchanged(self.id),
            name: patch(self.name),
            card_type: patch(self.card_type),
            mana_cost: patch(self.mana_cost),
            color: patch(self.color.map(Some)),
            power: patch(self.power.map(Some)),
            toughness: patch(self.toughness.map(Some)),
            effect: patch(self.effect.map(Some)),
            card_set: patch(self.card_set.map(Some)),
            price: patch(self.price.map(Some)),
        }
    }
}

impl<'a> Repository<'a, Card> {
    /// Searches cards by optional name substring, mana cost and card type.
    ///
    /// Every filter that is `None` is skipped, so an empty filter lists all cards.
    /// The name matches as a literal substring: `%` and `_` are not wildcards.
    /// Results are ordered by name.
    ///
    /// # Arguments
    /// - `filter` - Search criteria
    ///
    /// # Returns
    /// - `Ok(Vec<Card>)` - Matching cards
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, filter: CardFilter) -> Result<Vec<Card>, DbErr> {
        let entities = entity::prelude::Card::find()
            .apply_if(filter.name, |query, name| {
                query.filter(entity::card::Column::Name.like(contains_literal(&name)))
            })
            .apply_if(filter.mana_cost, |query, mana_cost| {
                query.filter(entity::card::Column::ManaCost.eq(mana_cost))
            })
            .apply_if(filter.card_type, |query, card_type| {
                query.filter(entity::card::Column::CardType.eq(card_type))
            })
            .order_by_asc(entity::card::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Card::from_entity).collect())
    }

    /// Gets all cards tagged with the given theme, ordered by name.
    pub async fn get_by_theme(&self, theme: &str) -> Result<Vec<Card>, DbErr> {
        let entities = entity::prelude::Card::find()
            .inner_join(entity::prelude::CardTheme)
            .filter(entity::card_theme::Column::Theme.eq(theme))
            .order_by_asc(entity::card::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Card::from_entity).collect())
    }
}

/// `LIKE` pattern matching `text` anywhere, with `%`, `_` and `\` escaped.
fn contains_literal(text: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}
