//! Generic CRUD repository shared by every catalog entity.
//!
//! `Repository<'a, T>` implements create, get, list, update and delete once for any
//! domain type implementing [`Record`]. The SeaORM entity bound through `Record`
//! supplies the table, the column set and the primary key type, so composite keys
//! are passed as tuples (e.g. `(deck_id, card_id)`). Entity-specific queries live in
//! inherent impls on the concrete instantiation in the sibling modules.

use std::marker::PhantomData;

use sea_orm::{
    sea_query::FromValueTuple, ActiveModelBehavior, ActiveModelTrait, ActiveValue,
    DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PrimaryKeyTrait, Value,
};

/// Domain type persisted through a single SeaORM entity.
pub trait Record: Sized + Send {
    /// Entity backing this record.
    type Entity: EntityTrait;

    /// Converts an entity model to the domain record at the repository boundary.
    fn from_entity(model: ModelOf<Self>) -> Self;
}

/// Entity model type of a record.
pub type ModelOf<T> = <<T as Record>::Entity as EntityTrait>::Model;
/// Active model type of a record.
pub type ActiveModelOf<T> = <<T as Record>::Entity as EntityTrait>::ActiveModel;
/// Primary key value of a record; a tuple for composite keys.
pub type IdOf<T> =
    <<<T as Record>::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Lowers an optional patch field to an active value.
///
/// `None` becomes `NotSet` so the column is left out of the UPDATE statement.
pub fn patch<V>(value: Option<V>) -> ActiveValue<V>
where
    V: Into<Value>,
{
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}

/// Repository providing basic persistence operations for one record type.
///
/// Holds a borrowed reference to the shared connection pool; construct one per
/// request with [`Repository::new`].
pub struct Repository<'a, T> {
    pub(super) db: &'a DatabaseConnection,
    record: PhantomData<fn() -> T>,
}

impl<'a, T> Repository<'a, T>
where
    T: Record,
    ModelOf<T>: IntoActiveModel<ActiveModelOf<T>>,
    ActiveModelOf<T>: ActiveModelTrait<Entity = T::Entity> + ActiveModelBehavior + Send,
{
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `Repository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            record: PhantomData,
        }
    }

    /// Inserts a new row built from the given parameters.
    ///
    /// Only the fields the parameters set are written; the store fills the rest
    /// (auto-increment ids, column defaults).
    ///
    /// # Arguments
    /// - `params` - Anything lowering to the record's active model
    ///
    /// # Returns
    /// - `Ok(T)` - The persisted record as returned by the store
    /// - `Err(DbErr)` - Database error, including constraint violations
    pub async fn create<P>(&self, params: P) -> Result<T, DbErr>
    where
        P: IntoActiveModel<ActiveModelOf<T>>,
    {
        let model = params.into_active_model().insert(self.db).await?;

        Ok(T::from_entity(model))
    }

    /// Gets a record by primary key.
    ///
    /// # Arguments
    /// - `id` - Primary key value, a tuple for composite keys
    ///
    /// # Returns
    /// - `Ok(Some(T))` - Record found
    /// - `Ok(None)` - No row with that key
    /// - `Err(DbErr)` - Database error during query
    pub async fn get<K>(&self, id: K) -> Result<Option<T>, DbErr>
    where
        K: Into<IdOf<T>>,
    {
        let model = T::Entity::find_by_id(id).one(self.db).await?;

        Ok(model.map(T::from_entity))
    }

    /// Gets every row of the table, unbounded.
    pub async fn list(&self) -> Result<Vec<T>, DbErr> {
        let models = T::Entity::find().all(self.db).await?;

        Ok(models.into_iter().map(T::from_entity).collect())
    }

    /// Writes the fields present in a patch to the row its primary key identifies.
    ///
    /// The patch must carry the primary key as `Unchanged` and every absent field as
    /// `NotSet`. A patch without changes is not sent to the store and simply
    /// re-reads the row.
    ///
    /// # Arguments
    /// - `patch` - Active model holding the key and the changed fields
    ///
    /// # Returns
    /// - `Ok(Some(T))` - The row after the update
    /// - `Ok(None)` - No row matched the key
    /// - `Err(DbErr::AttrNotSet)` - The patch has no primary key
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, patch: ActiveModelOf<T>) -> Result<Option<T>, DbErr> {
        let Some(key) = patch.get_primary_key_value() else {
            return Err(DbErr::AttrNotSet("primary key".to_string()));
        };

        if !patch.is_changed() {
            return self.get(IdOf::<T>::from_value_tuple(key)).await;
        }

        match patch.update(self.db).await {
            Ok(model) => Ok(Some(T::from_entity(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes a row by primary key.
    ///
    /// Fetches the row first so the removed record can be handed back; association
    /// rows referencing it are removed by the store's cascading foreign keys.
    ///
    /// # Arguments
    /// - `id` - Primary key of the row to delete
    ///
    /// # Returns
    /// - `Ok(Some(T))` - The deleted record
    /// - `Ok(None)` - No row with that key
    /// - `Err(DbErr)` - Database error during query or delete
    pub async fn delete<K>(&self, id: K) -> Result<Option<T>, DbErr>
    where
        K: Into<IdOf<T>>,
    {
        let Some(model) = T::Entity::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let active: ActiveModelOf<T> = model.clone().into_active_model();
        active.delete(self.db).await?;

        Ok(Some(T::from_entity(model)))
    }
}
