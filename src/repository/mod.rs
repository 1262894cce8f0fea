//! Generic repository over `SeaORM` entities.
//!
//! All persistence in the crate goes through [`Repository`], a single generic
//! component providing CRUD plus filtered/sorted listing for any entity whose
//! primary key is a `Uuid`. Callers describe what they want with an
//! [`EntityQuery`] value and the repository translates it into the ORM's
//! native select. The repository adds no retry, backoff, or error
//! translation: `DbErr` propagates to the caller untouched inside
//! [`crate::errors::Error::Database`].

use std::marker::PhantomData;

use sea_orm::sea_query::IntoCondition;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel, Iterable, ModelTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::entities;
use crate::errors::Result;

/// Repository of products, exposed as its own capability so the HTTP layer
/// can hold "a repository of products" without naming the generic parameter.
pub type ProductRepository = Repository<entities::product::Entity>;

/// Repository of product options.
pub type ProductOptionRepository = Repository<entities::product_option::Entity>;

/// Composable query specification for [`Repository::list`].
///
/// Holds an optional filter condition plus at most one ordering key per
/// direction. When both an ascending and a descending key are supplied, the
/// ascending key wins; callers should treat supplying both as a mistake.
#[derive(Debug, Clone)]
pub struct EntityQuery<E: EntityTrait> {
    filter: Option<Condition>,
    order_by_asc: Option<E::Column>,
    order_by_desc: Option<E::Column>,
}

impl<E: EntityTrait> Default for EntityQuery<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> EntityQuery<E> {
    /// Creates an empty query: no filter, no ordering.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filter: None,
            order_by_asc: None,
            order_by_desc: None,
        }
    }

    /// Restricts the result to entities satisfying `condition`.
    #[must_use]
    pub fn filter(mut self, condition: impl IntoCondition) -> Self {
        self.filter = Some(condition.into_condition());
        self
    }

    /// Sorts the result ascending by `column`.
    #[must_use]
    pub fn order_by_asc(mut self, column: E::Column) -> Self {
        self.order_by_asc = Some(column);
        self
    }

    /// Sorts the result descending by `column`.
    /// Ignored when an ascending key is also set.
    #[must_use]
    pub fn order_by_desc(mut self, column: E::Column) -> Self {
        self.order_by_desc = Some(column);
        self
    }
}

/// Storage-engine-agnostic CRUD and query surface for one entity type.
///
/// Holds a cheap-to-clone connection handle and no other state; every call
/// is a complete request/response unit against the store.
#[derive(Debug)]
pub struct Repository<E: EntityTrait> {
    db: DatabaseConnection,
    entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            entity: PhantomData,
        }
    }
}

impl<E> Repository<E>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    /// Creates a repository over the given connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Returns the entity with the given id, or `None` if no such record
    /// exists. Absence is not an error.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<E::Model>> {
        E::find_by_id(id).one(&self.db).await.map_err(Into::into)
    }

    /// Returns every stored entity in the store's default order.
    pub async fn list_all(&self) -> Result<Vec<E::Model>> {
        E::find().all(&self.db).await.map_err(Into::into)
    }

    /// Returns the entities matching `query`.
    ///
    /// An empty query is equivalent to [`Self::list_all`]. The ascending
    /// ordering key takes precedence when both directions are set.
    pub async fn list(&self, query: EntityQuery<E>) -> Result<Vec<E::Model>> {
        let mut select = E::find();
        if let Some(condition) = query.filter {
            select = select.filter(condition);
        }
        if let Some(column) = query.order_by_asc {
            select = select.order_by_asc(column);
        } else if let Some(column) = query.order_by_desc {
            select = select.order_by_desc(column);
        }
        select.all(&self.db).await.map_err(Into::into)
    }

    /// Persists a new entity and returns the stored record.
    ///
    /// A fresh random id is assigned when the caller left the primary key
    /// unset; a caller-provided id is kept as-is.
    pub async fn add<A>(&self, mut entity: A) -> Result<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        if let Some(key) = E::PrimaryKey::iter().next() {
            let column = key.into_column();
            if entity.get(column).is_not_set() {
                entity.set(column, Uuid::new_v4().into());
            }
        }
        entity.insert(&self.db).await.map_err(Into::into)
    }

    /// Replaces the stored record matching the entity's identity with the
    /// given field values.
    ///
    /// Updating an identity with no stored record is an error: the ORM's
    /// `RecordNotUpdated` propagates to the caller.
    pub async fn update<A>(&self, entity: A) -> Result<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        entity.update(&self.db).await.map_err(Into::into)
    }

    /// Removes the record matching the entity's identity.
    /// Deleting an entity that is no longer stored is a no-op, not an error.
    pub async fn delete<A>(&self, entity: E::Model) -> Result<()>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        ModelTrait::delete(entity, &self.db).await?;
        Ok(())
    }

    /// Removes every record matching `filter` and returns how many were
    /// deleted. Matching nothing is a no-op.
    pub async fn delete_where(&self, filter: impl IntoCondition) -> Result<u64> {
        let result = E::delete_many().filter(filter).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
