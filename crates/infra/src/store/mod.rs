//! Catalog storage: one trait, a Postgres implementation and an in-memory one.
//!
//! Every operation maps to exactly one SQL statement in the Postgres store.

use std::sync::Arc;

use thiserror::Error;

use catalogo_core::{Item, ItemId, ItemName, User};

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryCatalogStore;
pub use postgres::PostgresCatalogStore;

/// Infrastructure failure while talking to the store.
///
/// None of these are recovered from; the API turns them into a 500.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The database could not be reached (connect timeout, pool closed, I/O).
    #[error("database unavailable: {0}")]
    Unavailable(String),

    /// The database rejected the statement.
    #[error("query failed: {0}")]
    Query(String),

    /// A row did not have the expected shape.
    #[error("unexpected row: {0}")]
    Decode(String),
}

/// Storage for `usuarios` and `items`.
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// All users, in storage order.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// All items, in storage order.
    async fn list_items(&self) -> Result<Vec<Item>, StoreError>;

    /// Insert an item and return it with its generated id.
    async fn create_item(&self, nombre: &ItemName) -> Result<Item, StoreError>;

    /// Rename an item. `None` when no row has this id.
    async fn update_item(&self, id: ItemId, nombre: &ItemName) -> Result<Option<ItemId>, StoreError>;

    /// Delete an item. `None` when no row has this id.
    async fn delete_item(&self, id: ItemId) -> Result<Option<ItemId>, StoreError>;

    /// Cheap connectivity probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

#[async_trait::async_trait]
impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        (**self).list_users().await
    }

    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        (**self).list_items().await
    }

    async fn create_item(&self, nombre: &ItemName) -> Result<Item, StoreError> {
        (**self).create_item(nombre).await
    }

    async fn update_item(&self, id: ItemId, nombre: &ItemName) -> Result<Option<ItemId>, StoreError> {
        (**self).update_item(id, nombre).await
    }

    async fn delete_item(&self, id: ItemId) -> Result<Option<ItemId>, StoreError> {
        (**self).delete_item(id).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        (**self).ping().await
    }
}
