use std::sync::RwLock;

use catalogo_core::{Entity, Item, ItemId, ItemName, User};

use super::{CatalogStore, StoreError};

#[derive(Debug)]
struct Tables {
    users: Vec<User>,
    items: Vec<Item>,
    next_item_id: i32,
}

/// In-memory catalog store for tests/dev.
///
/// Mirrors the Postgres semantics that the API can observe: item ids come
/// from a sequence starting at 1 and are never reused, listings keep
/// insertion order.
#[derive(Debug)]
pub struct InMemoryCatalogStore {
    inner: RwLock<Tables>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// `usuarios` is read-only through the API, so it can only be seeded here.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            inner: RwLock::new(Tables {
                users,
                items: Vec::new(),
                next_item_id: 1,
            }),
        }
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("in-memory store lock poisoned".to_string())
}

#[async_trait::async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let tables = self.inner.read().map_err(poisoned)?;
        Ok(tables.users.clone())
    }

    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        let tables = self.inner.read().map_err(poisoned)?;
        Ok(tables.items.clone())
    }

    async fn create_item(&self, nombre: &ItemName) -> Result<Item, StoreError> {
        let mut tables = self.inner.write().map_err(poisoned)?;
        let id = ItemId::new(tables.next_item_id);
        tables.next_item_id = tables
            .next_item_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Query("items id sequence exhausted".to_string()))?;

        let item = Item::new(id, nombre.clone());
        tables.items.push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: ItemId, nombre: &ItemName) -> Result<Option<ItemId>, StoreError> {
        let mut tables = self.inner.write().map_err(poisoned)?;
        Ok(tables.items.iter_mut().find(|i| i.id() == id).map(|item| {
            item.nombre = nombre.as_str().to_string();
            item.id()
        }))
    }

    async fn delete_item(&self, id: ItemId) -> Result<Option<ItemId>, StoreError> {
        let mut tables = self.inner.write().map_err(poisoned)?;
        let before = tables.items.len();
        tables.items.retain(|i| i.id() != id);
        Ok((tables.items.len() < before).then_some(id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.inner.read().map_err(poisoned).map(|_| ())
    }
}
