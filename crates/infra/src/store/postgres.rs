//! Postgres-backed catalog store.
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError |
//! |------------|------------|
//! | `PoolTimedOut`, `PoolClosed`, `Io`, `Tls` | `Unavailable` |
//! | `Database` | `Query` (carries the SQLSTATE code) |
//! | `ColumnDecode`, `ColumnNotFound`, `ColumnIndexOutOfBounds`, `RowNotFound` | `Decode` |
//! | anything else | `Query` |
//!
//! ## Commit semantics
//!
//! Each statement runs on a pooled connection in autocommit mode, so a write
//! is committed before the call returns, including an `UPDATE` that matched
//! no rows.

use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::{instrument, Span};

use catalogo_core::{Item, ItemId, ItemName, User, UserId};

use super::{CatalogStore, StoreError};

#[derive(Debug, Clone)]
pub struct PostgresCatalogStore {
    pool: PgPool,
}

impl PostgresCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl CatalogStore for PostgresCatalogStore {
    #[instrument(skip(self), fields(rows = tracing::field::Empty), err)]
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query("SELECT id, nombre, correo FROM usuarios")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_users", e))?;

        let users = rows
            .iter()
            .map(user_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Span::current().record("rows", users.len());
        Ok(users)
    }

    #[instrument(skip(self), fields(rows = tracing::field::Empty), err)]
    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query("SELECT id, nombre FROM items")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_items", e))?;

        let items = rows
            .iter()
            .map(item_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Span::current().record("rows", items.len());
        Ok(items)
    }

    #[instrument(skip(self), err)]
    async fn create_item(&self, nombre: &ItemName) -> Result<Item, StoreError> {
        let row = sqlx::query("INSERT INTO items (nombre) VALUES ($1) RETURNING id")
            .bind(nombre.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("create_item", e))?;

        let id = id_from_row(&row, "create_item")?;
        Ok(Item::new(id, nombre.clone()))
    }

    #[instrument(skip(self, id), fields(item_id = %id), err)]
    async fn update_item(&self, id: ItemId, nombre: &ItemName) -> Result<Option<ItemId>, StoreError> {
        let row = sqlx::query("UPDATE items SET nombre = $1 WHERE id = $2 RETURNING id")
            .bind(nombre.as_str())
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("update_item", e))?;

        row.as_ref().map(|r| id_from_row(r, "update_item")).transpose()
    }

    #[instrument(skip(self, id), fields(item_id = %id), err)]
    async fn delete_item(&self, id: ItemId) -> Result<Option<ItemId>, StoreError> {
        let row = sqlx::query("DELETE FROM items WHERE id = $1 RETURNING id")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_item", e))?;

        row.as_ref().map(|r| id_from_row(r, "delete_item")).transpose()
    }

    #[instrument(skip(self), err)]
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("ping", e))?;
        Ok(())
    }
}

// Rows are read positionally, in SELECT column order.

fn user_from_row(row: &PgRow) -> Result<User, StoreError> {
    let decode = |e| map_sqlx_error("list_users", e);
    Ok(User {
        id: UserId::new(row.try_get::<i32, _>(0).map_err(decode)?),
        nombre: row.try_get::<Option<String>, _>(1).map_err(decode)?,
        correo: row.try_get::<Option<String>, _>(2).map_err(decode)?,
    })
}

fn item_from_row(row: &PgRow) -> Result<Item, StoreError> {
    let decode = |e| map_sqlx_error("list_items", e);
    Ok(Item {
        id: ItemId::new(row.try_get::<i32, _>(0).map_err(decode)?),
        nombre: row.try_get::<String, _>(1).map_err(decode)?,
    })
}

fn id_from_row(row: &PgRow, operation: &str) -> Result<ItemId, StoreError> {
    row.try_get::<i32, _>(0)
        .map(ItemId::new)
        .map_err(|e| map_sqlx_error(operation, e))
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.into_owned()).unwrap_or_default();
            StoreError::Query(format!("{operation}: [{code}] {}", db_err.message()))
        }
        sqlx::Error::PoolTimedOut => {
            StoreError::Unavailable(format!("{operation}: timed out waiting for a connection"))
        }
        sqlx::Error::PoolClosed => StoreError::Unavailable(format!("{operation}: connection pool closed")),
        sqlx::Error::Io(e) => StoreError::Unavailable(format!("{operation}: {e}")),
        sqlx::Error::Tls(e) => StoreError::Unavailable(format!("{operation}: {e}")),
        e @ (sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::RowNotFound) => StoreError::Decode(format!("{operation}: {e}")),
        other => StoreError::Query(format!("{operation}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_map_to_unavailable() {
        assert!(matches!(
            map_sqlx_error("list_items", sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            map_sqlx_error("list_items", sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn row_shape_errors_map_to_decode() {
        let err = map_sqlx_error("list_users", sqlx::Error::ColumnNotFound("correo".into()));
        match err {
            StoreError::Decode(msg) => assert!(msg.starts_with("list_users:")),
            other => panic!("expected Decode, got {other:?}"),
        }
    }
}
