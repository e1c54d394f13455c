//! Infrastructure layer: database configuration and catalog storage.

pub mod db;
pub mod store;

pub use db::DatabaseConfig;
pub use store::{CatalogStore, InMemoryCatalogStore, PostgresCatalogStore, StoreError};
