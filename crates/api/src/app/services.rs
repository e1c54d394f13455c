//! Store selection and startup checks.

use std::sync::Arc;

use catalogo_infra::{CatalogStore, InMemoryCatalogStore, PostgresCatalogStore};

use crate::config::ApiConfig;

/// Pick the store implementation for this process.
///
/// Postgres is the default. `USE_IN_MEMORY_STORE=true` swaps in the
/// in-memory store for local development.
pub async fn build_store(config: &ApiConfig) -> Arc<dyn CatalogStore> {
    if config.use_in_memory_store {
        tracing::warn!("USE_IN_MEMORY_STORE=true; data lives only as long as the process");
        return Arc::new(InMemoryCatalogStore::new());
    }

    tracing::info!(database = %config.database.masked_url(), "using postgres store");
    let store = PostgresCatalogStore::new(config.database.build_pool());

    // Not fatal: requests fail individually while the database is down.
    if let Err(e) = store.ping().await {
        tracing::error!(error = %e, "database not reachable at startup");
    }

    Arc::new(store)
}
