use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use catalogo_infra::CatalogStore;

use crate::app::errors;

pub async fn list_users(Extension(store): Extension<Arc<dyn CatalogStore>>) -> axum::response::Response {
    match store.list_users().await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
