use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use catalogo_core::{DomainError, ItemId, ItemName};
use catalogo_infra::CatalogStore;

use crate::app::{dto::ItemMessage, errors};

pub async fn list_items(Extension(store): Extension<Arc<dyn CatalogStore>>) -> axum::response::Response {
    match store.list_items().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(store): Extension<Arc<dyn CatalogStore>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    let nombre = match item_name(body) {
        Ok(n) => n,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match store.create_item(&nombre).await {
        Ok(item) => {
            tracing::info!(item_id = %item.id, "item created");
            (StatusCode::CREATED, Json(ItemMessage::created(item))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(store): Extension<Arc<dyn CatalogStore>>,
    Path(item_id): Path<String>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    let id: ItemId = match item_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let nombre = match item_name(body) {
        Ok(n) => n,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match store.update_item(id, &nombre).await {
        Ok(Some(_)) => {
            tracing::info!(item_id = %id, "item updated");
            (StatusCode::OK, Json(ItemMessage::updated(id, nombre.into_inner()))).into_response()
        }
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, errors::ITEM_NOT_FOUND),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(store): Extension<Arc<dyn CatalogStore>>,
    Path(item_id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match item_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match store.delete_item(id).await {
        Ok(Some(_)) => {
            tracing::info!(item_id = %id, "item deleted");
            (StatusCode::OK, Json(ItemMessage::deleted(id))).into_response()
        }
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, errors::ITEM_NOT_FOUND),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// A body that is absent, not JSON, or not an object all count as a missing `nombre`.
fn item_name(body: Result<Json<serde_json::Value>, JsonRejection>) -> Result<ItemName, DomainError> {
    match body {
        Ok(Json(value)) => ItemName::from_json(&value),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable item body");
            Err(DomainError::missing_field("nombre"))
        }
    }
}
