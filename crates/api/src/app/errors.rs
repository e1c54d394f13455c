use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalogo_core::DomainError;
use catalogo_infra::StoreError;

pub const UNAUTHORIZED: &str = "No autorizado";
pub const ITEM_NOT_FOUND: &str = "Item no encontrado";
pub const ROUTE_NOT_FOUND: &str = "Recurso no encontrado";
pub const INTERNAL: &str = "Error interno del servidor";

/// `{"error": message}` with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}

/// Infrastructure failures are not recovered: log, then a generic 500.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store operation failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::MissingField(field) => {
            json_error(StatusCode::BAD_REQUEST, format!("Dato faltante '{field}'"))
        }
        // An id that does not parse never matched an `/items/{id}` route.
        DomainError::InvalidId(_) => json_error(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND),
    }
}
