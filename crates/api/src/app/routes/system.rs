use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::app::errors;

/// Static description of the HTTP verbs the API uses.
pub async fn methods_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "GET": "Obtener datos. No necesita token.",
            "POST": "Crear nuevo recurso. Requiere token Bearer.",
            "PUT": "Actualizar recurso. Requiere token Bearer.",
            "DELETE": "Eliminar recurso. Requiere token Bearer.",
        })),
    )
}

pub async fn list_routes() -> impl IntoResponse {
    (StatusCode::OK, Json(super::route_table()))
}

pub async fn not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, errors::ROUTE_NOT_FOUND)
}
