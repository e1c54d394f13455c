//! HTTP API application wiring (Axum router + store wiring).
//!
//! Layout:
//! - `services.rs`: store selection (Postgres pool or in-memory)
//! - `routes/`: the route table and handlers (one file per resource)
//! - `dto.rs`: request/response bodies
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use catalogo_auth::TokenValidator;
use catalogo_infra::CatalogStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// The auth gate wraps every route and the fallback, so an unauthenticated
/// request never reaches a handler or the store.
pub fn build_app(store: Arc<dyn CatalogStore>, validator: Arc<dyn TokenValidator>) -> Router {
    let auth_state = middleware::AuthState { validator };

    routes::router()
        .fallback(routes::system::not_found)
        .layer(Extension(store))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}
