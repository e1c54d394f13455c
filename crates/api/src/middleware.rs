//! Bearer-token gate applied to every request, including unknown paths.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use catalogo_auth::{extract_bearer, AuthError, TokenValidator};

use crate::app::errors;

#[derive(Clone)]
pub struct AuthState {
    pub validator: Arc<dyn TokenValidator>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if let Err(e) = authenticate(&state, req.headers()) {
        tracing::debug!(reason = %e, path = %req.uri().path(), "request rejected");
        return errors::json_error(StatusCode::UNAUTHORIZED, errors::UNAUTHORIZED);
    }

    next.run(req).await
}

fn authenticate(state: &AuthState, headers: &HeaderMap) -> Result<(), AuthError> {
    // A header that is not visible ASCII counts as missing a Bearer scheme.
    let header = match headers.get(AUTHORIZATION) {
        None => None,
        Some(v) => Some(v.to_str().map_err(|_| AuthError::InvalidScheme)?),
    };

    let token = extract_bearer(header)?;
    state.validator.validate(token)
}
