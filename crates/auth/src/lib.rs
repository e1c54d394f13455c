//! `catalogo-auth` — static shared-secret bearer authentication.
//!
//! This crate is intentionally decoupled from HTTP and storage: it works on
//! raw `Authorization` header values.

pub mod bearer;

pub use bearer::{AuthError, StaticTokenValidator, TokenValidator, extract_bearer, DEFAULT_TOKEN};
