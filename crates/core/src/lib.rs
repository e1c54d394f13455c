//! `catalogo-core` — domain building blocks for the catalog API.
//!
//! This crate contains **pure domain** types (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod model;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ItemId, UserId};
pub use model::{Item, User};
pub use value_object::{ItemName, ValueObject};
