//! Value objects: equality by value, not identity.

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**; to "modify" one,
/// build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// The `nombre` of an item: a non-empty string.
///
/// Only construction enforces the invariant, so any `ItemName` in hand is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ValueObject for ItemName {}

impl ItemName {
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::missing_field("nombre"));
        }
        Ok(Self(value))
    }

    /// Extract a name from an arbitrary JSON body.
    ///
    /// Anything other than an object carrying a non-empty string under
    /// `nombre` is treated as the field being absent.
    pub fn from_json(body: &serde_json::Value) -> DomainResult<Self> {
        match body.get("nombre") {
            Some(serde_json::Value::String(s)) => Self::parse(s.as_str()),
            _ => Err(DomainError::missing_field("nombre")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
