//! Strongly-typed identifiers used across the domain.
//!
//! Both tables use `SERIAL` primary keys, so identifiers wrap an `i32`.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a row in `usuarios`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

/// Identifier of a row in `items`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i32);

macro_rules! impl_serial_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(value: i32) -> Self {
                Self(value)
            }

            pub fn get(&self) -> i32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i32> for $t {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        /// Accepts only unsigned decimal digits (no sign, no whitespace).
        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DomainError::invalid_id(format!("{}: not an unsigned integer: {s:?}", $name)));
                }
                let value = s
                    .parse::<i32>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_serial_newtype!(UserId, "UserId");
impl_serial_newtype!(ItemId, "ItemId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!("42".parse::<ItemId>().unwrap(), ItemId::new(42));
        assert_eq!("0".parse::<ItemId>().unwrap(), ItemId::new(0));
        assert_eq!("007".parse::<ItemId>().unwrap(), ItemId::new(7));
    }

    #[test]
    fn rejects_signs_and_garbage() {
        for s in ["", "-1", "+1", " 1", "1a", "abc", "1.0"] {
            assert!(s.parse::<ItemId>().is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!("2147483648".parse::<ItemId>().is_err());
        assert_eq!("2147483647".parse::<ItemId>().unwrap().get(), i32::MAX);
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_value(ItemId::new(5)).unwrap();
        assert_eq!(json, serde_json::json!(5));
    }
}
