//! Persisted entities.
//!
//! Field names match the table columns and the JSON keys on the wire.

use serde::Serialize;

use crate::{Entity, ItemId, ItemName, UserId};

/// A row of `usuarios`. Read-only through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub nombre: Option<String>,
    pub correo: Option<String>,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

/// A row of `items`.
///
/// `nombre` holds whatever the table holds; [`ItemName`] guards writes only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub nombre: String,
}

impl Item {
    pub fn new(id: ItemId, nombre: ItemName) -> Self {
        Self {
            id,
            nombre: nombre.into_inner(),
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_serializes_with_wire_keys() {
        let item = Item::new(ItemId::new(3), ItemName::parse("Widget").unwrap());
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({"id": 3, "nombre": "Widget"}));
    }

    #[test]
    fn user_serializes_with_wire_keys() {
        let user = User {
            id: UserId::new(1),
            nombre: Some("Ana".into()),
            correo: None,
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"id": 1, "nombre": "Ana", "correo": null})
        );
    }
}
