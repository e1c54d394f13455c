use serde::Serialize;

use catalogo_core::{Item, ItemId};

// -------------------------
// Response DTOs
// -------------------------

/// Confirmation body for item writes.
#[derive(Debug, Serialize)]
pub struct ItemMessage {
    pub mensaje: &'static str,
    pub id: ItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
}

impl ItemMessage {
    pub fn created(item: Item) -> Self {
        Self {
            mensaje: "Item creado",
            id: item.id,
            nombre: Some(item.nombre),
        }
    }

    pub fn updated(id: ItemId, nombre: String) -> Self {
        Self {
            mensaje: "Item actualizado",
            id,
            nombre: Some(nombre),
        }
    }

    pub fn deleted(id: ItemId) -> Self {
        Self {
            mensaje: "Item eliminado",
            id,
            nombre: None,
        }
    }
}

/// One entry of `GET /rutas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub ruta: &'static str,
    pub metodos: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use catalogo_core::ItemName;
    use serde_json::json;

    use super::*;

    #[test]
    fn messages_have_the_documented_shapes() {
        let item = Item::new(ItemId::new(4), ItemName::parse("Widget").unwrap());
        assert_eq!(
            serde_json::to_value(ItemMessage::created(item)).unwrap(),
            json!({"mensaje": "Item creado", "id": 4, "nombre": "Widget"})
        );
        assert_eq!(
            serde_json::to_value(ItemMessage::updated(ItemId::new(4), "X".into())).unwrap(),
            json!({"mensaje": "Item actualizado", "id": 4, "nombre": "X"})
        );
        assert_eq!(
            serde_json::to_value(ItemMessage::deleted(ItemId::new(4))).unwrap(),
            json!({"mensaje": "Item eliminado", "id": 4})
        );
    }
}
