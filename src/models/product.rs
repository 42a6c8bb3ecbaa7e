use serde::{Deserialize, Serialize};

pub type ProductId = i32;

/// Core product entity as it is stored and returned over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: i32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, stock: i32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    /// Path under which this product is addressable.
    pub fn location(&self) -> String {
        format!("/api/productos/{}", self.id)
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body accepted by both create and update. Missing numbers default to zero
/// and a missing or null name is left for validation to reject.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
    #[serde(rename = "nombre", alias = "Nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "precio", alias = "Precio", default)]
    pub price: f64,
    #[serde(alias = "Stock", default)]
    pub stock: i32,
}

impl ProductPayload {
    pub fn new(name: impl Into<String>, price: f64, stock: i32) -> Self {
        Self {
            name: Some(name.into()),
            price,
            stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_localized_field_names() {
        let p = Product::new(1, "Teclado", 89.99, 15);
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(
            value,
            json!({ "id": 1, "nombre": "Teclado", "precio": 89.99, "stock": 15 })
        );
    }

    #[test]
    fn location_points_at_item_route() {
        assert_eq!(Product::new(42, "X", 1.0, 1).location(), "/api/productos/42");
    }

    #[test]
    fn payload_accepts_capitalized_aliases() {
        let payload: ProductPayload =
            serde_json::from_value(json!({ "Nombre": "Mouse", "Precio": 39.5, "Stock": 30 }))
                .unwrap();
        assert_eq!(payload.name.as_deref(), Some("Mouse"));
        assert_eq!(payload.price, 39.5);
        assert_eq!(payload.stock, 30);
    }

    #[test]
    fn payload_missing_fields_fall_back_to_defaults() {
        let payload: ProductPayload = serde_json::from_value(json!({})).unwrap();
        assert!(payload.name.is_none());
        assert_eq!(payload.price, 0.0);
        assert_eq!(payload.stock, 0);
    }

    #[test]
    fn payload_null_name_is_none() {
        let payload: ProductPayload =
            serde_json::from_value(json!({ "nombre": null, "precio": 1, "stock": 1 })).unwrap();
        assert!(payload.name.is_none());
    }
}
