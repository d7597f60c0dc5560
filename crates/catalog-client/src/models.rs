//! Catalog Models
//!
//! Data structures matching the backend's JSON (camelCase on the wire).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned, immutable
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: String,
    /// Server-assigned
    #[serde(default)]
    pub created_at: String,
}

impl Product {
    /// Editable subset of this product
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
        }
    }
}

/// Body of create and update requests: a product without its server-owned fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
}

/// Stock level for one product (read-only here)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    #[serde(default)]
    pub product_id: Option<String>,
    pub qty: u32,
}

/// One row of the product table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListEntry {
    pub product: Product,
    pub stock: Stock,
}

impl ProductListEntry {
    pub fn id(&self) -> &str {
        &self.product.id
    }
}

/// One page of the product listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub content: Vec<ProductListEntry>,
    pub total_pages: u32,
}

/// `{ "data": ... }` wrapper used by the v1 endpoints
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

// ========================
// Auth Payloads
// ========================

/// Registration form payload; `username` goes over the wire as `name`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(rename = "name")]
    #[validate(length(min = 3, message = "Username must be at least 3 characters long"))]
    pub username: String,

    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_envelope_deserializes() {
        let body = r#"{
            "data": {
                "content": [
                    {
                        "product": {
                            "id": "p-1",
                            "name": "Lamp",
                            "description": "Desk lamp",
                            "price": 19.99,
                            "imageUrl": "https://img.example.com/lamp.png",
                            "createdAt": "2024-05-01T10:00:00Z"
                        },
                        "stock": { "productId": "p-1", "qty": 7 }
                    }
                ],
                "totalPages": 3
            }
        }"#;
        let page: ApiEnvelope<ProductPage> = serde_json::from_str(body).unwrap();
        assert_eq!(page.data.total_pages, 3);
        let entry = &page.data.content[0];
        assert_eq!(entry.id(), "p-1");
        assert_eq!(entry.product.price, "19.99".parse::<Decimal>().unwrap());
        assert_eq!(entry.stock.qty, 7);
    }

    #[test]
    fn test_draft_excludes_server_fields() {
        let draft = ProductDraft {
            name: "Lamp".into(),
            description: "Desk lamp".into(),
            price: Decimal::new(1999, 2),
            image_url: "https://img.example.com/lamp.png".into(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["imageUrl"], "https://img.example.com/lamp.png");
        assert!(json.get("id").is_none());
        assert!(json.get("createdAt").is_none());
        assert!(json["price"].is_number());
    }

    #[test]
    fn test_register_request_wire_name() {
        let req = RegisterRequest {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "secret1".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["name"], "alice");
        assert!(json.get("username").is_none());
    }

    #[test]
    fn test_register_request_validation() {
        let mut req = RegisterRequest {
            username: "al".into(),
            email: "not-an-email".into(),
            password: "123".into(),
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));

        req.username = "alice".into();
        req.email = "alice@example.com".into();
        req.password = "secret1".into();
        assert!(req.validate().is_ok());
    }
}
