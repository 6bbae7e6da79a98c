use crate::domain::common::{timestamp, AggregateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned product identifier. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Empty product id".to_string());
        }
        Ok(Self(s.to_string()))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog item as exchanged with the products service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Absent until the server has stored the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    pub qty: i32,
    #[serde(
        default,
        with = "timestamp::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Product {
    pub fn to_string_id(&self) -> String {
        self.id.as_ref().map(|id| id.as_string()).unwrap_or_default()
    }

    /// Image to show on a card; blank URLs count as no image
    pub fn image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Rejection raised before a form is submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields(Vec<&'static str>),
}

/// Add/edit form state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub qty: i32,
    pub is_active: bool,
    pub image_url: String,
    /// Carried through so an update replaces the whole record
    pub date_added: Option<DateTime<Utc>>,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            price: 0.0,
            category: String::new(),
            qty: 0,
            is_active: true,
            image_url: String::new(),
            date_added: None,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.map(|id| id.as_string()),
            name: p.name,
            description: p.description.unwrap_or_default(),
            price: p.price,
            category: p.category.unwrap_or_default(),
            qty: p.qty,
            is_active: p.is_active,
            image_url: p.image_url.unwrap_or_default(),
            date_added: p.date_added,
        }
    }
}

impl ProductDto {
    /// Names of required fields that are still blank.
    ///
    /// Text fields must be non-empty and the price must be non-zero.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.price == 0.0 || self.price.is_nan() {
            missing.push("price");
        }
        if self.category.is_empty() {
            missing.push("category");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        missing
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingRequiredFields(missing))
        }
    }

    /// Request body for create/update
    pub fn to_payload(&self) -> Product {
        Product {
            id: self
                .id
                .as_ref()
                .filter(|id| !id.is_empty())
                .map(|id| ProductId::new(id.clone())),
            name: self.name.clone(),
            description: non_empty(&self.description),
            price: self.price,
            category: non_empty(&self.category),
            qty: self.qty,
            date_added: self.date_added,
            is_active: self.is_active,
            image_url: non_empty(&self.image_url),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn widget_form() -> ProductDto {
        ProductDto {
            name: "Widget".to_string(),
            price: 9.99,
            qty: 10,
            category: "Tools".to_string(),
            description: "A tool".to_string(),
            ..ProductDto::default()
        }
    }

    #[test]
    fn test_deserialize_server_product() {
        let json = r#"{
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "name": "Widget",
            "description": "A tool",
            "price": 9.99,
            "category": "Tools",
            "qty": 10,
            "dateAdded": "2024-03-15T14:02:26.123",
            "isActive": false,
            "imageUrl": null
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.to_string_id(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
        assert_eq!(p.description.as_deref(), Some("A tool"));
        assert!(!p.is_active);
        assert!(p.image().is_none());
        assert_eq!(
            p.date_added,
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
                + chrono::Duration::milliseconds(123))
        );
    }

    #[test]
    fn test_bad_timestamp_keeps_whole_list() {
        let json = r#"[
            {"id":"1","name":"Widget","price":9.99,"qty":10,"dateAdded":"2024-03-15T14:02:26"},
            {"id":"2","name":"Bolt","price":0.5,"qty":3,"dateAdded":"15/03/2024 2pm"}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 2);
        assert!(products[0].date_added.is_some());
        assert_eq!(products[1].to_string_id(), "2");
        assert!(products[1].date_added.is_none());
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let json = r#"{"id":"7","name":"Bolt","price":0.5,"qty":3}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.is_active);
        assert!(p.date_added.is_none());
        assert!(p.category.is_none());
    }

    #[test]
    fn test_blank_image_is_no_image() {
        let json = r#"{"id":"7","name":"Bolt","price":0.5,"qty":3,"imageUrl":"  "}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.image().is_none());
    }

    #[test]
    fn test_create_payload_wire_format() {
        let payload = widget_form().to_payload();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Widget",
                "description": "A tool",
                "price": 9.99,
                "category": "Tools",
                "qty": 10,
                "isActive": true,
                "imageUrl": null
            })
        );
    }

    #[test]
    fn test_update_payload_keeps_id_and_date() {
        let added = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let form = ProductDto {
            id: Some("abc".to_string()),
            date_added: Some(added),
            ..widget_form()
        };
        let value = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["dateAdded"], "2024-01-02T03:04:05.000Z");
    }

    #[test]
    fn test_prefill_from_product() {
        let product = Product {
            id: Some(ProductId::new("42")),
            name: "Lamp".to_string(),
            description: Some("Desk lamp".to_string()),
            price: 25.5,
            category: None,
            qty: 4,
            date_added: None,
            is_active: false,
            image_url: Some("http://img/lamp.png".to_string()),
        };
        let form = ProductDto::from(product);
        assert_eq!(form.id.as_deref(), Some("42"));
        assert_eq!(form.name, "Lamp");
        assert_eq!(form.description, "Desk lamp");
        assert_eq!(form.price, 25.5);
        assert_eq!(form.category, "");
        assert_eq!(form.qty, 4);
        assert!(!form.is_active);
        assert_eq!(form.image_url, "http://img/lamp.png");
    }

    #[test]
    fn test_blank_form_defaults() {
        let form = ProductDto::default();
        assert!(form.is_active);
        assert_eq!(form.price, 0.0);
        assert_eq!(form.qty, 0);
        assert!(form.id.is_none());
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert_eq!(widget_form().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_description() {
        let form = ProductDto {
            description: String::new(),
            ..widget_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequiredFields(vec!["description"])
        );
        assert_eq!(err.to_string(), "Please fill in all required fields.");
    }

    #[test]
    fn test_validate_rejects_zero_price() {
        let form = ProductDto {
            price: 0.0,
            ..widget_form()
        };
        assert_eq!(form.missing_fields(), vec!["price"]);
    }

    #[test]
    fn test_qty_and_image_are_not_required() {
        let form = ProductDto {
            qty: 0,
            image_url: String::new(),
            ..widget_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_product_id_from_string() {
        assert_eq!(ProductId::from_string("x1").unwrap().value(), "x1");
        assert!(ProductId::from_string("  ").is_err());
    }
}
