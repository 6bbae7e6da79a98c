//! Products service client.
//!
//! One request per call. Nothing is retried and no timeout is applied.

use contracts::domain::a001_product::aggregate::Product;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::products_url;
use crate::shared::error::ApiError;

/// Fetch all products
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let response = Request::get(&products_url(None))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(ensure_success(response)?).await
}

/// Fetch a product by ID
pub async fn fetch_product_by_id(id: &str) -> Result<Product, ApiError> {
    let response = Request::get(&products_url(Some(id)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(ensure_success(response)?).await
}

/// Create a new product, returning it with the server-assigned id and date
pub async fn create_product(product: &Product) -> Result<Product, ApiError> {
    let response = Request::post(&products_url(None))
        .header("Accept", "application/json")
        .json(product)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(ensure_success(response)?).await
}

/// Replace an existing product
///
/// Services that answer `204 No Content` get the submitted record back.
pub async fn update_product(id: &str, product: &Product) -> Result<Product, ApiError> {
    let response = Request::put(&products_url(Some(id)))
        .header("Accept", "application/json")
        .json(product)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let text = ensure_success(response)?
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    parse_body_or(&text, product)
}

/// Delete a product
pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&products_url(Some(id)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_success(response)?;
    Ok(())
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::from_status(response.status()))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn parse_body_or(text: &str, fallback: &Product) -> Result<Product, ApiError> {
    if text.trim().is_empty() {
        return Ok(fallback.clone());
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::ProductDto;

    fn submitted() -> Product {
        ProductDto {
            id: Some("9".to_string()),
            name: "Widget".to_string(),
            price: 9.99,
            category: "Tools".to_string(),
            description: "A tool".to_string(),
            ..ProductDto::default()
        }
        .to_payload()
    }

    #[test]
    fn test_empty_update_body_returns_submitted() {
        assert_eq!(parse_body_or("", &submitted()).unwrap(), submitted());
        assert_eq!(parse_body_or("  \n", &submitted()).unwrap(), submitted());
    }

    #[test]
    fn test_update_body_is_parsed() {
        let body = r#"{"id":"9","name":"Widget v2","price":12.0,"qty":1,"isActive":true,
                       "dateAdded":"2024-03-15T14:02:26"}"#;
        let p = parse_body_or(body, &submitted()).unwrap();
        assert_eq!(p.name, "Widget v2");
        assert!(p.date_added.is_some());
    }

    #[test]
    fn test_malformed_update_body_is_decode_error() {
        assert!(matches!(
            parse_body_or("<html>", &submitted()),
            Err(ApiError::Decode(_))
        ));
    }
}
