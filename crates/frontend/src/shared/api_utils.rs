//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests, e.g. "http://localhost:5013"
pub fn api_base() -> String {
    config().api.base_url.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/Products");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL of the product collection, or of one product when `id` is given.
///
/// The identifier is percent-encoded so it is always a single path segment.
pub fn products_url(id: Option<&str>) -> String {
    let collection = api_url(&config().api.products_path);
    match id {
        Some(id) => format!("{}/{}", collection, urlencoding::encode(id)),
        None => collection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url() {
        assert_eq!(products_url(None), "http://localhost:5013/api/Products");
    }

    #[test]
    fn test_item_url() {
        assert_eq!(
            products_url(Some("3fa85f64-5717-4562-b3fc-2c963f66afa6")),
            "http://localhost:5013/api/Products/3fa85f64-5717-4562-b3fc-2c963f66afa6"
        );
    }

    #[test]
    fn test_item_url_is_encoded() {
        assert_eq!(
            products_url(Some("a/b c")),
            "http://localhost:5013/api/Products/a%2Fb%20c"
        );
    }
}
