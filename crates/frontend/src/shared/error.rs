use thiserror::Error;

/// Failure of a call to the products service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Not found")]
    NotFound,
    #[error("HTTP {0}")]
    Status(u16),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success status code
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => ApiError::NotFound,
            other => ApiError::Status(other),
        }
    }
}
