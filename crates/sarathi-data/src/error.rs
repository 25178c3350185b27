//! Content-service error types.

use thiserror::Error;

/// Errors that can occur when talking to the content service.
#[derive(Error, Debug)]
pub enum CrudError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Record does not exist in the collection.
    #[error("Record {id} not found in {collection}")]
    NotFound { collection: String, id: String },

    /// Record is not a JSON object or lacks a usable `_id`.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl CrudError {
    /// Whether retrying the same call might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            CrudError::Request(_) | CrudError::Timeout => true,
            CrudError::Http { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for CrudError {
    fn from(e: serde_json::Error) -> Self {
        CrudError::Json(e.to_string())
    }
}

impl From<reqwest::Error> for CrudError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CrudError::Timeout
        } else if e.is_decode() {
            CrudError::Json(e.to_string())
        } else if let Some(status) = e.status() {
            CrudError::Http {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            CrudError::Request(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(CrudError::Timeout.is_retryable());
        assert!(CrudError::Request("connection reset".into()).is_retryable());
        assert!(CrudError::Http { status: 503, message: "unavailable".into() }.is_retryable());
        assert!(CrudError::Http { status: 429, message: "slow down".into() }.is_retryable());
        assert!(!CrudError::Http { status: 400, message: "bad".into() }.is_retryable());
        assert!(!CrudError::InvalidRecord("missing _id".into()).is_retryable());
    }

    #[test]
    fn test_display() {
        let err = CrudError::NotFound {
            collection: "products".into(),
            id: "p-1".into(),
        };
        assert_eq!(err.to_string(), "Record p-1 not found in products");
    }
}
