//! Remote store error types

use thiserror::Error;

/// Errors that can occur when talking to the fact store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not reach the store at all
    #[error("Fact store unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Response body did not match the `facts` row shape
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Insert succeeded but returned no row
    #[error("Insert returned no rows")]
    EmptyInsert,
}

impl StoreError {
    /// Classify a transport failure
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            StoreError::Timeout
        } else if e.is_connect() {
            StoreError::Unavailable
        } else {
            StoreError::Request(e)
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
