//! Errors returned by the charging management API client

use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("Request error: {0}")]
    Request(String),

    /// The backend answered with a non-success status
    #[error("HTTP error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The backend answered 200 but reported that the operation did not apply
    #[error("Operation rejected by backend: {0}")]
    Rejected(String),

    /// The response body could not be decoded
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}
