//! Error types for the charging console
//!
//! Setup code uses anyhow for propagation; operator input and view-state
//! problems are described by `ConsoleError`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific console scenarios
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Invalid page size: {limit}")]
    InvalidEntryLimit { limit: usize },

    #[error("User not found: {msisdn}")]
    UserNotFound { msisdn: String },

    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },
}
