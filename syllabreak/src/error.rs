//! API error types

use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rule catalog construction failed
    #[error("rule catalog error: {0}")]
    Catalog(#[from] syllabreak_core::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
