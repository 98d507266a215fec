//! Error types for the k-d tree and its baseline.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, KdTreeError>;

/// Errors reported by index operations and configuration loading.
///
/// A missing key or an empty tree is not an error: lookups return
/// `Ok(None)`/`Ok(false)` and `nearest` on an empty tree returns `Ok(None)`.
#[derive(Debug, Error)]
pub enum KdTreeError {
    /// A key, query point or query region could not be used.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(String),
}

impl KdTreeError {
    /// True for errors caused by a bad argument to an index operation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, KdTreeError::InvalidArgument(_))
    }
}
