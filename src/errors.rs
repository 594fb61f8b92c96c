//! Unified error types and result handling for the punchcard data layer.

use thiserror::Error;

/// All error conditions surfaced by the repository.
///
/// Two failure classes are deliberately *not* errors: malformed stored JSON
/// (a collection read recovers to empty) and slug collisions on create (the
/// existing record is returned). Storage-level failures always propagate as
/// [`Error::Database`].
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or validation failure
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Underlying key-value store is unavailable or a statement failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A record could not be serialized for storage
    #[error("Serialization error for key '{key}': {message}")]
    Serialization {
        /// Storage key being written when serialization failed
        key: String,
        /// Underlying serde error text
        message: String,
    },
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
