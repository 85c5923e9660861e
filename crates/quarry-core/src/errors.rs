//! Cross-cutting error types for Quarry.
//!
//! Domain-specific errors (`DatabaseError`, `ConnectorError`, `ConfigError`)
//! live in their own crates. The command-level `CommandError` is defined in
//! `quarry-cli` where all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any Quarry crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {key}")]
    NotFound { entity_type: String, key: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Password hashing failed.
    #[error("Password hashing failed: {0}")]
    Password(#[from] bcrypt::BcryptError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
