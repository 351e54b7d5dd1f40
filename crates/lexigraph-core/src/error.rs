//! Error types for Lexigraph Core

use thiserror::Error;

use crate::limits::ValidationError;

/// Result type alias using Lexigraph's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Lexigraph error types
///
/// Absent words and edges are not errors: lookups return an empty result
/// and removals are no-ops.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{field} {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: ValidationError,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn invalid(field: &'static str, reason: ValidationError) -> Self {
        Self::InvalidArgument { field, reason }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
