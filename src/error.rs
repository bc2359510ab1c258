//! Error types for configuration input.

use thiserror::Error;

/// Smallest playable board edge.
pub const MIN_FIELD_SIZE: u8 = 5;

/// Largest board edge the terminal layout supports.
pub const MAX_FIELD_SIZE: u8 = 21;

/// Why a requested board size was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldSizeError {
    /// The input is not a non-negative integer.
    #[error("field size must be an integer, got {0:?}")]
    NotInteger(String),
    /// The board would not fit on a terminal.
    #[error("field size {0} is too large (maximum {MAX_FIELD_SIZE})")]
    TooLarge(u32),
    /// Even, or smaller than the minimum: the cross-shaped track needs an odd edge.
    #[error("field size must be odd and at least {MIN_FIELD_SIZE}, got {0}")]
    Invalid(u32),
}

/// Result type for configuration parsing.
pub type ConfigResult<T> = Result<T, FieldSizeError>;
