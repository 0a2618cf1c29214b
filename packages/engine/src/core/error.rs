//! Error types for board operations

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors a caller can trigger. None of them leave the board half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid board dimensions {height}x{width} (both must be at least 3)")]
    InvalidDimension { height: u32, width: u32 },

    #[error("cell ({row}, {col}) is outside the {height}x{width} board")]
    OutOfBounds {
        row: u32,
        col: u32,
        height: u32,
        width: u32,
    },

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error(
        "pattern '{name}' ({pattern_height}x{pattern_width}) does not fit a {height}x{width} board"
    )]
    PatternTooLarge {
        name: String,
        pattern_height: u32,
        pattern_width: u32,
        height: u32,
        width: u32,
    },

    #[error("invalid bundle: {0}")]
    InvalidBundle(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::InvalidBundle(err.to_string())
    }
}
