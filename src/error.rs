//! Error handling for live parameters
//!
//! Value writes never fail: typed setters report a [`Change`](crate::Change).
//! Errors only surface on the type-erased and envelope bridges, and on I/O.

use thiserror::Error;

use crate::kind::LiveKind;

/// Result type alias for live parameter operations
pub type Result<T> = std::result::Result<T, LiveError>;

/// Main error type for live parameter operations
#[derive(Error, Debug)]
pub enum LiveError {
    /// A type-erased value or envelope did not match the wrapper's kind.
    /// The wrapper keeps its previous value.
    #[error("Kind mismatch on '{parameter}': expected {}, found {}", describe(.expected), describe(.found))]
    KindMismatch {
        parameter: String,
        expected: Option<LiveKind>,
        found: Option<LiveKind>,
    },

    #[error("Unknown parameter: {type_name}")]
    UnknownParameter { type_name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn describe(kind: &Option<LiveKind>) -> String {
    match kind {
        Some(kind) => kind.to_string(),
        None => "floats".to_string(),
    }
}

impl LiveError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            LiveError::KindMismatch { .. } => "KIND_MISMATCH",
            LiveError::UnknownParameter { .. } => "UNKNOWN_PARAMETER",
            LiveError::Io(_) => "IO_ERROR",
            LiveError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable
    ///
    /// Rejected values leave the parameter untouched, so the caller can
    /// carry on with the remaining parameters.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LiveError::KindMismatch { .. } | LiveError::UnknownParameter { .. }
        )
    }
}
