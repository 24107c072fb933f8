//! # Error Types
//!
//! Structured error types for schedule_core. Input edge cases (empty or
//! malformed dates and times, stale row ids) are deliberately NOT errors:
//! rendering degrades to placeholder text and stale mutations are no-ops.
//! Errors are reserved for the render/export boundary and file I/O.
//!
//! ## Example
//!
//! ```rust
//! use schedule_core::errors::{ScheduleError, ScheduleResult};
//!
//! fn check_pages(page_count: usize) -> ScheduleResult<()> {
//!     if page_count == 0 {
//!         return Err(ScheduleError::compile("document produced no pages"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for schedule_core operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Structured error type for the render and export pipeline.
///
/// Each variant carries enough context to report the failure without the
/// caller reconstructing it from scratch.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ScheduleError {
    /// The poster document failed to compile
    #[error("Poster compilation failed: {reason}")]
    Compile { reason: String },

    /// Raster encoding failed for the given output format
    #[error("Image encoding failed ({format}): {reason}")]
    Encode { format: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl ScheduleError {
    /// Create a Compile error
    pub fn compile(reason: impl Into<String>) -> Self {
        ScheduleError::Compile {
            reason: reason.into(),
        }
    }

    /// Create an Encode error
    pub fn encode(format: impl Into<String>, reason: impl Into<String>) -> Self {
        ScheduleError::Encode {
            format: format.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ScheduleError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ScheduleError::Compile { .. } => "COMPILE_FAILED",
            ScheduleError::Encode { .. } => "ENCODE_FAILED",
            ScheduleError::FileError { .. } => "FILE_ERROR",
            ScheduleError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ScheduleError::encode("png", "pixmap too large");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ScheduleError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ScheduleError::compile("bad markup").error_code(),
            "COMPILE_FAILED"
        );
        assert_eq!(
            ScheduleError::file_error("open", "a.json", "not found").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_display_includes_context() {
        let error = ScheduleError::file_error("rename", "out.png", "permission denied");
        let message = error.to_string();
        assert!(message.contains("rename"));
        assert!(message.contains("out.png"));
    }
}
