//! Error types for the scale crate.

use thiserror::Error;

/// Errors that can occur when generating sequence values or looking up
/// scale steps.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// A negative index was requested from the Fibonacci table.
    #[error("invalid sequence index: {index}")]
    InvalidSequenceIndex { index: i64 },

    /// The requested term does not fit in a 64-bit integer.
    #[error("fibonacci({index}) overflows u64 (largest representable index is 93)")]
    SequenceOverflow { index: i64 },

    /// A scale lookup used a step name the scale does not define.
    #[error("unknown scale step: '{name}'")]
    UnknownStep { name: String },
}

/// Result type for scale operations.
pub type Result<T> = std::result::Result<T, ScaleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScaleError::InvalidSequenceIndex { index: -4 };
        assert!(err.to_string().contains("-4"));

        let err = ScaleError::UnknownStep {
            name: "huge".to_string(),
        };
        assert!(err.to_string().contains("huge"));
    }
}
