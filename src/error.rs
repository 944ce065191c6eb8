use thiserror::Error;

use crate::types::TimecodeField;

/// Errors that can occur when building or converting a timecode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimecodeError {
    // ===== Validation Errors =====
    /// One or more fields fall outside the range allowed by the properties
    #[error("timecode out of bounds: invalid {}", join_fields(.fields))]
    OutOfBounds {
        /// The offending fields, most significant first
        fields: Vec<TimecodeField>,
    },

    // ===== Decode Errors =====
    /// A timecode string could not be parsed
    #[error("malformed timecode string: {input:?}")]
    MalformedString {
        /// The rejected input
        input: String,
    },

    // ===== Source Errors =====
    /// A media asset has no embedded timecode for the requested attribute
    #[error("unknown timecode: source has no embedded value")]
    UnknownTimecode,
}

impl TimecodeError {
    /// Check if this error is an out-of-bounds validation failure
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Check if this error can be recovered by retrying with a non-exact
    /// validation policy
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        self.is_out_of_bounds()
    }
}

fn join_fields(fields: &[TimecodeField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for timecode operations
pub type Result<T> = std::result::Result<T, TimecodeError>;
