//! Error kinds raised by the palette engine.

use thiserror::Error;

/// Failures surfaced by color parsing, slot edits, and document import.
///
/// Every failure leaves the previous engine state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The input does not match `#RGB` or `#RRGGBB`.
    #[error("Invalid hex color '{input}'. Expected #RRGGBB or #RGB")]
    InvalidColor {
        /// The rejected input, verbatim.
        input: String,
    },
    /// A requested slot count is zero or above the configured maximum.
    #[error("Invalid color count {requested}. Expected a value between 1 and {max}")]
    InvalidCount {
        /// The rejected count.
        requested: usize,
        /// The configured upper bound.
        max: usize,
    },
    /// An import payload failed validation.
    #[error("Invalid palette document: {reason}")]
    InvalidDocument {
        /// Human-readable reason for the rejection.
        reason: String,
    },
    /// A slot edit addressed an index past the end of the palette.
    #[error("Slot index {index} is out of range for a palette of {len} colors")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of slots at the time of the call.
        len: usize,
    },
}

impl PaletteError {
    pub(crate) fn invalid_document(reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            reason: reason.into(),
        }
    }
}

/// Result alias for engine operations.
pub type PaletteResult<T> = Result<T, PaletteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PaletteError::InvalidColor {
            input: "#12".to_string(),
        };
        assert!(err.to_string().contains("'#12'"));

        let err = PaletteError::InvalidCount {
            requested: 30,
            max: 24,
        };
        assert_eq!(
            err.to_string(),
            "Invalid color count 30. Expected a value between 1 and 24"
        );

        let err = PaletteError::invalid_document("names missing");
        assert_eq!(err.to_string(), "Invalid palette document: names missing");
    }
}
