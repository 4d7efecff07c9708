//! # Error Types
//!
//! This module defines error types used throughout the barras library.
//!
//! Encoding can fail at two stages: parsing (the input contains something
//! other than ASCII decimal digits) and detection (no symbology accepts the
//! digit sequence). Detection failures surface as the aggregate
//! [`EncodeError::UnsupportedBarcode`], with the specific sub-reason kept as
//! a [`DetectError`] source.

use thiserror::Error;

use crate::render::RenderError;

/// Why symbology detection rejected a digit sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DetectError {
    /// No symbology encodes a sequence of this many digits.
    #[error("no symbology takes a {0}-digit input (supported lengths: 8, 12, 13)")]
    UnsupportedLength(usize),

    /// At least one symbology matched the length, but every candidate's
    /// checksum rule rejected the digits.
    #[error("checksum failed for every {0}-digit symbology")]
    ChecksumMismatch(usize),
}

/// Errors from the encode pipeline.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The input contained something other than an ASCII decimal digit.
    #[error("invalid character {found:?} at byte {position}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// Byte offset of the character within the input.
        position: usize,
    },

    /// No supported symbology validates the digit sequence.
    #[error("unsupported barcode: {0}")]
    UnsupportedBarcode(#[from] DetectError),
}

/// Main error type for barras operations
#[derive(Debug, Error)]
pub enum BarrasError {
    /// Encode pipeline failure (bad character or unsupported barcode)
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Rasterization failure from the rendering collaborator
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// JSON serialization error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_error_is_kept_as_source() {
        let err = EncodeError::from(DetectError::ChecksumMismatch(13));
        assert_eq!(
            err,
            EncodeError::UnsupportedBarcode(DetectError::ChecksumMismatch(13))
        );
        assert_eq!(
            err.to_string(),
            "unsupported barcode: checksum failed for every 13-digit symbology"
        );
    }

    #[test]
    fn invalid_character_names_the_offender() {
        let err = EncodeError::InvalidCharacter {
            found: 'a',
            position: 5,
        };
        assert_eq!(err.to_string(), "invalid character 'a' at byte 5");
    }
}
