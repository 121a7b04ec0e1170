//! # Error Types
//!
//! This module defines error types used throughout the barra library.
//!
//! Encoding and rendering failures are deterministic functions of their
//! input, so none of them are retryable. [`BarraError`] wraps both for
//! callers that drive the whole pipeline (batch generation, the CLI).

use thiserror::Error;

use crate::symbology::{LengthRule, Symbology};

/// Errors raised while validating or encoding barcode text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Text length does not satisfy the symbology's length rule
    #[error("{symbology} requires {expected} characters, got {actual}")]
    InvalidLength {
        symbology: Symbology,
        expected: LengthRule,
        actual: usize,
    },

    /// Character outside the symbology's alphabet
    #[error("{symbology} cannot encode {character:?} at position {position}")]
    InvalidCharacter {
        symbology: Symbology,
        character: char,
        position: usize,
    },

    /// Format name that does not map to a supported symbology
    #[error("Unsupported symbology: {0}")]
    UnsupportedSymbology(String),

    /// Caller-supplied check digit disagrees with the computed one
    #[error("{symbology} check digit mismatch: expected {expected}, found {found}")]
    ChecksumMismatch {
        symbology: Symbology,
        expected: u8,
        found: u8,
    },
}

/// Errors raised while turning a module sequence into pixels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Geometry option that must be positive was zero
    #[error("Render option `{name}` must be greater than zero")]
    InvalidOption { name: &'static str },

    /// Human-readable text was requested but the text is empty
    #[error("Display text requested but the text is empty")]
    EmptyText,

    /// Nothing to draw
    #[error("Module sequence is empty")]
    EmptySequence,

    /// Canvas dimensions overflow the pixel buffer limits
    #[error("Canvas too large: {width} x {height}")]
    TooLarge { width: u64, height: u64 },

    /// Bitmap font could not be loaded
    #[error("Font error: {0}")]
    Font(String),

    /// Raster export (PNG encoding, file write)
    #[error("Image error: {0}")]
    Image(String),
}

/// Main error type for barra operations
#[derive(Debug, Error)]
pub enum BarraError {
    /// Validation or encoding failure
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Rasterization or export failure
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Batch item abandoned after cancellation
    #[error("Batch cancelled before this item was processed")]
    Cancelled,

    /// Invalid configuration input (options or request files)
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BarraError {
    /// The encoding error behind this failure, if any.
    pub fn as_encode(&self) -> Option<&EncodeError> {
        match self {
            BarraError::Encode(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_error_messages() {
        let err = EncodeError::InvalidLength {
            symbology: Symbology::Ean13,
            expected: LengthRule::Exactly(13),
            actual: 12,
        };
        assert_eq!(err.to_string(), "EAN-13 requires exactly 13 characters, got 12");

        let err = EncodeError::InvalidCharacter {
            symbology: Symbology::Code39,
            character: 'a',
            position: 2,
        };
        assert_eq!(err.to_string(), "Code 39 cannot encode 'a' at position 2");
    }

    #[test]
    fn test_barra_error_wraps_encode() {
        let err: BarraError = EncodeError::UnsupportedSymbology("MSI".into()).into();
        assert_eq!(err.to_string(), "Unsupported symbology: MSI");
        assert!(matches!(
            err.as_encode(),
            Some(EncodeError::UnsupportedSymbology(_))
        ));
        assert!(BarraError::Cancelled.as_encode().is_none());
    }
}
