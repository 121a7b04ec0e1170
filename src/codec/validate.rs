//! # Validation
//!
//! Per-symbology length and character-set checks, run before encoding.
//!
//! | Symbology | Rule |
//! |-----------|------|
//! | Code 128 | 1-80 chars, each in ASCII 32-126 |
//! | EAN-13 | exactly 13 digits |
//! | EAN-8 | exactly 8 digits |
//! | UPC-A | exactly 12 digits |
//! | Code 39 | 0-43 chars from `A-Z 0-9 - . $ / + %` and space |
//!
//! Lengths count characters, not bytes.

use crate::codec::tables::code39_pattern;
use crate::error::EncodeError;
use crate::symbology::Symbology;

fn character_allowed(ch: char, symbology: Symbology) -> bool {
    match symbology {
        Symbology::Code128 => (' '..='~').contains(&ch),
        Symbology::Ean13 | Symbology::Ean8 | Symbology::UpcA => ch.is_ascii_digit(),
        Symbology::Code39 => code39_pattern(ch).is_some(),
    }
}

/// Every rule `text` breaks for `symbology`, in text order.
///
/// A length violation, if any, comes first; each offending character is
/// reported separately.
pub fn violations(text: &str, symbology: Symbology) -> Vec<EncodeError> {
    let mut found = Vec::new();

    let len = text.chars().count();
    let rule = symbology.length_rule();
    if !rule.allows(len) {
        found.push(EncodeError::InvalidLength {
            symbology,
            expected: rule,
            actual: len,
        });
    }

    for (position, character) in text.chars().enumerate() {
        if !character_allowed(character, symbology) {
            found.push(EncodeError::InvalidCharacter {
                symbology,
                character,
                position,
            });
        }
    }

    found
}

/// Check `text` against `symbology`, failing on the first violation.
///
/// ```
/// use barra::{Symbology, codec::validate};
///
/// assert!(validate("CODE-39", Symbology::Code39).is_ok());
/// assert!(validate("code-39", Symbology::Code39).is_err());
/// ```
pub fn validate(text: &str, symbology: Symbology) -> Result<(), EncodeError> {
    match violations(text, symbology).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub fn is_valid(text: &str, symbology: Symbology) -> bool {
    validate(text, symbology).is_ok()
}
