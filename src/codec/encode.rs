//! # Encoder
//!
//! Maps validated text to a [`ModuleSequence`].
//!
//! ## Layouts
//!
//! | Symbology | Layout | Modules |
//! |-----------|--------|---------|
//! | Code 128 | start B, data, checksum, stop | 11 × (n + 2) + 13 |
//! | EAN-13 | guard, 6 × L/G, center, 6 × R, guard | 95 |
//! | EAN-8 | guard, 4 × L, center, 4 × R, guard | 67 |
//! | UPC-A | EAN-13 of `"0" + text` | 95 |
//! | Code 39 | `*`, chars separated by a one-module gap, `*` | 24 + 12 × n + (n - 1) |
//!
//! The per-symbology functions ([`code128`], [`ean13`], ...) check their own
//! alphabet and length even though [`Encoder::encode`] validates first.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::checksum::{code128_value, ean_checksum, parse_digits};
use super::tables::{
    CODE128_PATTERNS, CODE128_START_B, CODE128_START_B_VALUE, CODE128_STOP, CODE39_SENTINEL,
    EAN_CENTER_GUARD, EAN_END_GUARD, EAN_R_PATTERNS, EAN_START_GUARD, EAN8_LEFT_PATTERNS,
    EAN13_PARITY, code39_pattern,
};
use super::validate::validate;
use super::{EncodeRequest, ModuleSequence};
use crate::error::EncodeError;
use crate::symbology::Symbology;

/// What the encoder does with the trailing check digit of EAN-13, EAN-8 and UPC-A input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumPolicy {
    /// Encode the caller's digit as given (default)
    #[default]
    Trust,
    /// Replace the caller's digit with the computed one
    Recompute,
    /// Fail with [`EncodeError::ChecksumMismatch`] when the digit is wrong
    Verify,
}

/// Barcode encoder.
///
/// Stateless apart from its check-digit policy; share freely across threads.
///
/// ## Example
///
/// ```
/// use barra::codec::{ChecksumPolicy, EncodeRequest, Encoder};
/// use barra::Symbology;
///
/// let encoder = Encoder::new().checksum_policy(ChecksumPolicy::Verify);
/// let ok = encoder.encode(&EncodeRequest::new("5901234123457", Symbology::Ean13));
/// assert!(ok.is_ok());
///
/// let bad = encoder.encode(&EncodeRequest::new("5901234123458", Symbology::Ean13));
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    policy: ChecksumPolicy,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how trailing check digits are treated.
    pub fn checksum_policy(mut self, policy: ChecksumPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ChecksumPolicy {
        self.policy
    }

    /// Validate the request and encode it.
    pub fn encode(&self, request: &EncodeRequest) -> Result<ModuleSequence, EncodeError> {
        let EncodeRequest { text, symbology } = request;
        validate(text, *symbology)?;

        let modules = match symbology {
            Symbology::Code128 => code128(text)?,
            Symbology::Code39 => code39(text)?,
            Symbology::Ean13 => {
                let digits = self.settled_digits(text, Symbology::Ean13)?;
                ean13_digits(&digits)
            }
            Symbology::Ean8 => {
                let digits = self.settled_digits(text, Symbology::Ean8)?;
                ean8_digits(&digits)
            }
            Symbology::UpcA => {
                let digits = self.settled_digits(text, Symbology::UpcA)?;
                upca_digits(&digits)
            }
        };

        debug!(
            symbology = symbology.name(),
            chars = text.chars().count(),
            modules = modules.len(),
            "encoded barcode"
        );
        Ok(modules)
    }

    /// Parse fixed-length digits and apply the check-digit policy.
    fn settled_digits(&self, text: &str, symbology: Symbology) -> Result<Vec<u8>, EncodeError> {
        let mut digits = fixed_digits(text, symbology)?;
        let Some(check) = digits.len().checked_sub(1) else {
            return Ok(digits);
        };

        let expected = ean_checksum(&digits[..check]);
        let found = digits[check];
        match self.policy {
            ChecksumPolicy::Trust => {}
            ChecksumPolicy::Recompute => digits[check] = expected,
            ChecksumPolicy::Verify if expected != found => {
                return Err(EncodeError::ChecksumMismatch {
                    symbology,
                    expected,
                    found,
                });
            }
            ChecksumPolicy::Verify => {}
        }
        Ok(digits)
    }
}

/// Digits of a fixed-length numeric symbology, length checked first.
fn fixed_digits(text: &str, symbology: Symbology) -> Result<Vec<u8>, EncodeError> {
    let rule = symbology.length_rule();
    let len = text.chars().count();
    if !rule.allows(len) {
        return Err(EncodeError::InvalidLength {
            symbology,
            expected: rule,
            actual: len,
        });
    }
    parse_digits(text, symbology)
}

/// Encode Code 128 using Code Set B throughout.
pub fn code128(text: &str) -> Result<ModuleSequence, EncodeError> {
    let mut modules = ModuleSequence::with_capacity(11 * (text.len() + 2) + 13);
    modules.push_pattern(CODE128_START_B);

    let mut acc = CODE128_START_B_VALUE;
    for (i, ch) in text.chars().enumerate() {
        let value = code128_value(ch).ok_or(EncodeError::InvalidCharacter {
            symbology: Symbology::Code128,
            character: ch,
            position: i,
        })?;
        modules.push_pattern(CODE128_PATTERNS[value as usize]);
        acc += value * (i as u32 + 1);
    }

    modules.push_pattern(CODE128_PATTERNS[(acc % 103) as usize]);
    modules.push_pattern(CODE128_STOP);
    Ok(modules)
}

/// Encode 13 digits as EAN-13, trusting the final digit.
pub fn ean13(text: &str) -> Result<ModuleSequence, EncodeError> {
    Ok(ean13_digits(&fixed_digits(text, Symbology::Ean13)?))
}

/// Encode 8 digits as EAN-8, trusting the final digit.
pub fn ean8(text: &str) -> Result<ModuleSequence, EncodeError> {
    Ok(ean8_digits(&fixed_digits(text, Symbology::Ean8)?))
}

/// Encode 12 digits as UPC-A, trusting the final digit.
pub fn upca(text: &str) -> Result<ModuleSequence, EncodeError> {
    Ok(upca_digits(&fixed_digits(text, Symbology::UpcA)?))
}

/// Encode Code 39 without a check character.
pub fn code39(text: &str) -> Result<ModuleSequence, EncodeError> {
    let count = text.chars().count();
    let mut modules = ModuleSequence::with_capacity(code39_width(count));
    modules.push_pattern(CODE39_SENTINEL);

    for (i, ch) in text.chars().enumerate() {
        let pattern = code39_pattern(ch).ok_or(EncodeError::InvalidCharacter {
            symbology: Symbology::Code39,
            character: ch,
            position: i,
        })?;
        if i > 0 {
            modules.push_space();
        }
        modules.push_pattern(pattern);
    }

    modules.push_pattern(CODE39_SENTINEL);
    Ok(modules)
}

/// Two sentinels, `n` characters and the `n - 1` gaps between them.
fn code39_width(n: usize) -> usize {
    24 + 12 * n + n.saturating_sub(1)
}

fn ean13_digits(digits: &[u8]) -> ModuleSequence {
    debug_assert_eq!(digits.len(), 13);
    let parity = EAN13_PARITY[digits[0] as usize];

    let mut modules = ModuleSequence::with_capacity(95);
    modules.push_pattern(EAN_START_GUARD);
    for (&digit, set) in digits[1..7].iter().zip(parity) {
        modules.push_pattern(set.pattern(digit));
    }
    modules.push_pattern(EAN_CENTER_GUARD);
    for &digit in &digits[7..13] {
        modules.push_pattern(EAN_R_PATTERNS[digit as usize]);
    }
    modules.push_pattern(EAN_END_GUARD);
    modules
}

fn ean8_digits(digits: &[u8]) -> ModuleSequence {
    debug_assert_eq!(digits.len(), 8);
    let mut modules = ModuleSequence::with_capacity(67);
    modules.push_pattern(EAN_START_GUARD);
    for &digit in &digits[..4] {
        modules.push_pattern(EAN8_LEFT_PATTERNS[digit as usize]);
    }
    modules.push_pattern(EAN_CENTER_GUARD);
    for &digit in &digits[4..8] {
        modules.push_pattern(EAN_R_PATTERNS[digit as usize]);
    }
    modules.push_pattern(EAN_END_GUARD);
    modules
}

fn upca_digits(digits: &[u8]) -> ModuleSequence {
    let mut gtin = Vec::with_capacity(13);
    gtin.push(0);
    gtin.extend_from_slice(digits);
    ean13_digits(&gtin)
}

/// Expected module count for `text` in `symbology`, if the length is valid.
pub fn module_count(text: &str, symbology: Symbology) -> Option<usize> {
    let n = text.chars().count();
    if !symbology.length_rule().allows(n) {
        return None;
    }
    Some(match symbology {
        Symbology::Code128 => 11 * (n + 2) + 13,
        Symbology::Ean13 | Symbology::UpcA => 95,
        Symbology::Ean8 => 67,
        Symbology::Code39 => code39_width(n),
    })
}
