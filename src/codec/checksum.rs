//! # Check Digits
//!
//! Pure checksum arithmetic for the numeric retail formats (mod 10) and for
//! Code 128 (mod 103).
//!
//! ## EAN / UPC Weighting
//!
//! Payload digits are weighted 3, 1, 3, 1, ... starting from the rightmost
//! payload digit. For a 12-digit EAN-13 payload this is the familiar
//! left-to-right 1, 3, 1, 3, ... rule:
//!
//! ```text
//! 5 9 0 1 2 3 4 1 2 3 4 5
//! 1 3 1 3 1 3 1 3 1 3 1 3   sum = 93
//! check = (10 - 93 % 10) % 10 = 7
//! ```
//!
//! ```
//! use barra::codec::checksum::ean_checksum;
//!
//! assert_eq!(ean_checksum(&[5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5]), 7);
//! ```

use crate::codec::tables::CODE128_START_B_VALUE;
use crate::error::EncodeError;
use crate::symbology::{LengthRule, Symbology};

/// Weighted digit sum with the rightmost element weighted `rightmost_weight`.
fn weighted_sum(digits: &[u8], rightmost_weight: u32) -> u32 {
    let other = if rightmost_weight == 3 { 1 } else { 3 };
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| d as u32 * if i % 2 == 0 { rightmost_weight } else { other })
        .sum()
}

/// Mod-10 check digit for an EAN/UPC payload (digits without the check digit).
pub fn ean_checksum(payload: &[u8]) -> u8 {
    let sum = weighted_sum(payload, 3);
    ((10 - sum % 10) % 10) as u8
}

/// True if `digits` (payload plus trailing check digit) has a correct check digit.
pub fn is_valid_ean(digits: &[u8]) -> bool {
    !digits.is_empty() && weighted_sum(digits, 1) % 10 == 0
}

/// Code 128 (Code Set B) symbol value for a character.
pub(crate) fn code128_value(ch: char) -> Option<u32> {
    let code = ch as u32;
    (32..=127).contains(&code).then(|| code - 32)
}

/// Code 128 checksum value (0-102) for text encoded in Code Set B.
///
/// The accumulator starts at the Start B value (104); each character adds
/// `value * position` with 1-based positions.
pub fn code128_checksum(text: &str) -> Result<u32, EncodeError> {
    let mut acc = CODE128_START_B_VALUE;
    for (i, ch) in text.chars().enumerate() {
        let value = code128_value(ch).ok_or(EncodeError::InvalidCharacter {
            symbology: Symbology::Code128,
            character: ch,
            position: i,
        })?;
        acc += value * (i as u32 + 1);
    }
    Ok(acc % 103)
}

/// Parse `text` as decimal digits, reporting the first non-digit.
pub(crate) fn parse_digits(text: &str, symbology: Symbology) -> Result<Vec<u8>, EncodeError> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            ch.to_digit(10)
                .map(|d| d as u8)
                .ok_or(EncodeError::InvalidCharacter {
                    symbology,
                    character: ch,
                    position: i,
                })
        })
        .collect()
}

/// Complete a numeric payload with its check digit.
///
/// `payload` must be one digit shorter than the symbology's fixed length
/// (12 for EAN-13, 7 for EAN-8, 11 for UPC-A).
///
/// ```
/// use barra::{Symbology, codec::checksum::with_check_digit};
///
/// assert_eq!(with_check_digit("590123412345", Symbology::Ean13).unwrap(), "5901234123457");
/// assert_eq!(with_check_digit("03600029145", Symbology::UpcA).unwrap(), "036000291452");
/// ```
pub fn with_check_digit(payload: &str, symbology: Symbology) -> Result<String, EncodeError> {
    let LengthRule::Exactly(full) = symbology.length_rule() else {
        return Err(EncodeError::UnsupportedSymbology(format!(
            "{} has no mod-10 check digit",
            symbology
        )));
    };

    let payload_len = payload.chars().count();
    if payload_len != full - 1 {
        return Err(EncodeError::InvalidLength {
            symbology,
            expected: LengthRule::Exactly(full - 1),
            actual: payload_len,
        });
    }

    let digits = parse_digits(payload, symbology)?;
    Ok(format!("{}{}", payload, ean_checksum(&digits)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ean13_check_digit() {
        assert_eq!(ean_checksum(&[5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5]), 7);
        assert_eq!(ean_checksum(&[4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3]), 1);
        assert_eq!(ean_checksum(&[0; 12]), 0);
    }

    #[test]
    fn test_ean8_and_upc_check_digits() {
        // 9638507-4
        assert_eq!(ean_checksum(&[9, 6, 3, 8, 5, 0, 7]), 4);
        // 03600029145-2
        assert_eq!(ean_checksum(&[0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5]), 2);
    }

    #[test]
    fn test_upc_check_matches_zero_prefixed_ean13() {
        let upc = [0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5];
        let mut ean = vec![0];
        ean.extend_from_slice(&upc);
        assert_eq!(ean_checksum(&upc), ean_checksum(&ean));
    }

    #[test]
    fn test_is_valid_ean() {
        assert!(is_valid_ean(&[5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5, 7]));
        assert!(!is_valid_ean(&[5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5, 8]));
        assert!(is_valid_ean(&[9, 6, 3, 8, 5, 0, 7, 4]));
        assert!(!is_valid_ean(&[]));
    }

    #[test]
    fn test_code128_checksum() {
        // 104 + 33 * 1 = 137; 137 % 103 = 34
        assert_eq!(code128_checksum("A"), Ok(34));
        // 104 + 33*1 + 34*2 = 205; 205 % 103 = 102
        assert_eq!(code128_checksum("AB"), Ok(102));
        assert_eq!(code128_checksum(""), Ok(1));
    }

    #[test]
    fn test_code128_checksum_rejects_non_ascii() {
        assert_eq!(
            code128_checksum("Aé"),
            Err(EncodeError::InvalidCharacter {
                symbology: Symbology::Code128,
                character: 'é',
                position: 1,
            })
        );
    }

    #[test]
    fn test_checksum_is_deterministic() {
        let digits = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2];
        assert_eq!(ean_checksum(&digits), ean_checksum(&digits));
        assert_eq!(code128_checksum("Invoice-42"), code128_checksum("Invoice-42"));
    }

    #[test]
    fn test_with_check_digit_errors() {
        assert!(matches!(
            with_check_digit("12345", Symbology::Ean13),
            Err(EncodeError::InvalidLength { actual: 5, .. })
        ));
        assert!(matches!(
            with_check_digit("12345X7", Symbology::Ean8),
            Err(EncodeError::InvalidCharacter { character: 'X', position: 5, .. })
        ));
        assert!(matches!(
            with_check_digit("ABC", Symbology::Code39),
            Err(EncodeError::UnsupportedSymbology(_))
        ));
    }
}
