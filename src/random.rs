//! # Random Codes
//!
//! Valid demo and test codes for each symbology. The caller supplies the
//! random source, so seeded generators give reproducible output.
//!
//! ```
//! use barra::{Symbology, codec, random};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let code = random::random_code(Symbology::Ean13, &mut rng);
//! assert!(codec::is_valid(&code, Symbology::Ean13));
//! ```

use rand::Rng;

use crate::codec::checksum::{ean_checksum, parse_digits};
use crate::error::EncodeError;
use crate::symbology::{LengthRule, Symbology};

/// GS1 prefix reserved for in-store numbering.
pub const DEFAULT_EAN13_PREFIX: &str = "200";

const CODE39_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE128_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn random_digits<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<u8> {
    (0..count).map(|_| rng.random_range(0..10u8)).collect()
}

fn random_chars<R: Rng + ?Sized>(alphabet: &[u8], len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

fn with_check(mut digits: Vec<u8>) -> String {
    digits.push(ean_checksum(&digits));
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// A random code that validates for `symbology`.
///
/// Numeric codes carry a correct check digit. Code 39 codes are 5-14 chars
/// of `A-Z0-9`; Code 128 codes are 5-19 alphanumerics.
pub fn random_code<R: Rng + ?Sized>(symbology: Symbology, rng: &mut R) -> String {
    match symbology {
        Symbology::Ean13 => with_check(random_digits(12, rng)),
        Symbology::Ean8 => with_check(random_digits(7, rng)),
        Symbology::UpcA => with_check(random_digits(11, rng)),
        Symbology::Code39 => {
            let len = rng.random_range(5..15);
            random_chars(CODE39_CHARS, len, rng)
        }
        Symbology::Code128 => {
            let len = rng.random_range(5..20);
            random_chars(CODE128_CHARS, len, rng)
        }
    }
}

/// A random EAN-13 starting with `prefix` (up to 12 digits).
pub fn random_ean13_with_prefix<R: Rng + ?Sized>(
    prefix: &str,
    rng: &mut R,
) -> Result<String, EncodeError> {
    let len = prefix.chars().count();
    if len > 12 {
        return Err(EncodeError::InvalidLength {
            symbology: Symbology::Ean13,
            expected: LengthRule::Between(0, 12),
            actual: len,
        });
    }

    let mut digits = parse_digits(prefix, Symbology::Ean13)?;
    digits.extend(random_digits(12 - len, rng));
    Ok(with_check(digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::checksum::is_valid_ean;
    use crate::codec::{ChecksumPolicy, EncodeRequest, Encoder, is_valid};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_codes_are_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        let verify = Encoder::new().checksum_policy(ChecksumPolicy::Verify);
        for _ in 0..50 {
            for sym in Symbology::ALL {
                let code = random_code(sym, &mut rng);
                assert!(is_valid(&code, sym), "{} {:?}", sym, code);
                assert!(verify.encode(&EncodeRequest::new(code, sym)).is_ok());
            }
        }
    }

    #[test]
    fn test_lengths() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let c39 = random_code(Symbology::Code39, &mut rng);
            assert!((5..=14).contains(&c39.len()));
            let c128 = random_code(Symbology::Code128, &mut rng);
            assert!((5..=19).contains(&c128.len()));
            assert!(c128.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = random_code(Symbology::Code128, &mut StdRng::seed_from_u64(9));
        let b = random_code(Symbology::Code128, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_prefix() {
        let mut rng = StdRng::seed_from_u64(3);
        let code = random_ean13_with_prefix(DEFAULT_EAN13_PREFIX, &mut rng).unwrap();
        assert!(code.starts_with("200"));
        assert_eq!(code.len(), 13);
        let digits: Vec<u8> = code.bytes().map(|b| b - b'0').collect();
        assert!(is_valid_ean(&digits));

        let full = random_ean13_with_prefix("590123412345", &mut rng).unwrap();
        assert_eq!(full, "5901234123457");
    }

    #[test]
    fn test_prefix_errors() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            random_ean13_with_prefix("1234567890123", &mut rng),
            Err(EncodeError::InvalidLength { actual: 13, .. })
        ));
        assert!(matches!(
            random_ean13_with_prefix("20A", &mut rng),
            Err(EncodeError::InvalidCharacter { character: 'A', .. })
        ));
    }
}
