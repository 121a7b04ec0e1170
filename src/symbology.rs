//! # Symbologies
//!
//! The closed set of linear barcode standards barra can encode.
//!
//! | Symbology | Alphabet | Length | Check digit |
//! |-----------|----------|--------|-------------|
//! | Code 128 | ASCII 32-126 (Code Set B) | 1-80 | mod 103, always appended |
//! | EAN-13 | digits | 13 | mod 10, supplied by caller |
//! | EAN-8 | digits | 8 | mod 10, supplied by caller |
//! | UPC-A | digits | 12 | mod 10, supplied by caller |
//! | Code 39 | `A-Z 0-9 - . $ / + %` and space | 0-43 | none |
//!
//! ## Parsing
//!
//! ```
//! use barra::Symbology;
//!
//! let sym: Symbology = "ean13".parse().unwrap();
//! assert_eq!(sym, Symbology::Ean13);
//! assert!("pharmacode".parse::<Symbology>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

/// A linear barcode standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Symbology {
    /// Code 128, Code Set B
    Code128,
    /// EAN-13 / JAN-13 (13 digits)
    Ean13,
    /// EAN-8 (8 digits)
    Ean8,
    /// UPC-A (12 digits)
    UpcA,
    /// Code 39 (uppercase alphanumerics and a few symbols)
    Code39,
}

/// Allowed text length for a symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    Exactly(usize),
    Between(usize, usize),
}

impl LengthRule {
    pub fn allows(self, len: usize) -> bool {
        match self {
            LengthRule::Exactly(n) => len == n,
            LengthRule::Between(min, max) => (min..=max).contains(&len),
        }
    }
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthRule::Exactly(n) => write!(f, "exactly {}", n),
            LengthRule::Between(min, max) => write!(f, "{} to {}", min, max),
        }
    }
}

impl Symbology {
    /// Every supported symbology, in catalog order.
    pub const ALL: [Symbology; 5] = [
        Symbology::Code128,
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::UpcA,
        Symbology::Code39,
    ];

    /// Canonical upper-case identifier.
    pub fn name(self) -> &'static str {
        match self {
            Symbology::Code128 => "CODE128",
            Symbology::Ean13 => "EAN13",
            Symbology::Ean8 => "EAN8",
            Symbology::UpcA => "UPC",
            Symbology::Code39 => "CODE39",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Symbology::Code128 => "Code 128",
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
            Symbology::UpcA => "UPC-A",
            Symbology::Code39 => "Code 39",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Symbology::Code128 => "Most common format, supports printable ASCII",
            Symbology::Ean13 => "13-digit European Article Number",
            Symbology::Ean8 => "8-digit European Article Number",
            Symbology::UpcA => "12-digit Universal Product Code",
            Symbology::Code39 => "Alphanumeric format, widely supported",
        }
    }

    pub fn length_rule(self) -> LengthRule {
        match self {
            Symbology::Code128 => LengthRule::Between(1, 80),
            Symbology::Ean13 => LengthRule::Exactly(13),
            Symbology::Ean8 => LengthRule::Exactly(8),
            Symbology::UpcA => LengthRule::Exactly(12),
            Symbology::Code39 => LengthRule::Between(0, 43),
        }
    }

    /// True for the digit-only retail formats that carry a mod-10 check digit.
    pub fn is_numeric(self) -> bool {
        matches!(self, Symbology::Ean13 | Symbology::Ean8 | Symbology::UpcA)
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symbology {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();

        match key.as_str() {
            "CODE128" | "C128" => Ok(Symbology::Code128),
            "EAN13" | "JAN13" => Ok(Symbology::Ean13),
            "EAN8" | "JAN8" => Ok(Symbology::Ean8),
            "UPC" | "UPCA" => Ok(Symbology::UpcA),
            "CODE39" | "C39" => Ok(Symbology::Code39),
            _ => Err(EncodeError::UnsupportedSymbology(s.to_string())),
        }
    }
}

impl TryFrom<String> for Symbology {
    type Error = EncodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Symbology> for String {
    fn from(value: Symbology) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("CODE128".parse::<Symbology>(), Ok(Symbology::Code128));
        assert_eq!("code-128".parse::<Symbology>(), Ok(Symbology::Code128));
        assert_eq!("EAN-13".parse::<Symbology>(), Ok(Symbology::Ean13));
        assert_eq!("ean8".parse::<Symbology>(), Ok(Symbology::Ean8));
        assert_eq!("UPC".parse::<Symbology>(), Ok(Symbology::UpcA));
        assert_eq!("upc-a".parse::<Symbology>(), Ok(Symbology::UpcA));
        assert_eq!("Code 39".parse::<Symbology>(), Ok(Symbology::Code39));
    }

    #[test]
    fn test_parse_unsupported() {
        for name in ["ITF14", "MSI", "pharmacode", "QR", ""] {
            assert_eq!(
                name.parse::<Symbology>(),
                Err(EncodeError::UnsupportedSymbology(name.to_string()))
            );
        }
    }

    #[test]
    fn test_name_round_trips() {
        for sym in Symbology::ALL {
            assert_eq!(sym.name().parse::<Symbology>(), Ok(sym));
        }
    }

    #[test]
    fn test_length_rules() {
        assert!(Symbology::Code128.length_rule().allows(80));
        assert!(!Symbology::Code128.length_rule().allows(81));
        assert!(!Symbology::Code128.length_rule().allows(0));
        assert!(Symbology::Code39.length_rule().allows(0));
        assert!(!Symbology::Code39.length_rule().allows(44));
        assert!(Symbology::UpcA.length_rule().allows(12));
        assert!(!Symbology::UpcA.length_rule().allows(13));
        assert_eq!(LengthRule::Between(1, 43).to_string(), "1 to 43");
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Symbology::UpcA).unwrap();
        assert_eq!(json, "\"UPC\"");
        let sym: Symbology = serde_json::from_str("\"ean-8\"").unwrap();
        assert_eq!(sym, Symbology::Ean8);
        assert!(serde_json::from_str::<Symbology>("\"MSI\"").is_err());
    }
}
