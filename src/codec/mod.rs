//! # Barcode Codec
//!
//! Translation of text into linear barcode module sequences.
//!
//! ## Pipeline
//!
//! ```text
//! EncodeRequest ──► validate ──► Encoder ──► ModuleSequence
//!                      │            │
//!                      └─ tables ───┴─ checksum
//! ```
//!
//! ## Modules
//!
//! - [`tables`]: Static bar/space patterns per symbology
//! - [`checksum`]: Mod-10 and mod-103 check digits
//! - [`validate`]: Length and alphabet rules
//! - [`encode`]: The encoder and its check-digit policy
//!
//! ## Example
//!
//! ```
//! use barra::{Symbology, codec};
//!
//! let modules = codec::encode("5901234123457", Symbology::Ean13).unwrap();
//! assert_eq!(modules.len(), 95);
//! assert!(modules.to_string().starts_with("101"));
//! ```

pub mod checksum;
pub mod encode;
pub mod tables;
pub mod validate;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::symbology::Symbology;

pub use encode::{ChecksumPolicy, Encoder};
pub use validate::{is_valid, validate, violations};

/// Ordered run of barcode modules: `true` = bar (ink), `false` = space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ModuleSequence {
    modules: Vec<bool>,
}

impl ModuleSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            modules: Vec::with_capacity(capacity),
        }
    }

    /// Append a `'0'`/`'1'` table pattern.
    pub(crate) fn push_pattern(&mut self, pattern: &str) {
        self.modules.extend(pattern.bytes().map(|b| b == b'1'));
    }

    /// Append a single narrow space.
    pub(crate) fn push_space(&mut self) {
        self.modules.push(false);
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.modules.iter().copied()
    }

    /// Number of bar modules.
    pub fn bar_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    /// True if the sequence begins with the `'0'`/`'1'` pattern.
    pub fn starts_with(&self, pattern: &str) -> bool {
        pattern.len() <= self.len() && self.iter().zip(pattern.bytes()).all(|(m, b)| m == (b == b'1'))
    }

    /// True if the sequence ends with the `'0'`/`'1'` pattern.
    pub fn ends_with(&self, pattern: &str) -> bool {
        pattern.len() <= self.len()
            && self.modules[self.len() - pattern.len()..]
                .iter()
                .zip(pattern.bytes())
                .all(|(&m, b)| m == (b == b'1'))
    }
}

impl FromIterator<bool> for ModuleSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            modules: iter.into_iter().collect(),
        }
    }
}

/// Renders as a string of `'0'` and `'1'`.
impl fmt::Display for ModuleSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &m in &self.modules {
            f.write_str(if m { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Text to encode together with the symbology to encode it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeRequest {
    pub text: String,
    pub symbology: Symbology,
}

impl EncodeRequest {
    pub fn new(text: impl Into<String>, symbology: Symbology) -> Self {
        Self {
            text: text.into(),
            symbology,
        }
    }
}

/// Validate and encode `text` with the default [`Encoder`] (trusted check digits).
pub fn encode(text: &str, symbology: Symbology) -> Result<ModuleSequence, EncodeError> {
    Encoder::default().encode(&EncodeRequest::new(text, symbology))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(bits: &str) -> ModuleSequence {
        bits.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_display_and_collect() {
        let s = seq("1011001");
        assert_eq!(s.to_string(), "1011001");
        assert_eq!(s.len(), 7);
        assert_eq!(s.bar_count(), 4);
        assert!(ModuleSequence::new().is_empty());
    }

    #[test]
    fn test_push_pattern() {
        let mut s = ModuleSequence::with_capacity(8);
        s.push_pattern("101");
        s.push_space();
        s.push_pattern("11");
        assert_eq!(s.to_string(), "101011");
    }

    #[test]
    fn test_starts_and_ends_with() {
        let s = seq("1010011");
        assert!(s.starts_with("101"));
        assert!(!s.starts_with("11"));
        assert!(s.ends_with("011"));
        assert!(!s.ends_with("111"));
        assert!(!s.starts_with("10100111"));
        assert!(!s.ends_with("10100111"));
        assert!(s.starts_with(""));
    }

    #[test]
    fn test_request_from_json() {
        let req: EncodeRequest =
            serde_json::from_str(r#"{"text": "CODE-39", "symbology": "code39"}"#).unwrap();
        assert_eq!(req, EncodeRequest::new("CODE-39", Symbology::Code39));
    }
}
