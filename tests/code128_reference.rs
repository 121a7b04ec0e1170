//! Code 128 output checked against the `barcoders` crate.
//!
//! `barcoders` needs an explicit character-set prefix; `Ɓ` selects set B,
//! which is the only set this encoder emits.

use barcoders::sym::code128::Code128;
use barra::{Symbology, codec};
use proptest::prelude::*;

fn reference(text: &str) -> Vec<bool> {
    let barcode = Code128::new(&format!("\u{0181}{}", text)).unwrap();
    barcode.encode().into_iter().map(|m| m == 1).collect()
}

#[test]
fn test_single_char() {
    let modules = codec::encode("A", Symbology::Code128).unwrap();
    assert_eq!(modules.modules(), reference("A").as_slice());
}

#[test]
fn test_mixed_text() {
    for text in ["Hello, World!", "SKU-000042", "a b c", "Invoice #1042/7"] {
        let modules = codec::encode(text, Symbology::Code128).unwrap();
        assert_eq!(modules.modules(), reference(text).as_slice(), "{:?}", text);
    }
}

proptest! {
    #[test]
    fn matches_reference_encoder(text in "[A-Za-z0-9 .,/+-]{1,40}") {
        let modules = codec::encode(&text, Symbology::Code128).unwrap();
        let expected = reference(&text);
        prop_assert_eq!(modules.modules(), expected.as_slice());
    }
}
