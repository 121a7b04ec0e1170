//! # Property Tests
//!
//! Structural invariants of the encoders and the rasterizer over generated
//! inputs.

use barra::codec::{self, ChecksumPolicy, EncodeRequest, Encoder, checksum};
use barra::render::{self, RenderOptions};
use barra::{EncodeError, Symbology};
use proptest::prelude::*;

const EAN_START: &str = "101";
const EAN_CENTER: &str = "01010";

fn digits(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, len)
        .prop_map(|ds| ds.into_iter().map(|d| char::from(b'0' + d)).collect())
}

fn complete(payload: &str, symbology: Symbology) -> String {
    checksum::with_check_digit(payload, symbology).unwrap()
}

proptest! {
    #[test]
    fn ean13_is_95_modules_with_guards(code in digits(13)) {
        // Default policy trusts the supplied check digit, right or wrong
        let modules = codec::encode(&code, Symbology::Ean13).unwrap();
        prop_assert_eq!(modules.len(), 95);
        prop_assert!(modules.starts_with(EAN_START));
        prop_assert!(modules.ends_with(EAN_START));
        let center: String = modules.to_string()[45..50].to_string();
        prop_assert_eq!(center, EAN_CENTER);
    }

    #[test]
    fn ean8_is_67_modules(code in digits(8)) {
        let modules = codec::encode(&code, Symbology::Ean8).unwrap();
        prop_assert_eq!(modules.len(), 67);
        prop_assert!(modules.starts_with(EAN_START));
        prop_assert!(modules.ends_with(EAN_START));
    }

    #[test]
    fn check_digit_completes_a_valid_code(payload in digits(12)) {
        let code = complete(&payload, Symbology::Ean13);
        prop_assert!(code.starts_with(&payload));
        let ds: Vec<u8> = code.bytes().map(|b| b - b'0').collect();
        prop_assert!(checksum::is_valid_ean(&ds));

        let verify = Encoder::new().checksum_policy(ChecksumPolicy::Verify);
        prop_assert!(verify.encode(&EncodeRequest::new(code, Symbology::Ean13)).is_ok());
    }

    #[test]
    fn checksum_is_deterministic(payload in proptest::collection::vec(0u8..10, 1..20)) {
        prop_assert_eq!(checksum::ean_checksum(&payload), checksum::ean_checksum(&payload));
        prop_assert!(checksum::ean_checksum(&payload) < 10);
    }

    #[test]
    fn upc_matches_zero_prefixed_ean13(payload in digits(11)) {
        let upc = complete(&payload, Symbology::UpcA);
        let as_upc = codec::encode(&upc, Symbology::UpcA).unwrap();
        let as_ean = codec::encode(&format!("0{}", upc), Symbology::Ean13).unwrap();
        prop_assert_eq!(as_upc, as_ean);
    }

    #[test]
    fn recompute_ignores_the_supplied_check_digit(payload in digits(12), bogus in 0u8..10) {
        let good = complete(&payload, Symbology::Ean13);
        let bad = format!("{}{}", payload, bogus);
        let recompute = Encoder::new().checksum_policy(ChecksumPolicy::Recompute);
        prop_assert_eq!(
            recompute.encode(&EncodeRequest::new(bad, Symbology::Ean13)).unwrap(),
            codec::encode(&good, Symbology::Ean13).unwrap()
        );
    }

    #[test]
    fn code39_rejects_lowercase(text in "[A-Z0-9]{0,10}[a-z][A-Z0-9]{0,10}") {
        let err = codec::encode(&text, Symbology::Code39).unwrap_err();
        let is_invalid_char = matches!(err, EncodeError::InvalidCharacter { character, .. } if character.is_ascii_lowercase());
        prop_assert!(is_invalid_char);
    }

    #[test]
    fn code39_width_grows_by_13_per_char(text in "[A-Z0-9 .$/+%-]{1,43}") {
        let modules = codec::encode(&text, Symbology::Code39).unwrap();
        prop_assert_eq!(modules.len(), 13 * text.len() + 23);
    }

    #[test]
    fn code128_width_grows_by_11_per_char(text in "[ -~]{1,80}") {
        let modules = codec::encode(&text, Symbology::Code128).unwrap();
        prop_assert_eq!(modules.len(), 11 * (text.len() + 2) + 13);
        prop_assert_eq!(Some(modules.len()), codec::encode::module_count(&text, Symbology::Code128));
    }

    #[test]
    fn raster_width_follows_geometry(
        text in "[A-Z0-9]{1,12}",
        module_width in 1u32..5,
        margin in 0u32..20,
        bar_height in 1u32..40,
    ) {
        let modules = codec::encode(&text, Symbology::Code39).unwrap();
        let opts = RenderOptions::default()
            .module_width(module_width)
            .margin(margin)
            .bar_height(bar_height)
            .display_text(false);
        let image = render::rasterize(&modules, &opts).unwrap();
        prop_assert_eq!(image.width() as usize, modules.len() * module_width as usize + 2 * margin as usize);
        prop_assert_eq!(image.height(), bar_height + 2 * margin);
    }
}
