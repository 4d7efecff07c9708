//! # EAN/UPC Coding Tables
//!
//! Constant tables shared by the four retail symbologies: the per-digit
//! 7-module patterns, the guard bar patterns, and the parity selector
//! tables that choose between the L and G pattern sets on the left half
//! of a symbol.
//!
//! ## Digit Patterns
//!
//! Every digit occupies exactly 7 modules. Three pattern sets exist:
//!
//! | Set | Where used | Structure |
//! |-----|------------|-----------|
//! | L | left half | odd parity, starts with a space |
//! | G | left half | even parity, starts with a space |
//! | R | right half | even parity, starts with a bar |
//!
//! The sets are related: R is the bitwise complement of L, and G is R
//! read back to front. Each pattern is stored as a 7-bit value with the
//! leftmost printed module in bit 6 (`1` = bar, `0` = space).
//!
//! ## Parity Selectors
//!
//! A selector is a 6-bit value read most-significant bit first, one bit
//! per left-half position: `0` picks the L pattern, `1` picks the G
//! pattern. EAN-13 selects by its leading digit (which is never printed
//! as modules), UPC-E by its trailing check digit (same). UPC-A and
//! EAN-8 use no G patterns at all.

/// The three 7-module patterns for one digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CodingEntry {
    /// Left-half pattern, odd parity.
    pub l: u8,
    /// Right-half pattern.
    pub r: u8,
    /// Left-half pattern, even parity.
    pub g: u8,
}

// ============================================================================
// DIGIT PATTERNS
// ============================================================================

/// Per-digit coding entries, indexed by digit value.
pub(crate) const CODINGS: [CodingEntry; 10] = [
    CodingEntry { l: 0b0001101, r: 0b1110010, g: 0b0100111 }, // 0
    CodingEntry { l: 0b0011001, r: 0b1100110, g: 0b0110011 }, // 1
    CodingEntry { l: 0b0010011, r: 0b1101100, g: 0b0011011 }, // 2
    CodingEntry { l: 0b0111101, r: 0b1000010, g: 0b0100001 }, // 3
    CodingEntry { l: 0b0100011, r: 0b1011100, g: 0b0011101 }, // 4
    CodingEntry { l: 0b0110001, r: 0b1001110, g: 0b0111001 }, // 5
    CodingEntry { l: 0b0101111, r: 0b1010000, g: 0b0000101 }, // 6
    CodingEntry { l: 0b0111011, r: 0b1000100, g: 0b0010001 }, // 7
    CodingEntry { l: 0b0110111, r: 0b1001000, g: 0b0001001 }, // 8
    CodingEntry { l: 0b0001011, r: 0b1110100, g: 0b0010111 }, // 9
];

// ============================================================================
// GUARD PATTERNS
// ============================================================================

/// Normal guard, `bar space bar`. Flanks both symbol edges, except the
/// right edge of UPC-E.
pub(crate) const NORMAL_GUARD: [bool; 3] = [true, false, true];

/// Center guard, `space bar space bar space`. Separates the two halves
/// of EAN-13, UPC-A and EAN-8.
pub(crate) const CENTER_GUARD: [bool; 5] = [false, true, false, true, false];

/// Special guard, `space bar space bar space bar`. Terminates UPC-E,
/// which has no right half.
pub(crate) const SPECIAL_GUARD: [bool; 6] = [false, true, false, true, false, true];

// ============================================================================
// PARITY SELECTORS
// ============================================================================

/// EAN-13 left-half parity selectors, indexed by the leading digit.
pub(crate) const EAN13_PARITY: [u8; 10] = [
    0b000000, // 0: LLLLLL
    0b001011, // 1: LLGLGG
    0b001101, // 2: LLGGLG
    0b001110, // 3: LLGGGL
    0b010011, // 4: LGLLGG
    0b011001, // 5: LGGLLG
    0b011100, // 6: LGGGLL
    0b010101, // 7: LGLGLG
    0b010110, // 8: LGLGGL
    0b011010, // 9: LGGLGL
];

/// UPC-E parity selectors for number system 0, indexed by the check
/// digit. Number system 1 uses the 6-bit complement of the same row.
pub(crate) const UPCE_PARITY: [u8; 10] = [
    0b111000, // 0: GGGLLL
    0b110100, // 1: GGLGLL
    0b110010, // 2: GGLLGL
    0b110001, // 3: GGLLLG
    0b101100, // 4: GLGGLL
    0b100110, // 5: GLLGGL
    0b100011, // 6: GLLLGG
    0b101010, // 7: GLGLGL
    0b101001, // 8: GLGLLG
    0b100101, // 9: GLLGLG
];
