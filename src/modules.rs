//! # Module Sequences and Packing
//!
//! A *module* is the unit-width vertical slice of a linear barcode,
//! either a bar (`true`) or a space (`false`). [`Modules`] is the
//! ordered sequence a symbology builder produces; [`PackedSymbol`] is
//! its word-oriented transport form, the contract handed to rendering
//! collaborators.
//!
//! ## Packed Layout
//!
//! Module `i` lands in bit `i % 24` of word `i / 24`:
//!
//! ```text
//! modules:  m0 m1 m2 ... m23 | m24 m25 ...
//! words[0]: bit0 = m0, bit1 = m1, ..., bit23 = m23
//! words[1]: bit0 = m24, ...
//! ```
//!
//! Trailing bits of the last word stay zero. Linear symbols are one
//! module tall by nature; the packed form advertises a fixed nominal
//! height of [`SYMBOL_HEIGHT`] rows instead, and every row repeats the
//! same modules.

use serde::{Deserialize, Serialize};

/// Nominal symbol height, in modules, advertised to renderers.
pub const SYMBOL_HEIGHT: usize = 32;

/// Modules carried per packed word.
pub const WORD_BITS: usize = 24;

/// An ordered sequence of barcode modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modules {
    bits: Vec<bool>,
}

impl Modules {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Append a guard pattern verbatim.
    pub(crate) fn push_bits(&mut self, bits: &[bool]) {
        self.bits.extend_from_slice(bits);
    }

    /// Append the 7 modules of a digit pattern, leftmost module first
    /// (bit 6 down to bit 0).
    pub(crate) fn push_pattern(&mut self, pattern: u8) {
        for bit in (0..7).rev() {
            self.bits.push(pattern >> bit & 1 == 1);
        }
    }

    /// Total module count, i.e. the symbol width.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the sequence holds no modules.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Module at `index` (`true` = bar), or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Iterate over the modules in print order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Render as a string of `1` (bar) and `0` (space), one character
    /// per module.
    pub fn bit_string(&self) -> String {
        self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }

    /// Pack into the word-oriented transport form.
    pub fn pack(&self) -> PackedSymbol {
        let mut words = vec![0u32; self.bits.len().div_ceil(WORD_BITS)];
        for (i, &bar) in self.bits.iter().enumerate() {
            if bar {
                words[i / WORD_BITS] |= 1 << (i % WORD_BITS);
            }
        }
        PackedSymbol {
            width: self.bits.len(),
            height: SYMBOL_HEIGHT,
            word_bits: WORD_BITS,
            words,
        }
    }
}

/// Transport form of an encoded symbol: geometry plus bit-packed
/// modules, ready to serialize or hand to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedSymbol {
    /// Symbol width in modules.
    pub width: usize,
    /// Nominal symbol height in modules (always [`SYMBOL_HEIGHT`]).
    pub height: usize,
    /// Modules per word (always [`WORD_BITS`]).
    pub word_bits: usize,
    /// The packed modules, least significant bit first within each word.
    pub words: Vec<u32>,
}

impl PackedSymbol {
    /// Read module `index` back out of the packed words (`true` = bar).
    /// Indexes at or past `width` read as spaces.
    pub fn module(&self, index: usize) -> bool {
        if index >= self.width {
            return false;
        }
        let word = self.words.get(index / self.word_bits).copied().unwrap_or(0);
        word >> (index % self.word_bits) & 1 == 1
    }
}
