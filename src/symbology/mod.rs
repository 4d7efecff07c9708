//! # Retail Symbologies
//!
//! Detection and encoding for the four linear retail symbologies.
//!
//! | Symbology | Digits | Modules | Checksum rule |
//! |-----------|--------|---------|---------------|
//! | EAN-13 | 13 | 95 | full-sequence weighted sum |
//! | UPC-A | 12 | 95 | full-sequence weighted sum |
//! | EAN-8 | 8 | 67 | payload check digit |
//! | UPC-E | 8 | 51 | check digit over the expanded payload |
//!
//! The symbology is never stated by the caller; it is inferred from the
//! digit count and the checksum. EAN-8 and UPC-E overlap at 8 digits and
//! a sequence can satisfy both rules, so candidates are tried in the
//! fixed [`Symbology::DETECTION_ORDER`] and the first match wins.
//!
//! ## Usage
//!
//! ```
//! use barras::Symbology;
//!
//! let symbol = barras::encode("96385074")?;
//! assert_eq!(symbol.symbology, Symbology::Ean8);
//! assert_eq!(symbol.modules.len(), 67);
//! # Ok::<(), barras::EncodeError>(())
//! ```

mod builder;
mod checksum;
mod tables;
mod upce;

use std::fmt;

use crate::digits;
use crate::error::{DetectError, EncodeError};
use crate::modules::{Modules, PackedSymbol};

/// A linear retail barcode symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    /// EAN-13 / JAN-13 (13 digits).
    Ean13,
    /// UPC-A (12 digits).
    UpcA,
    /// EAN-8 / JAN-8 (8 digits).
    Ean8,
    /// UPC-E (8 digits, zero-suppressed UPC-A).
    UpcE,
}

impl Symbology {
    /// Detection priority. Order matters only for the 8-digit ambiguity:
    /// a sequence valid as both EAN-8 and UPC-E classifies as EAN-8.
    pub const DETECTION_ORDER: [Symbology; 4] = [
        Symbology::Ean13,
        Symbology::UpcA,
        Symbology::Ean8,
        Symbology::UpcE,
    ];

    /// Number of digits the symbology encodes.
    pub fn digit_count(self) -> usize {
        match self {
            Symbology::Ean13 => 13,
            Symbology::UpcA => 12,
            Symbology::Ean8 | Symbology::UpcE => 8,
        }
    }

    /// Total modules in an assembled symbol.
    pub fn module_count(self) -> usize {
        match self {
            Symbology::Ean13 | Symbology::UpcA => 95,
            Symbology::Ean8 => 67,
            Symbology::UpcE => 51,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Symbology::Ean13 => "EAN-13",
            Symbology::UpcA => "UPC-A",
            Symbology::Ean8 => "EAN-8",
            Symbology::UpcE => "UPC-E",
        }
    }

    /// Whether `digits` is a valid sequence for this symbology: right
    /// length, checksum holds, and (for UPC-E) number system 0 or 1.
    pub fn validates(self, digits: &[u8]) -> bool {
        if digits.len() != self.digit_count() {
            return false;
        }
        match self {
            Symbology::Ean13 | Symbology::UpcA => checksum::weighted_checksum(digits) == 0,
            Symbology::Ean8 => checksum::check_digit(&digits[..7]) == digits[7],
            Symbology::UpcE => {
                if digits[0] > 1 {
                    return false;
                }
                match upce::expand(&digits[..7]) {
                    Some(payload) => checksum::check_digit(&payload) == digits[7],
                    None => false,
                }
            }
        }
    }

    /// Classify `digits` as the first symbology in
    /// [`DETECTION_ORDER`](Self::DETECTION_ORDER) that validates it.
    pub fn detect(digits: &[u8]) -> Result<Symbology, DetectError> {
        for symbology in Self::DETECTION_ORDER {
            if symbology.validates(digits) {
                return Ok(symbology);
            }
        }
        let len = digits.len();
        if Self::DETECTION_ORDER.iter().any(|s| s.digit_count() == len) {
            Err(DetectError::ChecksumMismatch(len))
        } else {
            Err(DetectError::UnsupportedLength(len))
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully encoded barcode symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// The symbology that matched the input.
    pub symbology: Symbology,
    /// The assembled module sequence.
    pub modules: Modules,
}

impl Symbol {
    /// Pack the modules into the word-oriented transport form.
    pub fn pack(&self) -> PackedSymbol {
        self.modules.pack()
    }
}

/// Encode a digit string into a barcode symbol.
///
/// Runs the whole pipeline: parse the text into digits, detect the
/// symbology, assemble the module sequence.
///
/// # Example
///
/// ```
/// let symbol = barras::encode("4006381333931")?;
/// assert_eq!(symbol.symbology, barras::Symbology::Ean13);
/// assert_eq!(symbol.modules.len(), 95);
/// # Ok::<(), barras::EncodeError>(())
/// ```
pub fn encode(input: &str) -> Result<Symbol, EncodeError> {
    let digits = digits::parse(input)?;
    let symbology = Symbology::detect(&digits)?;
    let modules = builder::build(symbology, &digits);
    Ok(Symbol { symbology, modules })
}
