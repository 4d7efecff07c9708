//! # Symbol Assembly
//!
//! Builds the ordered module sequence for a validated digit sequence.
//! Layouts differ per symbology but share the same vocabulary of parts:
//!
//! ```text
//! EAN-13:  |GUARD| d2..d7 (parity by d1) |CENTER| d8..d13 (R) |GUARD|
//! UPC-A:   |GUARD| d1..d6 (all L)        |CENTER| d7..d12 (R) |GUARD|
//! EAN-8:   |GUARD| d1..d4 (all L)        |CENTER| d5..d8  (R) |GUARD|
//! UPC-E:   |GUARD| d2..d7 (parity by d8)                   |SPECIAL|
//! ```
//!
//! EAN-13 carries its leading digit only through the parity mix of the
//! left half; UPC-E likewise never prints its number system or check
//! digit as modules. No quiet zone margin is emitted here.

use crate::modules::Modules;

use super::Symbology;
use super::tables::{CENTER_GUARD, CODINGS, EAN13_PARITY, NORMAL_GUARD, SPECIAL_GUARD, UPCE_PARITY};

/// Assemble the module sequence for `digits` under `symbology`.
///
/// Callers must have validated `digits` for `symbology` first; only the
/// length is debug-asserted here.
pub(crate) fn build(symbology: Symbology, digits: &[u8]) -> Modules {
    debug_assert_eq!(digits.len(), symbology.digit_count());
    let mut modules = Modules::with_capacity(symbology.module_count());
    match symbology {
        Symbology::Ean13 => {
            modules.push_bits(&NORMAL_GUARD);
            push_parity_half(&mut modules, &digits[1..7], EAN13_PARITY[digits[0] as usize]);
            modules.push_bits(&CENTER_GUARD);
            push_right_half(&mut modules, &digits[7..13]);
            modules.push_bits(&NORMAL_GUARD);
        }
        Symbology::UpcA => {
            modules.push_bits(&NORMAL_GUARD);
            push_parity_half(&mut modules, &digits[0..6], 0);
            modules.push_bits(&CENTER_GUARD);
            push_right_half(&mut modules, &digits[6..12]);
            modules.push_bits(&NORMAL_GUARD);
        }
        Symbology::Ean8 => {
            modules.push_bits(&NORMAL_GUARD);
            push_parity_half(&mut modules, &digits[0..4], 0);
            modules.push_bits(&CENTER_GUARD);
            push_right_half(&mut modules, &digits[4..8]);
            modules.push_bits(&NORMAL_GUARD);
        }
        Symbology::UpcE => {
            let mut selector = UPCE_PARITY[digits[7] as usize];
            if digits[0] == 1 {
                selector = !selector & 0b11_1111;
            }
            modules.push_bits(&NORMAL_GUARD);
            push_parity_half(&mut modules, &digits[1..7], selector);
            modules.push_bits(&SPECIAL_GUARD);
        }
    }
    debug_assert_eq!(modules.len(), symbology.module_count());
    modules
}

/// Append left-half digits, picking L or G per position from the 6-bit
/// `selector` (MSB first, `1` = G). EAN-8 passes four digits and only
/// consumes the selector's top four bits, which are always zero there.
fn push_parity_half(modules: &mut Modules, digits: &[u8], selector: u8) {
    for (i, &digit) in digits.iter().enumerate() {
        let entry = &CODINGS[digit as usize];
        let pattern = if selector >> (5 - i) & 1 == 0 {
            entry.l
        } else {
            entry.g
        };
        modules.push_pattern(pattern);
    }
}

/// Append right-half digits, always from the R set.
fn push_right_half(modules: &mut Modules, digits: &[u8]) {
    for &digit in digits {
        modules.push_pattern(CODINGS[digit as usize].r);
    }
}
