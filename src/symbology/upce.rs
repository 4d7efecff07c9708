//! # UPC-E Zero Suppression
//!
//! UPC-E is a compressed UPC-A: the 11-digit payload (number system,
//! 5-digit manufacturer, 5-digit product) is squeezed into 7 digits by
//! dropping runs of zeros. The compression is reversible, and the check
//! digit of a UPC-E symbol is defined over the *expanded* payload, so
//! validation always goes through expansion first.
//!
//! The last compressed digit `m6` selects the expansion shape:
//!
//! | m6 | Manufacturer | Product |
//! |----|--------------|---------|
//! | 0-2 | `m1 m2 m6 0 0` | `0 0 m3 m4 m5` |
//! | 3 | `m1 m2 m3 0 0` | `0 0 0 m4 m5` |
//! | 4 | `m1 m2 m3 m4 0` | `0 0 0 0 m5` |
//! | 5-9 | `m1 m2 m3 m4 m5` | `0 0 0 0 m6` |

/// Expand a 7-digit compressed sequence (number system followed by
/// `m1..m6`) into the 11-digit payload it stands for.
///
/// Returns `None` when `digits` is not exactly 7 long. The number
/// system digit is passed through untouched; callers enforce the
/// `0`/`1` restriction.
pub(crate) fn expand(digits: &[u8]) -> Option<[u8; 11]> {
    let [ns, m1, m2, m3, m4, m5, m6] = *digits else {
        return None;
    };
    let (manufacturer, product) = match m6 {
        0..=2 => ([m1, m2, m6, 0, 0], [0, 0, m3, m4, m5]),
        3 => ([m1, m2, m3, 0, 0], [0, 0, 0, m4, m5]),
        4 => ([m1, m2, m3, m4, 0], [0, 0, 0, 0, m5]),
        _ => ([m1, m2, m3, m4, m5], [0, 0, 0, 0, m6]),
    };
    let mut payload = [0u8; 11];
    payload[0] = ns;
    payload[1..6].copy_from_slice(&manufacturer);
    payload[6..11].copy_from_slice(&product);
    Some(payload)
}
