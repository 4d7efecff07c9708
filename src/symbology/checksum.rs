//! # Checksum Engines
//!
//! Two weighted mod-10 rules cover the four symbologies.
//!
//! EAN-13 and UPC-A validate the whole sequence in place: digits at even
//! 0-indexed positions count once, digits at odd positions count three
//! times, and the sequence is valid when the sum lands on a multiple of
//! ten. EAN-8 and UPC-E instead derive the expected check digit from the
//! payload (everything before the trailing digit) and compare.
//!
//! Note the two rules weight from opposite ends. The full-sequence rule
//! anchors weights at position 0, so a 12-digit UPC-A ends up with its
//! check digit weighted three times. The payload rule weights the first
//! payload digit three times, matching the conventional odd/even split
//! counted from position 1.

/// Full-sequence weighted sum mod 10. The sequence, check digit
/// included, is valid iff this returns zero.
pub(crate) fn weighted_checksum(digits: &[u8]) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                u32::from(d)
            } else {
                u32::from(d) * 3
            }
        })
        .sum();
    sum % 10
}

/// Expected check digit for a payload that does not yet include one.
pub(crate) fn check_digit(payload: &[u8]) -> u8 {
    let mut sum_odd = 0u32; // positions 1, 3, 5, ... counting from 1
    let mut sum_even = 0u32; // positions 2, 4, 6, ...
    for (i, &d) in payload.iter().enumerate() {
        if i % 2 == 0 {
            sum_odd += u32::from(d);
        } else {
            sum_even += u32::from(d);
        }
    }
    let remainder = (sum_odd * 3 + sum_even) % 10;
    if remainder == 0 {
        0
    } else {
        (10 - remainder) as u8
    }
}
