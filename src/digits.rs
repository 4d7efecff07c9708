//! # Digit Parser
//!
//! Turns raw text into an ordered sequence of decimal digits.
//!
//! The parser is strict: every character of the input must be an ASCII
//! decimal digit (`'0'..='9'`). There is no whitespace trimming, no
//! separator stripping, and no tolerance for non-ASCII digit characters.
//! The first offending character fails the whole parse and is reported
//! with its byte offset.

use crate::error::EncodeError;

/// An ordered sequence of decimal digits, each in `0..=9`.
pub type DigitSequence = Vec<u8>;

/// Parse `input` as a string of ASCII decimal digits.
///
/// # Example
///
/// ```
/// let digits = barras::digits::parse("9638")?;
/// assert_eq!(digits, vec![9, 6, 3, 8]);
/// # Ok::<(), barras::EncodeError>(())
/// ```
pub fn parse(input: &str) -> Result<DigitSequence, EncodeError> {
    let mut digits = Vec::with_capacity(input.len());
    for (position, ch) in input.char_indices() {
        match ch.to_digit(10) {
            Some(d) => digits.push(d as u8),
            None => return Err(EncodeError::InvalidCharacter { found: ch, position }),
        }
    }
    Ok(digits)
}
