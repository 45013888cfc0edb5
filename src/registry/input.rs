//! Lenient parsing of typed values from a line of input
//!
//! Every reader here behaves like C++ stream extraction (`std::cin >> x`):
//! leading whitespace is skipped, the longest usable prefix is consumed and
//! anything after it is ignored.
//!
//! # Rules
//!
//! - Integers: optional sign, then decimal digits. Magnitudes that do not fit
//!   saturate to the type's bounds. Unsigned types accept a leading `-` and wrap
//!   modulo 2^bits, so `-1` reads as the type's maximum.
//! - Floats: the longest prefix of the first token that parses as a float,
//!   including `inf`, `nan` and exponent forms.
//! - Characters: the first non-whitespace byte of the raw line, so typing `5`
//!   stores `'5'` and bytes that are not UTF-8 are kept as typed.
//!
//! Readers return `None` when there is nothing usable; callers decide the
//! fallback (the session substitutes the type's zero value).

use std::str::FromStr;

/// Sign and digit run at the start of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerToken<'a> {
    pub negative: bool,
    pub digits: &'a str,
}

impl IntegerToken<'_> {
    /// Absolute value, saturated to `u128::MAX` on overflow
    pub fn magnitude(&self) -> u128 {
        // digits are non-empty ASCII digits, so overflow is the only failure
        self.digits.parse::<u128>().unwrap_or(u128::MAX)
    }
}

/// Scan an optionally signed run of decimal digits after leading whitespace
pub fn integer_token(text: &str) -> Option<IntegerToken<'_>> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    Some(IntegerToken {
        negative,
        digits: &rest[..end],
    })
}

/// Read a signed integer, saturating to `[min, max]`
pub fn read_signed(text: &str, min: i128, max: i128) -> Option<i128> {
    let token = integer_token(text)?;
    let magnitude = i128::try_from(token.magnitude()).unwrap_or(i128::MAX);
    let value = if token.negative { -magnitude } else { magnitude };
    Some(value.clamp(min, max))
}

/// Read an unsigned integer whose all-ones value is `max`
///
/// Negative input wraps modulo `max + 1`; magnitudes above `max` saturate.
pub fn read_unsigned(text: &str, max: u128) -> Option<u128> {
    let token = integer_token(text)?;
    let magnitude = token.magnitude();
    if magnitude > max {
        return Some(max);
    }
    if token.negative {
        Some(magnitude.wrapping_neg() & max)
    } else {
        Some(magnitude)
    }
}

/// Read an integer that must fit in `i32` exactly (menu selections)
pub fn read_exact_i32(text: &str) -> Option<i32> {
    let token = integer_token(text)?;
    let magnitude = i64::try_from(token.magnitude()).ok()?;
    let value = if token.negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Read the longest float prefix of the first whitespace-separated token
pub fn read_float<T: FromStr>(text: &str) -> Option<T> {
    let token = text.split_whitespace().next()?;
    token
        .char_indices()
        .map(|(start, ch)| start + ch.len_utf8())
        .rev()
        .find_map(|end| token[..end].parse::<T>().ok())
}

/// Read the first non-whitespace byte
pub fn read_byte(line: &[u8]) -> Option<u8> {
    line.iter().copied().find(|b| !b.is_ascii_whitespace())
}

/// First non-whitespace character, used for y/n answers
pub fn first_char(text: &str) -> Option<char> {
    text.trim_start().chars().next()
}
