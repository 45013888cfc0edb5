//! Bit pattern rendering
//!
//! Turns raw storage into a string of `'0'`/`'1'` characters, one group of eight
//! per byte, with the most-significant byte first whatever the host byte order.
//!
//! ```text
//! int 5 on a little-endian host
//!   memory:  05 00 00 00
//!   printed: 00000000 00000000 00000000 00000101
//! ```
//!
//! No arithmetic is done on the value itself, so the output is exactly the
//! compiler's representation: two's complement for signed integers and IEEE-754
//! for `float` and `double`.

use crate::memory::value::Value;
use crate::memory::{Endianness, BITS_PER_BYTE};

/// Render the bits of `bytes`, which are in memory order for a host using `order`
///
/// Bytes are walked first-to-last on a big-endian layout and last-to-first on a
/// little-endian one. Groups are separated by single spaces.
///
/// The separator after the last byte is dropped on purpose, so an `n`-byte value
/// has `n - 1` spaces and the line does not end in a space.
pub fn format_bits(bytes: &[u8], order: Endianness) -> String {
    let mut out = String::with_capacity(bytes.len() * (BITS_PER_BYTE + 1));
    let mut push_byte = |byte: u8| {
        if !out.is_empty() {
            out.push(' ');
        }
        for bit in (0..BITS_PER_BYTE).rev() {
            out.push(if (byte >> bit) & 1 == 1 { '1' } else { '0' });
        }
    };

    match order {
        Endianness::Big => bytes.iter().copied().for_each(&mut push_byte),
        Endianness::Little => bytes.iter().rev().copied().for_each(&mut push_byte),
    }

    out
}

/// Render the bits of a value as laid out in this host's memory
pub fn format_value(value: &Value) -> String {
    format_bits(value.raw_bytes().as_slice(), Endianness::NATIVE)
}
