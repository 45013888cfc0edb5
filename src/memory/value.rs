//! Runtime value representation
//!
//! This module defines the [`Value`] enum, which holds one value of any supported
//! C numeric type. Each variant stores the host's C ABI type, so its storage is
//! exactly what a C compiler on the same target would lay out.
//!
//! # Raw Storage
//!
//! [`Value::raw_bytes`] copies the value's storage, in memory order, into a
//! [`RawBytes`] buffer. This is the only way to look at the bytes of a value; no
//! typed value is ever rebuilt from them.

use super::{CType, MAX_VALUE_SIZE};
use std::ffi::{c_char, c_int, c_long, c_short, c_uchar, c_uint, c_ulong, c_ushort};

/// A value of one of the supported C types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(c_int),
    Long(c_long),
    Short(c_short),
    Char(c_char),
    Float(f32),
    Double(f64),
    UInt(c_uint),
    ULong(c_ulong),
    UShort(c_ushort),
    UChar(c_uchar),
}

impl Value {
    /// The C type this value was read as
    pub fn c_type(&self) -> CType {
        match self {
            Value::Int(_) => CType::Int,
            Value::Long(_) => CType::Long,
            Value::Short(_) => CType::Short,
            Value::Char(_) => CType::Char,
            Value::Float(_) => CType::Float,
            Value::Double(_) => CType::Double,
            Value::UInt(_) => CType::UInt,
            Value::ULong(_) => CType::ULong,
            Value::UShort(_) => CType::UShort,
            Value::UChar(_) => CType::UChar,
        }
    }

    /// Copy of the value's storage, lowest address first
    pub fn raw_bytes(&self) -> RawBytes {
        match *self {
            Value::Int(n) => RawBytes::copy_from(&n.to_ne_bytes()),
            Value::Long(n) => RawBytes::copy_from(&n.to_ne_bytes()),
            Value::Short(n) => RawBytes::copy_from(&n.to_ne_bytes()),
            Value::Char(c) => RawBytes::copy_from(&c.to_ne_bytes()),
            Value::Float(x) => RawBytes::copy_from(&x.to_ne_bytes()),
            Value::Double(x) => RawBytes::copy_from(&x.to_ne_bytes()),
            Value::UInt(n) => RawBytes::copy_from(&n.to_ne_bytes()),
            Value::ULong(n) => RawBytes::copy_from(&n.to_ne_bytes()),
            Value::UShort(n) => RawBytes::copy_from(&n.to_ne_bytes()),
            Value::UChar(c) => RawBytes::copy_from(&c.to_ne_bytes()),
        }
    }
}

/// Fixed-capacity copy of a value's storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBytes {
    buf: [u8; MAX_VALUE_SIZE],
    len: usize,
}

impl RawBytes {
    fn copy_from(bytes: &[u8]) -> Self {
        let mut buf = [0u8; MAX_VALUE_SIZE];
        buf[..bytes.len()].copy_from_slice(bytes);
        RawBytes {
            buf,
            len: bytes.len(),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_bytes_length_matches_sizeof() {
        let values = [
            Value::Int(-7),
            Value::Long(123),
            Value::Short(5),
            Value::Char(65),
            Value::Float(1.5),
            Value::Double(-0.25),
            Value::UInt(9),
            Value::ULong(10),
            Value::UShort(11),
            Value::UChar(255),
        ];
        for value in values {
            assert_eq!(value.raw_bytes().as_slice().len(), value.c_type().size());
        }
    }

    #[test]
    fn test_raw_bytes_are_memory_order() {
        let bytes = Value::Int(0x0102_0304).raw_bytes();
        assert_eq!(bytes.as_slice(), &0x0102_0304i32.to_ne_bytes());

        let bytes = Value::Float(1.0).raw_bytes();
        assert_eq!(bytes.as_slice(), &1.0f32.to_bits().to_ne_bytes());
    }

    #[test]
    fn test_char_byte_is_raw() {
        // -1 as a char is the all-ones byte whatever the host's char signedness
        let c = -1i8 as c_char;
        assert_eq!(Value::Char(c).raw_bytes().as_slice(), &[0xFF]);
    }
}
