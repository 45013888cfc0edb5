//! Memory model for the bit viewer
//!
//! This module provides the core storage abstractions:
//! - [`value`]: Tagged runtime values, one variant per supported C type
//! - [`CType`]: The closed set of C numeric types and their storage sizes
//! - [`Endianness`]: The host byte order, fixed at build time
//!
//! # Type Sizes
//!
//! Sizes are whatever the host C ABI uses, taken from [`std::ffi`]:
//! - `char`: 1 byte
//! - `short`: 2 bytes
//! - `int`: 4 bytes
//! - `long`: 4 or 8 bytes depending on the target
//! - `float` / `double`: 4 / 8 bytes (IEEE-754)

pub mod value;

use std::ffi::{c_char, c_int, c_long, c_short, c_uchar, c_uint, c_ulong, c_ushort};
use std::fmt;
use std::mem::size_of;
use value::Value;

/// Number of bits in one storage unit
pub const BITS_PER_BYTE: usize = 8;

/// Largest storage size of any supported type, in bytes
pub const MAX_VALUE_SIZE: usize = 8;

/// Byte order of a multi-byte value in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Most-significant byte at the lowest address
    Big,
    /// Least-significant byte at the lowest address
    Little,
}

impl Endianness {
    /// Byte order of the host this binary was built for
    pub const NATIVE: Endianness = if cfg!(target_endian = "big") {
        Endianness::Big
    } else {
        Endianness::Little
    };
}

/// The C numeric types the viewer knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CType {
    Int,
    Long,
    Short,
    Char,
    Float,
    Double,
    UInt,
    ULong,
    UShort,
    UChar,
}

impl CType {
    /// C spelling of the type, as shown in the menu
    pub fn name(self) -> &'static str {
        match self {
            CType::Int => "int",
            CType::Long => "long",
            CType::Short => "short",
            CType::Char => "char",
            CType::Float => "float",
            CType::Double => "double",
            CType::UInt => "unsigned int",
            CType::ULong => "unsigned long",
            CType::UShort => "unsigned short",
            CType::UChar => "unsigned char",
        }
    }

    /// Storage size in bytes (`sizeof` on the host)
    pub fn size(self) -> usize {
        match self {
            CType::Int => size_of::<c_int>(),
            CType::Long => size_of::<c_long>(),
            CType::Short => size_of::<c_short>(),
            CType::Char => size_of::<c_char>(),
            CType::Float => size_of::<f32>(),
            CType::Double => size_of::<f64>(),
            CType::UInt => size_of::<c_uint>(),
            CType::ULong => size_of::<c_ulong>(),
            CType::UShort => size_of::<c_ushort>(),
            CType::UChar => size_of::<c_uchar>(),
        }
    }

    /// The zero value of this type
    pub fn zero(self) -> Value {
        match self {
            CType::Int => Value::Int(0),
            CType::Long => Value::Long(0),
            CType::Short => Value::Short(0),
            CType::Char => Value::Char(0),
            CType::Float => Value::Float(0.0),
            CType::Double => Value::Double(0.0),
            CType::UInt => Value::UInt(0),
            CType::ULong => Value::ULong(0),
            CType::UShort => Value::UShort(0),
            CType::UChar => Value::UChar(0),
        }
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
