//! The fixed table of supported types
//!
//! [`REGISTRY`] lists one [`TypeDescriptor`] per menu entry, in menu order. Menu
//! index `i` (1-based) always resolves to `REGISTRY[i - 1]`, since both the menu
//! text and the dispatch come from the same array.
//!
//! A descriptor bundles the type tag with two plain function pointers: a reader
//! that turns the raw bytes of an input line into a [`Value`], and a printer
//! that renders the value's bits. The table is `static`; nothing is registered
//! at runtime.

pub mod input;

use crate::memory::value::Value;
use crate::memory::CType;
use crate::printer;
use std::borrow::Cow;
use std::ffi::{c_char, c_int, c_long, c_short, c_uint, c_ulong, c_ushort};
use std::fmt;

/// Menu entry: a type and how to read and print it
pub struct TypeDescriptor {
    pub c_type: CType,
    reader: fn(&[u8]) -> Option<Value>,
    printer: fn(&Value) -> String,
}

impl TypeDescriptor {
    pub fn name(&self) -> &'static str {
        self.c_type.name()
    }

    /// Parse a line of input as this type, or `None` if nothing usable was typed
    ///
    /// The line is taken as raw bytes so character types see exactly what was typed.
    pub fn try_read(&self, line: &[u8]) -> Option<Value> {
        (self.reader)(line)
    }

    /// Parse a line of input, falling back to zero on malformed input
    pub fn read(&self, line: &[u8]) -> Value {
        self.try_read(line).unwrap_or_else(|| {
            log::debug!("no {} in {:?}, using zero", self.name(), text(line).trim_end());
            self.c_type.zero()
        })
    }

    /// Render the bit pattern of a value read by this descriptor
    pub fn print(&self, value: &Value) -> String {
        (self.printer)(value)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("c_type", &self.c_type)
            .finish_non_exhaustive()
    }
}

const fn entry(c_type: CType, reader: fn(&[u8]) -> Option<Value>) -> TypeDescriptor {
    TypeDescriptor {
        c_type,
        reader,
        printer: printer::format_value,
    }
}

/// All supported types, in menu order
pub static REGISTRY: [TypeDescriptor; 10] = [
    entry(CType::Int, read_int),
    entry(CType::Long, read_long),
    entry(CType::Short, read_short),
    entry(CType::Char, read_char),
    entry(CType::Float, read_float),
    entry(CType::Double, read_double),
    entry(CType::UInt, read_uint),
    entry(CType::ULong, read_ulong),
    entry(CType::UShort, read_ushort),
    entry(CType::UChar, read_uchar),
];

/// Resolve a 1-based menu index
pub fn lookup(index: i32) -> Option<&'static TypeDescriptor> {
    let index = usize::try_from(index).ok()?.checked_sub(1)?;
    REGISTRY.get(index)
}

/// Number of menu entries
pub fn len() -> usize {
    REGISTRY.len()
}

/// Numeric readers work on text; bytes that are not UTF-8 cannot start a number
fn text(line: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(line)
}

// The bounds all fit in i128/u128, and the saturated results fit the target
// type, so the narrowing casts below are lossless.

fn read_int(line: &[u8]) -> Option<Value> {
    input::read_signed(&text(line), c_int::MIN.into(), c_int::MAX.into())
        .map(|n| Value::Int(n as c_int))
}

fn read_long(line: &[u8]) -> Option<Value> {
    input::read_signed(&text(line), c_long::MIN.into(), c_long::MAX.into())
        .map(|n| Value::Long(n as c_long))
}

fn read_short(line: &[u8]) -> Option<Value> {
    input::read_signed(&text(line), c_short::MIN.into(), c_short::MAX.into())
        .map(|n| Value::Short(n as c_short))
}

fn read_char(line: &[u8]) -> Option<Value> {
    input::read_byte(line).map(|b| Value::Char(b as c_char))
}

fn read_float(line: &[u8]) -> Option<Value> {
    input::read_float::<f32>(&text(line)).map(Value::Float)
}

fn read_double(line: &[u8]) -> Option<Value> {
    input::read_float::<f64>(&text(line)).map(Value::Double)
}

fn read_uint(line: &[u8]) -> Option<Value> {
    input::read_unsigned(&text(line), c_uint::MAX.into())
        .map(|n| Value::UInt(n as c_uint))
}

fn read_ulong(line: &[u8]) -> Option<Value> {
    input::read_unsigned(&text(line), c_ulong::MAX.into())
        .map(|n| Value::ULong(n as c_ulong))
}

fn read_ushort(line: &[u8]) -> Option<Value> {
    input::read_unsigned(&text(line), c_ushort::MAX.into())
        .map(|n| Value::UShort(n as c_ushort))
}

fn read_uchar(line: &[u8]) -> Option<Value> {
    input::read_byte(line).map(Value::UChar)
}
