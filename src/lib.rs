//! # Introduction
//!
//! showbits asks for one of the C numeric types, reads a value of that type
//! and prints the value's raw storage as bits, most-significant byte first,
//! whatever the byte order of the host.
//!
//! ## Pipeline
//!
//! ```text
//! Menu → Selection → Registry → Reader → Value → Raw bytes → Bit string
//! ```
//!
//! 1. [`session`] — the menu loop and its state machine, generic over any
//!    [`std::io::BufRead`] input and [`std::io::Write`] output.
//! 2. [`registry`] — the fixed table of ten types with their readers, plus the
//!    lenient stream-style parsers in [`registry::input`].
//! 3. [`memory`] — the tagged [`memory::value::Value`], type sizes and the host
//!    [`memory::Endianness`].
//! 4. [`printer`] — renders raw bytes as grouped bits.
//! 5. [`ui`] — optional terminal colouring of the bit string.
//!
//! ## Supported types
//!
//! `int`, `long`, `short`, `char`, `float`, `double` and the unsigned forms of
//! `int`, `long`, `short` and `char`, with the host C ABI sizes.

pub mod memory;
pub mod printer;
pub mod registry;
pub mod session;
pub mod ui;
