//! The interactive read-eval-print loop
//!
//! A [`Session`] walks a small state machine over one input stream and one
//! output stream:
//!
//! ```text
//! ShowMenu → AwaitSelection ─┬─> AwaitValue → ShowBits → AwaitContinue ─┬─> AwaitSelection
//!                            │                                          └─> Terminated
//!                            └─> Terminated
//! ```
//!
//! # Input Handling
//!
//! Every read consumes exactly one line. Mistakes are recovered in place:
//!
//! - A selection with no leading integer: `Invalid input, please type again.`
//! - A selection outside the menu: `Invalid value, please type again.`
//! - A malformed value: the type's zero value is used
//! - An answer other than `y` or `n`: treated as `y`, with a different header
//!
//! End of input at any prompt ends the session the same way as quitting.

pub mod errors;

use crate::memory::value::Value;
use crate::registry::{self, input, TypeDescriptor, REGISTRY};
use crate::ui::Palette;
use errors::SessionError;
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// Menu entry that quits
pub const QUIT_SENTINEL: i32 = -1;

pub const MENU_HEADER: &str = "Choose a type(or -1 to quit):";
pub const VALUE_PROMPT: &str = "Then type a value: ";
pub const BITS_HEADER: &str = "The binary representation is:";
pub const CONTINUE_PROMPT: &str = "Continue(or quit)? (y/n)";
pub const CHOOSE_AGAIN: &str = "Choose a type:";
pub const INVALID_INPUT: &str = "Invalid input, please type again.";
pub const INVALID_VALUE: &str = "Invalid value, please type again.";
pub const INVALID_CHOICE: &str = "Invalid choice, continue to choose a type:";

/// Position in the loop
#[derive(Debug, Clone, Copy)]
pub enum State {
    ShowMenu,
    AwaitSelection,
    AwaitValue(&'static TypeDescriptor),
    ShowBits(&'static TypeDescriptor, Value),
    AwaitContinue,
    Terminated,
}

impl State {
    pub fn is_terminated(&self) -> bool {
        matches!(self, State::Terminated)
    }
}

/// Outcome of parsing a menu selection
#[derive(Debug, Clone, Copy)]
pub enum Selection {
    /// No integer at the start of the line
    Malformed,
    Quit,
    OutOfRange(i32),
    Type(&'static TypeDescriptor),
}

impl Selection {
    pub fn parse(line: &str) -> Self {
        match input::read_exact_i32(line) {
            None => Selection::Malformed,
            Some(QUIT_SENTINEL) => Selection::Quit,
            Some(index) => match registry::lookup(index) {
                Some(descriptor) => Selection::Type(descriptor),
                None => Selection::OutOfRange(index),
            },
        }
    }
}

/// One run of the menu loop over an input and an output stream
pub struct Session<R, W> {
    input: R,
    output: W,
    palette: Palette,
    state: State,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session {
            input,
            output,
            palette: Palette::plain(),
            state: State::ShowMenu,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> Result<(), SessionError> {
        while !self.state.is_terminated() {
            self.step()?;
        }
        self.output.flush().map_err(SessionError::Write)
    }

    /// Perform one transition
    pub fn step(&mut self) -> Result<State, SessionError> {
        let next = match self.state {
            State::ShowMenu => {
                self.show_menu()?;
                State::AwaitSelection
            }
            State::AwaitSelection => match self.read_line()? {
                Some(line) => self.select(&text(&line))?,
                None => State::Terminated,
            },
            State::AwaitValue(descriptor) => {
                self.write_line(&format!(
                    "You chose type \"{}\". {}",
                    descriptor.name(),
                    VALUE_PROMPT
                ))?;
                match self.read_line()? {
                    Some(line) => State::ShowBits(descriptor, descriptor.read(&line)),
                    None => State::Terminated,
                }
            }
            State::ShowBits(descriptor, value) => {
                let bits = self.palette.paint_bits(&descriptor.print(&value));
                self.write_line(BITS_HEADER)?;
                self.write_line(&bits)?;
                self.write_line("")?;
                State::AwaitContinue
            }
            State::AwaitContinue => {
                self.write_line(CONTINUE_PROMPT)?;
                match self.read_line()? {
                    Some(line) => self.answer(&text(&line))?,
                    None => State::Terminated,
                }
            }
            State::Terminated => State::Terminated,
        };

        log::trace!("{:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(next)
    }

    /// Consume the session, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    fn show_menu(&mut self) -> Result<(), SessionError> {
        self.write_line(MENU_HEADER)?;
        for (i, descriptor) in REGISTRY.iter().enumerate() {
            self.write_line(&format!("({}) {}", i + 1, descriptor.name()))?;
        }
        self.write_line("")
    }

    fn select(&mut self, line: &str) -> Result<State, SessionError> {
        match Selection::parse(line) {
            Selection::Malformed => {
                log::debug!("selection {:?} is not a number", line.trim_end());
                self.write_line(INVALID_INPUT)?;
                Ok(State::AwaitSelection)
            }
            Selection::Quit => Ok(State::Terminated),
            Selection::OutOfRange(index) => {
                log::debug!("selection {} outside 1..={}", index, registry::len());
                self.write_line(INVALID_VALUE)?;
                Ok(State::AwaitSelection)
            }
            Selection::Type(descriptor) => Ok(State::AwaitValue(descriptor)),
        }
    }

    fn answer(&mut self, line: &str) -> Result<State, SessionError> {
        match input::first_char(line) {
            Some('n') => Ok(State::Terminated),
            Some('y') => {
                self.write_line(CHOOSE_AGAIN)?;
                Ok(State::AwaitSelection)
            }
            _ => {
                self.write_line(INVALID_CHOICE)?;
                Ok(State::AwaitSelection)
            }
        }
    }

    /// Read one line without its line ending, or `None` at end of input
    ///
    /// Pending output is flushed first so prompts are visible while blocked.
    /// The line stays raw bytes; value readers get it untouched.
    fn read_line(&mut self) -> Result<Option<Vec<u8>>, SessionError> {
        self.output.flush().map_err(SessionError::Write)?;

        let mut buf = Vec::new();
        let n = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(SessionError::Read)?;
        if n == 0 {
            log::debug!("end of input");
            return Ok(None);
        }

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(Some(buf))
    }

    fn write_line(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{}", text).map_err(SessionError::Write)
    }
}

/// Selections and answers are text; bytes that are not UTF-8 are replaced
fn text(line: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_selection_parse() {
        assert!(matches!(Selection::parse("abc"), Selection::Malformed));
        assert!(matches!(Selection::parse(""), Selection::Malformed));
        assert!(matches!(Selection::parse("-1"), Selection::Quit));
        assert!(matches!(Selection::parse("0"), Selection::OutOfRange(0)));
        assert!(matches!(Selection::parse("11"), Selection::OutOfRange(11)));
        assert!(matches!(Selection::parse("-5"), Selection::OutOfRange(-5)));
        assert!(matches!(Selection::parse("99999999999"), Selection::Malformed));
        match Selection::parse(" 3 trailing") {
            Selection::Type(descriptor) => assert_eq!(descriptor.name(), "short"),
            other => panic!("Expected short, got {:?}", other),
        }
    }

    #[test]
    fn test_step_through_one_round() {
        let mut s = session("1\n5\ny\n");
        assert!(matches!(s.step().unwrap(), State::AwaitSelection));
        assert!(matches!(s.step().unwrap(), State::AwaitValue(d) if d.name() == "int"));
        assert!(matches!(s.step().unwrap(), State::ShowBits(_, Value::Int(5))));
        assert!(matches!(s.step().unwrap(), State::AwaitContinue));
        assert!(matches!(s.step().unwrap(), State::AwaitSelection));
        // input exhausted
        assert!(matches!(s.step().unwrap(), State::Terminated));
        assert!(s.state().is_terminated());
    }

    #[test]
    fn test_terminated_is_absorbing() {
        let mut s = session("-1\n1\n");
        s.run().unwrap();
        let len = s.output.len();
        assert!(matches!(s.step().unwrap(), State::Terminated));
        assert_eq!(s.output.len(), len);
    }

    #[test]
    fn test_crlf_and_invalid_utf8_lines() {
        let mut input = b"4\r\n".to_vec();
        input.extend_from_slice(&[0xFF, b'\n']);
        input.extend_from_slice(b"n\r\n");
        let mut s = Session::new(Cursor::new(input), Vec::new());
        s.run().unwrap();
        let out = String::from_utf8(s.into_output()).unwrap();
        assert!(out.contains("You chose type \"char\". Then type a value: \n"));
        assert!(out.contains("The binary representation is:\n11111111\n"));
    }

    #[test]
    fn test_unsigned_char_keeps_latin1_byte() {
        let mut input = b"10\n".to_vec();
        input.extend_from_slice(&[0xE9, b'\n']);
        input.extend_from_slice(b"n\n");
        let mut s = Session::new(Cursor::new(input), Vec::new());
        s.run().unwrap();
        let out = String::from_utf8(s.into_output()).unwrap();
        assert!(out.contains("The binary representation is:\n11101001\n"));
    }

    #[test]
    fn test_non_utf8_selection_is_invalid_input() {
        let mut input = vec![0xFF, b'\n'];
        input.extend_from_slice(b"-1\n");
        let mut s = Session::new(Cursor::new(input), Vec::new());
        s.run().unwrap();
        let out = String::from_utf8(s.into_output()).unwrap();
        assert!(out.ends_with(&format!("\n{}\n", INVALID_INPUT)));
    }
}
