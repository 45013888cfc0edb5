//! Error types for the interactive session
//!
//! This module defines [`SessionError`]. Mistyped input is never an error: bad
//! selections and values are answered with a message and the loop carries on.
//! Only a failure of the input or output stream itself ends a session early.

use std::io;
use thiserror::Error;

/// Failures that stop a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// The input stream could not be read
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    /// The output stream could not be written or flushed
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl SessionError {
    /// The underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        match self {
            SessionError::Read(e) => e,
            SessionError::Write(e) => e,
        }
    }
}
