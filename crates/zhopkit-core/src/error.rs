//! Error handling for ZHopKit
//!
//! Provides the error types shared across the workspace: line-level G-Code
//! problems, and the I/O errors of reading and writing G-code files.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// G-Code error type
///
/// Represents problems found while tokenizing a single G-Code line.
/// These are never fatal to a processing run; the offending line is
/// passed through untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GcodeError {
    /// A parameter literal could not be converted to a number
    #[error("Invalid parameter '{param}' at line {line_number}: '{literal}' is not a number")]
    InvalidNumber {
        /// The line number (1-based) where the literal was found.
        line_number: usize,
        /// The parameter letter.
        param: char,
        /// The literal text that failed to parse.
        literal: String,
    },
}

impl GcodeError {
    /// Attach a line number to an error produced without one
    pub fn at_line(self, line: usize) -> Self {
        match self {
            GcodeError::InvalidNumber { param, literal, .. } => GcodeError::InvalidNumber {
                line_number: line,
                param,
                literal,
            },
        }
    }
}

/// Main error type for ZHopKit
///
/// A unified error type that can represent any error from the library layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
