//! Syntax and input error types
//!
//! Syntax errors are annotations on the tree and never stop a parse.
//! Input errors reject a malformed request (bad range, bad state code)
//! before any scanning happens.

use rowan::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorCode;

/// A syntax error attached to a span of the manifest
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location (byte offsets into the parsed buffer)
    pub range: TextRange,
    /// Categorized error code
    pub code: ErrorCode,
}

impl SyntaxError {
    /// Create a new syntax error
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
        }
    }

    /// Create an error carrying the code's default message
    pub fn from_code(code: ErrorCode, range: TextRange) -> Self {
        Self::new(code.default_message(), range, code)
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(code: ErrorCode, offset: TextSize) -> Self {
        Self::from_code(code, TextRange::empty(offset))
    }

    /// The stable message key of this error
    pub fn message_key(&self) -> &'static str {
        self.code.as_str()
    }
}

/// Rejected lexer or parser input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The requested range extends past the end of the buffer.
    #[error("range {range:?} is out of bounds for a buffer of {len:?} bytes")]
    OutOfBounds { range: TextRange, len: TextSize },

    /// An offset falls inside a multi-byte character.
    #[error("offset {0:?} is not on a char boundary")]
    NotCharBoundary(TextSize),

    /// A persisted lexer state code is unknown.
    #[error("unknown lexer state code {0}")]
    InvalidLexerState(u8),
}
