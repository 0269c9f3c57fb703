//! Parser error handling module
//!
//! - Categorized error codes with stable message keys
//! - Syntax errors as span annotations (never fatal)
//! - Input errors for malformed ranges and state codes

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{InputError, SyntaxError};
