//! Error code definitions for parser diagnostics
//!
//! Every code maps to a stable message key (`manifest.*`) so hosts can
//! localize or filter diagnostics without matching on message text.
//! - Structural errors come from the section/header parser
//! - Value errors come from header-specific value grammars

use std::fmt;

/// Error codes for parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Structural errors (section/header level)
    // =========================================================================
    /// Header name not followed by `:`
    MissingColon,
    /// `:` not followed by the mandatory space
    MissingSeparatorSpace,
    /// Value tokens where a header name or section end was expected
    UnexpectedValueOutsideHeader,

    // =========================================================================
    // Value errors (header grammars)
    // =========================================================================
    /// Empty clause element or attribute value
    ValueExpected,
    /// Directive `:` not followed by `=`
    EqualsExpected,
    /// Quoted string runs into the end of the header
    UnclosedQuote,
    /// Token that the value grammar has no place for
    UnexpectedToken,
}

impl ErrorCode {
    /// Get the message key of the error code (e.g., "manifest.colon.expected")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingColon => "manifest.colon.expected",
            Self::MissingSeparatorSpace => "manifest.whitespace.expected",
            Self::UnexpectedValueOutsideHeader => "manifest.header.expected",
            Self::ValueExpected => "manifest.value.expected",
            Self::EqualsExpected => "manifest.equals.expected",
            Self::UnclosedQuote => "manifest.quote.expected",
            Self::UnexpectedToken => "manifest.unexpected.token",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        if self.is_structural() {
            "structural error"
        } else {
            "value error"
        }
    }

    /// Get the default (English) message for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::MissingColon => "':' expected",
            Self::MissingSeparatorSpace => "whitespace expected after ':'",
            Self::UnexpectedValueOutsideHeader => "header expected",
            Self::ValueExpected => "value expected",
            Self::EqualsExpected => "'=' expected",
            Self::UnclosedQuote => "closing '\"' expected",
            Self::UnexpectedToken => "unexpected token",
        }
    }

    /// Check if this error comes from the section/header structure
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MissingColon | Self::MissingSeparatorSpace | Self::UnexpectedValueOutsideHeader
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
