//! Rowan-based error-tolerant parser for JAR manifests
//!
//! This module provides a lossless parser using:
//! - **logos** for the per-mode token scanners
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (LexerState + logos) → Tokens with SyntaxKind
//!     ↓
//! Parser + HeaderGrammars → ParseEvent stream
//!     ↓
//! TreeSink → GreenNode tree (immutable, cheap to clone) + SyntaxErrors
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//! ```
//!
//! ## Incremental Relexing
//!
//! Every token records the lexer state it was scanned in. A host that keeps
//! `(offset, state)` pairs can restart the lexer at the first token touched
//! by an edit instead of rescanning the document (see [`ParseOptions`]).

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
pub mod grammar;
mod event;
mod lexer;
mod options;
mod sink;
mod syntax_kind;

pub use ast::*;
pub use errors::{ErrorCode, InputError, SyntaxError};
pub use event::{Marker, ParseEvent};
pub use grammar::{HeaderGrammar, HeaderGrammarRegistry, HeaderParserRepository, standard_repository};
pub use lexer::{Lexer, LexerState, Token, scan, tokenize};
pub use options::ParseOptions;
pub use parser::{
    HEADER_END_TOKENS, Parse, Parser, TokenSource, build_tree, parse, parse_events, parse_manifest,
    parse_with_options,
};
pub use sink::{RowanSink, TreeSink, replay};
pub use syntax_kind::{ManifestLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
