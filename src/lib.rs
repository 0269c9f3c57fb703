//! # manifest-syntax
//!
//! Error-tolerant lexer and parser for JAR manifest files.
//!
//! Manifests are line oriented: `Name: value` headers, values continued on
//! lines that start with a single space, and sections separated by blank
//! lines. Parsing never fails on content; malformed lines become error nodes
//! and the rest of the document still parses.
//!
//! ```
//! let parse = manifest::parse_manifest("Manifest-Version: 1.0\nMain-Class: com.example.App\n");
//! assert!(parse.ok());
//!
//! let main_class = parse.tree().header("Main-Class").unwrap();
//! let reference = main_class.value().unwrap().class_reference().unwrap();
//! assert_eq!(reference.name(), "com.example.App");
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! parser::ast      → typed wrappers (ManifestFile, Section, Header, Clause, ...)
//!   ↓
//! parser::sink     → event replay into rowan (or any TreeSink)
//!   ↓
//! parser::grammar  → per-header value grammars and their registry
//!   ↓
//! parser::parser   → sections and headers, error recovery
//!   ↓
//! parser::lexer    → restartable, state-carrying scanner
//! ```

/// Parser: lexer, event-based parser, header grammars, typed AST
pub mod parser;

pub use parser::{
    ErrorCode, HeaderGrammar, HeaderGrammarRegistry, HeaderParserRepository, InputError, LexerState,
    ManifestFile, Parse, ParseOptions, SyntaxError, SyntaxKind, TextRange, TextSize, parse,
    parse_manifest, parse_with_options, standard_repository,
};
