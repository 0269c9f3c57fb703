//! Header value grammars
//!
//! The structural parser only knows sections and headers. What follows a
//! header's `: ` is parsed by a [`HeaderGrammar`] chosen by header name:
//! - `standard` - opaque value text (the fallback for unknown headers)
//! - `clause` - OSGi-style clause lists with attributes and directives
//! - `class_reference` - a single fully qualified class name
//!
//! Grammars are found through a [`HeaderGrammarRegistry`] that the host
//! passes to the parser. [`HeaderParserRepository`] is the registry this
//! crate ships.

mod class_reference;
mod clause;
mod repository;
mod standard;

pub use class_reference::ClassReferenceGrammar;
pub use clause::ClauseHeaderGrammar;
pub use repository::{HeaderParserRepository, standard_repository};
pub use standard::StandardHeaderGrammar;

use super::parser::Parser;

/// A value grammar for one or more headers
///
/// `parse` is called right after the header's separator space and must
/// consume tokens up to (not including) the next `HEADER_NAME` or
/// `SECTION_END`. Anything it leaves behind would be reported by the section
/// parser as a value outside a header.
pub trait HeaderGrammar: Send + Sync {
    fn parse(&self, p: &mut Parser<'_, '_>);
}

/// Lookup of value grammars by header name
pub trait HeaderGrammarRegistry {
    fn lookup(&self, name: &str) -> Option<&dyn HeaderGrammar>;
}
