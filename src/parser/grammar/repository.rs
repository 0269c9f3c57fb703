//! Registry of header value grammars
//!
//! Header names are matched ASCII case-insensitively, as JAR header names
//! are case-insensitive.

use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::{ClassReferenceGrammar, ClauseHeaderGrammar, HeaderGrammar, HeaderGrammarRegistry};

/// OSGi headers whose values are clause lists
pub const CLAUSE_HEADERS: &[&str] = &[
    "Bundle-ActivationPolicy",
    "Bundle-ClassPath",
    "Bundle-NativeCode",
    "Bundle-RequiredExecutionEnvironment",
    "Bundle-SymbolicName",
    "DynamicImport-Package",
    "Export-Package",
    "Fragment-Host",
    "Import-Package",
    "Provide-Capability",
    "Require-Bundle",
    "Require-Capability",
];

/// Headers whose value is a single class name
pub const CLASS_REFERENCE_HEADERS: &[&str] = &[
    "Agent-Class",
    "Bundle-Activator",
    "Launcher-Agent-Class",
    "Main-Class",
    "Premain-Class",
];

static STANDARD: Lazy<HeaderParserRepository> = Lazy::new(HeaderParserRepository::standard);

/// The shared repository with the standard grammars registered
pub fn standard_repository() -> &'static HeaderParserRepository {
    &STANDARD
}

/// Header grammars keyed by lowercased header name
#[derive(Default)]
pub struct HeaderParserRepository {
    grammars: FxHashMap<SmolStr, Box<dyn HeaderGrammar>>,
}

impl HeaderParserRepository {
    /// An empty repository; every header gets the standard grammar
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository with the clause and class reference headers registered
    pub fn standard() -> Self {
        let mut repository = Self::new();
        for name in CLAUSE_HEADERS {
            repository.register(name, ClauseHeaderGrammar);
        }
        for name in CLASS_REFERENCE_HEADERS {
            repository.register(name, ClassReferenceGrammar);
        }
        repository
    }

    /// Register `grammar` for `name`, returning the grammar it replaces
    pub fn register(
        &mut self,
        name: &str,
        grammar: impl HeaderGrammar + 'static,
    ) -> Option<Box<dyn HeaderGrammar>> {
        self.grammars.insert(key(name), Box::new(grammar))
    }

    /// Builder form of [`register`](Self::register)
    pub fn with(mut self, name: &str, grammar: impl HeaderGrammar + 'static) -> Self {
        let _ = self.register(name, grammar);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.grammars.contains_key(key(name).as_str())
    }

    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }
}

impl HeaderGrammarRegistry for HeaderParserRepository {
    fn lookup(&self, name: &str) -> Option<&dyn HeaderGrammar> {
        self.grammars.get(key(name).as_str()).map(|grammar| grammar.as_ref())
    }
}

impl fmt::Debug for HeaderParserRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.grammars.keys().collect();
        names.sort();
        f.debug_struct("HeaderParserRepository").field("headers", &names).finish()
    }
}

fn key(name: &str) -> SmolStr {
    SmolStr::new(name.to_ascii_lowercase())
}
