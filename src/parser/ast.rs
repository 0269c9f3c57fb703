//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! Value accessors return *logical* text: a continuation line's newline and
//! leading space are dropped, so `"a.jar\n b.jar"` reads as `"a.jarb.jar"`.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Logical text of a node: newlines and continuation spaces removed
fn unwrapped_text(node: &SyntaxNode) -> String {
    node.descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| !is_line_break(token))
        .map(|token| token.text().to_string())
        .collect()
}

fn is_line_break(token: &SyntaxToken) -> bool {
    match token.kind() {
        SyntaxKind::NEWLINE => true,
        SyntaxKind::SIGNIFICANT_SPACE => token
            .prev_token()
            .is_some_and(|prev| prev.kind() == SyntaxKind::NEWLINE),
        _ => false,
    }
}

/// Split a node's value parts around the first `separator` token
fn parts_around(node: &SyntaxNode, separator: SyntaxKind) -> (Option<ValuePart>, Option<ValuePart>) {
    let mut before = None;
    let mut after = None;
    let mut seen = false;
    for element in node.children_with_tokens() {
        match element {
            rowan::NodeOrToken::Token(token) if token.kind() == separator => seen = true,
            rowan::NodeOrToken::Node(child) => {
                if let Some(part) = ValuePart::cast(child) {
                    let slot = if seen { &mut after } else { &mut before };
                    if slot.is_none() {
                        *slot = Some(part);
                    }
                }
            }
            _ => {}
        }
    }
    (before, after)
}

// ============================================================================
// Root
// ============================================================================

ast_node!(ManifestFile, MANIFEST_FILE);

impl ManifestFile {
    pub(crate) fn from_root(node: SyntaxNode) -> Self {
        Self(node)
    }

    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.0.children().filter_map(Section::cast)
    }

    /// Headers of every section, in document order
    pub fn headers(&self) -> impl Iterator<Item = Header> + '_ {
        self.sections()
            .flat_map(|section| section.syntax().children().filter_map(Header::cast))
    }

    /// First header named `name` (case-insensitive) in any section
    pub fn header(&self, name: &str) -> Option<Header> {
        self.headers().find(|header| header.is_named(name))
    }

    /// The main section, if the manifest has any content
    pub fn main_section(&self) -> Option<Section> {
        self.sections().next()
    }
}

// ============================================================================
// Sections and headers
// ============================================================================

ast_node!(Section, SECTION);

impl Section {
    pub fn headers(&self) -> impl Iterator<Item = Header> + '_ {
        self.0.children().filter_map(Header::cast)
    }

    /// First header named `name` (case-insensitive) in this section
    pub fn header(&self, name: &str) -> Option<Header> {
        self.headers().find(|header| header.is_named(name))
    }

    /// The `Name` header's value, which identifies a per-entry section
    pub fn name(&self) -> Option<String> {
        self.header("Name")?.value().map(|value| value.unwrapped_text())
    }

    /// Whether a blank line closed this section
    pub fn is_terminated(&self) -> bool {
        self.0
            .children_with_tokens()
            .any(|element| element.kind() == SyntaxKind::SECTION_END)
    }
}

ast_node!(Header, HEADER);

impl Header {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .find(|token| token.kind() == SyntaxKind::HEADER_NAME)
    }

    pub fn name(&self) -> Option<String> {
        self.name_token().map(|token| token.text().to_string())
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name_token()
            .is_some_and(|token| token.text().eq_ignore_ascii_case(name))
    }

    pub fn has_colon(&self) -> bool {
        self.0
            .children_with_tokens()
            .any(|element| element.kind() == SyntaxKind::COLON)
    }

    pub fn value(&self) -> Option<HeaderValue> {
        self.0.children().find_map(HeaderValue::cast)
    }
}

ast_node!(HeaderValue, HEADER_VALUE);

impl HeaderValue {
    /// The value with continuation lines joined
    pub fn unwrapped_text(&self) -> String {
        unwrapped_text(&self.0)
    }

    /// Clauses, when the header was parsed by the clause grammar
    pub fn clauses(&self) -> impl Iterator<Item = Clause> + '_ {
        self.0.children().filter_map(Clause::cast)
    }

    /// Class reference, when the header was parsed by the class reference grammar
    pub fn class_reference(&self) -> Option<ClassReference> {
        self.0.children().find_map(ClassReference::cast)
    }
}

// ============================================================================
// Clause grammar nodes
// ============================================================================

ast_node!(Clause, CLAUSE);

impl Clause {
    /// Plain elements (package names, paths, ...)
    pub fn parts(&self) -> impl Iterator<Item = ValuePart> + '_ {
        self.0.children().filter_map(ValuePart::cast)
    }

    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.0.children().filter_map(Attribute::cast)
    }

    pub fn directives(&self) -> impl Iterator<Item = Directive> + '_ {
        self.0.children().filter_map(Directive::cast)
    }

    pub fn attribute(&self, name: &str) -> Option<Attribute> {
        self.attributes()
            .find(|attribute| attribute.name().is_some_and(|n| n == name))
    }

    pub fn directive(&self, name: &str) -> Option<Directive> {
        self.directives()
            .find(|directive| directive.name().is_some_and(|n| n == name))
    }
}

ast_node!(ValuePart, VALUE_PART);

impl ValuePart {
    /// Logical text without surrounding blanks
    pub fn text(&self) -> String {
        unwrapped_text(&self.0).trim().to_string()
    }

    /// Text with one pair of surrounding quotes removed
    pub fn unquoted(&self) -> String {
        let text = self.text();
        match text.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
            Some(inner) => inner.to_string(),
            None => text,
        }
    }
}

ast_node!(Attribute, ATTRIBUTE);

impl Attribute {
    pub fn name(&self) -> Option<String> {
        parts_around(&self.0, SyntaxKind::EQUALS).0.map(|part| part.text())
    }

    pub fn value(&self) -> Option<String> {
        parts_around(&self.0, SyntaxKind::EQUALS).1.map(|part| part.unquoted())
    }
}

ast_node!(Directive, DIRECTIVE);

impl Directive {
    pub fn name(&self) -> Option<String> {
        parts_around(&self.0, SyntaxKind::COLON).0.map(|part| part.text())
    }

    pub fn value(&self) -> Option<String> {
        parts_around(&self.0, SyntaxKind::COLON).1.map(|part| part.unquoted())
    }
}

// ============================================================================
// Class reference grammar nodes
// ============================================================================

ast_node!(ClassReference, CLASS_REFERENCE);

impl ClassReference {
    /// The referenced class name, skipping tokens flagged as errors
    pub fn name(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .filter(|token| token.kind() == SyntaxKind::HEADER_VALUE_PART)
            .map(|token| token.text().trim().to_string())
            .collect()
    }
}
