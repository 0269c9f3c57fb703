//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in a manifest tree.
//! Tokens come straight from the lexer; nodes are opened and closed by the
//! parser and the header grammars.

/// All syntax kinds (tokens and nodes) of the manifest format
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // STRUCTURAL TOKENS
    // =========================================================================
    HEADER_NAME = 0,    // Manifest-Version
    COLON,              // :
    SIGNIFICANT_SPACE,  // the space after ':' or at the start of a continuation line
    NEWLINE,            // \n ending a header line
    SECTION_END,        // \n on an otherwise empty line
    HEADER_VALUE_PART,  // run of value text

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    COMMA,              // ,
    SEMICOLON,          // ;
    EQUALS,             // =
    L_PAREN,            // (
    R_PAREN,            // )
    L_BRACKET,          // [
    R_BRACKET,          // ]
    QUOTE,              // "

    // =========================================================================
    // NODES
    // =========================================================================
    MANIFEST_FILE,
    SECTION,
    HEADER,
    HEADER_VALUE,

    // Clause grammar (OSGi-style lists)
    CLAUSE,
    VALUE_PART,
    ATTRIBUTE,
    DIRECTIVE,

    // Class reference grammar
    CLASS_REFERENCE,

    // Special
    ERROR,
    TOMBSTONE, // abandoned marker, skipped when the tree is built

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a single-character punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::COMMA as u16) && (self as u16) <= (Self::QUOTE as u16)
    }

    /// Check if this kind is produced by the lexer
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::QUOTE as u16)
    }

    /// Map a punctuation character to its token kind
    pub fn from_punct(c: char) -> Option<Self> {
        let kind = match c {
            ':' => Self::COLON,
            ',' => Self::COMMA,
            ';' => Self::SEMICOLON,
            '=' => Self::EQUALS,
            '(' => Self::L_PAREN,
            ')' => Self::R_PAREN,
            '[' => Self::L_BRACKET,
            ']' => Self::R_BRACKET,
            '"' => Self::QUOTE,
            _ => return None,
        };
        Some(kind)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ManifestLanguage {}

impl rowan::Language for ManifestLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<ManifestLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ManifestLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ManifestLanguage>;
