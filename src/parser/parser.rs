//! Recursive descent parser for JAR manifests
//!
//! Pulls tokens through a [`TokenSource`] and records [`ParseEvent`]s.
//! Header values are handed to grammars looked up in a
//! [`HeaderGrammarRegistry`]; headers without a registered grammar use
//! [`StandardHeaderGrammar`]. Every error is recovered from: the parse
//! always consumes all tokens and always produces a tree.

use super::errors::{ErrorCode, InputError, SyntaxError};
use super::event::{Marker, ParseEvent};
use super::grammar::{HeaderGrammar, HeaderGrammarRegistry, StandardHeaderGrammar, standard_repository};
use super::lexer::{Lexer, Token};
use super::options::ParseOptions;
use super::sink::{RowanSink, replay};
use super::syntax_kind::SyntaxKind;
use super::{ManifestFile, SyntaxNode};
use rowan::{GreenNode, TextRange, TextSize};

/// Tokens that end a header value
pub const HEADER_END_TOKENS: &[SyntaxKind] = &[SyntaxKind::SECTION_END, SyntaxKind::HEADER_NAME];

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
    /// Buffer offset of the first parsed byte; tree offsets are relative to it
    pub offset: TextSize,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Get the typed root
    pub fn tree(&self) -> ManifestFile {
        ManifestFile::from_root(self.syntax())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Cursor over a token stream
///
/// Implemented by [`Lexer`]; hosts may supply their own (e.g. a cached
/// token buffer) as long as tokens are contiguous.
pub trait TokenSource<'a> {
    /// Current token, `None` at the end of input
    fn current(&self) -> Option<Token<'a>>;

    /// Move past the current token
    fn advance(&mut self);
}

impl<'a> TokenSource<'a> for Lexer<'a> {
    fn current(&self) -> Option<Token<'a>> {
        Lexer::current(self)
    }

    fn advance(&mut self) {
        Lexer::advance(self)
    }
}

/// Parse a manifest with the given grammar registry
pub fn parse(text: &str, registry: &dyn HeaderGrammarRegistry) -> Parse {
    let mut lexer = Lexer::new(text);
    let events = parse_events(&mut lexer, registry, TextSize::new(0));
    build_tree(text, events, TextSize::new(0))
}

/// Parse a manifest with the standard grammar registry
pub fn parse_manifest(text: &str) -> Parse {
    parse(text, standard_repository())
}

/// Parse a sub-range of `text`, starting the lexer in a saved state
pub fn parse_with_options(
    text: &str,
    registry: &dyn HeaderGrammarRegistry,
    options: &ParseOptions,
) -> Result<Parse, InputError> {
    let range = options.range.unwrap_or_else(|| TextRange::up_to(TextSize::of(text)));
    let mut lexer = Lexer::start(text, range, options.initial_state)?;
    let events = parse_events(&mut lexer, registry, range.start());
    Ok(build_tree(text, events, range.start()))
}

/// Run the manifest grammar over `source` and return the event stream
///
/// `start` is the offset of the first token, used for error spans when the
/// source is empty.
pub fn parse_events<'a>(
    source: &mut dyn TokenSource<'a>,
    registry: &dyn HeaderGrammarRegistry,
    start: TextSize,
) -> Vec<ParseEvent> {
    let mut p = Parser::new(source, start);
    parse_manifest_file(&mut p, registry);
    tracing::debug!(
        tokens = p.consumed(),
        errors = p.events.iter().filter(|e| matches!(e, ParseEvent::Error(_))).count(),
        "parsed manifest"
    );
    p.finish()
}

/// Replay an event stream into a rowan tree
pub fn build_tree(text: &str, events: Vec<ParseEvent>, offset: TextSize) -> Parse {
    let mut sink = RowanSink::new();
    replay(text, events, &mut sink);
    sink.finish(offset)
}

/// The parser state shared with header grammars
pub struct Parser<'s, 'a> {
    source: &'s mut dyn TokenSource<'a>,
    pub(super) events: Vec<ParseEvent>,
    last_end: TextSize,
    consumed: usize,
}

impl<'s, 'a> Parser<'s, 'a> {
    pub fn new(source: &'s mut dyn TokenSource<'a>, start: TextSize) -> Self {
        Self {
            source,
            events: Vec::new(),
            last_end: start,
            consumed: 0,
        }
    }

    pub fn finish(self) -> Vec<ParseEvent> {
        self.events
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    pub fn current(&self) -> Option<Token<'a>> {
        self.source.current()
    }

    pub fn current_kind(&self) -> Option<SyntaxKind> {
        self.current().map(|t| t.kind)
    }

    pub fn current_text(&self) -> &'a str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == Some(kind)
    }

    pub fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        self.current_kind().is_some_and(|k| kinds.contains(&k))
    }

    pub fn at_eof(&self) -> bool {
        self.current().is_none()
    }

    /// At the end of the current header's value
    pub fn at_header_end(&self) -> bool {
        self.at_eof() || self.at_any(HEADER_END_TOKENS)
    }

    /// Offset of the current token, or the end of the last one at EOF
    pub fn offset(&self) -> TextSize {
        self.current().map(|t| t.offset).unwrap_or(self.last_end)
    }

    /// End offset of the last consumed token
    pub fn last_end(&self) -> TextSize {
        self.last_end
    }

    /// Number of tokens consumed so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    pub fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.events.push(ParseEvent::Token {
                kind: token.kind,
                range: token.range(),
            });
            self.last_end = token.range().end();
            self.consumed += 1;
            self.source.advance();
        }
    }

    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume tokens up to the end of the current header's value
    pub fn consume_header_value(&mut self) {
        while !self.at_header_end() {
            self.bump();
        }
    }

    // =========================================================================
    // Node building and errors
    // =========================================================================

    pub fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(ParseEvent::Open {
            kind: SyntaxKind::TOMBSTONE,
        });
        Marker::new(pos, self.offset())
    }

    /// Report a zero-width error before the current token
    pub fn error(&mut self, code: ErrorCode) {
        let offset = self.offset();
        self.error_at(code, TextRange::empty(offset));
    }

    /// Report an error over `range` without wrapping it in a node
    pub fn error_at(&mut self, code: ErrorCode, range: TextRange) {
        tracing::trace!(?range, %code, "parse error");
        self.events.push(ParseEvent::Error(SyntaxError::from_code(code, range)));
    }
}

// =============================================================================
// Grammar rules
// =============================================================================

/// ManifestFile = Section*
fn parse_manifest_file(p: &mut Parser<'_, '_>, registry: &dyn HeaderGrammarRegistry) {
    let root = p.start();
    while !p.at_eof() {
        parse_section(p, registry);
    }
    root.complete(p, SyntaxKind::MANIFEST_FILE);
}

/// Section = (Header | <malformed run>)* SECTION_END?
fn parse_section(p: &mut Parser<'_, '_>, registry: &dyn HeaderGrammarRegistry) {
    let section = p.start();
    while let Some(kind) = p.current_kind() {
        match kind {
            SyntaxKind::HEADER_NAME => parse_header(p, registry),
            SyntaxKind::SECTION_END => {
                p.bump();
                break;
            }
            _ => {
                let m = p.start();
                p.consume_header_value();
                m.error(p, ErrorCode::UnexpectedValueOutsideHeader);
            }
        }
    }
    section.complete(p, SyntaxKind::SECTION);
}

/// Header = HEADER_NAME ':' SIGNIFICANT_SPACE Value
fn parse_header(p: &mut Parser<'_, '_>, registry: &dyn HeaderGrammarRegistry) {
    let header = p.start();
    let name = p.current_text();
    p.bump();

    if p.eat(SyntaxKind::COLON) {
        if !p.eat(SyntaxKind::SIGNIFICANT_SPACE) {
            p.error(ErrorCode::MissingSeparatorSpace);
        }
        let grammar: &dyn HeaderGrammar = registry.lookup(name).unwrap_or(&StandardHeaderGrammar);
        grammar.parse(p);
    } else {
        let m = p.start();
        p.consume_header_value();
        m.error(p, ErrorCode::MissingColon);
    }

    header.complete(p, SyntaxKind::HEADER);
}
