//! Logos-based lexer for JAR manifests
//!
//! Manifest tokenization is context sensitive: the same character means
//! different things at the start of a line, right after a header name, and
//! inside a value. The context is an explicit [`LexerState`], and one scan
//! step is the pure function [`scan`], so a host can resume lexing at any
//! token boundary given only the offset and the state recorded there.
//!
//! Within a mode the actual character classes are matched by small logos
//! tokenizers, one per mode.

use super::errors::InputError;
use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::{TextRange, TextSize};

/// Lexer mode carried from one token to the next
///
/// Persisted by hosts as an integer code (`0` = default, `1` = header body).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum LexerState {
    /// Expecting a header name or a blank line at the next line start
    #[default]
    Default = 0,
    /// Between a header name and the separator space that follows its colon
    HeaderBody = 1,
}

impl From<LexerState> for u8 {
    fn from(state: LexerState) -> Self {
        state as u8
    }
}

impl TryFrom<u8> for LexerState {
    type Error = InputError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Default),
            1 => Ok(Self::HeaderBody),
            other => Err(InputError::InvalidLexerState(other)),
        }
    }
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn len(&self) -> TextSize {
        TextSize::of(self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, self.len())
    }
}

/// Scan a single token starting at `offset`, never reading past `end`
///
/// Returns the token and the state to scan the following token in, or
/// `None` once `offset` reaches `end`. Line starts are detected by looking
/// at the byte before `offset` in the whole buffer, so scanning a sub-range
/// agrees with scanning from the beginning.
pub fn scan(
    text: &str,
    offset: TextSize,
    end: TextSize,
    state: LexerState,
) -> Option<(Token<'_>, LexerState)> {
    let start = usize::from(offset);
    let end = usize::from(end);
    if start >= end {
        return None;
    }

    let rest = text.get(start..end)?;
    let at_line_start = start == 0 || text.as_bytes().get(start - 1) == Some(&b'\n');

    let (kind, len, next_state) = if at_line_start {
        scan_line_start(rest)
    } else {
        scan_body(rest, state)
    };

    let token = Token {
        kind,
        text: rest.get(..len)?,
        offset,
    };
    Some((token, next_state))
}

fn scan_line_start(rest: &str) -> (SyntaxKind, usize, LexerState) {
    let mut lexer = LineStartToken::lexer(rest);
    let token = lexer.next();
    let len = lexer.span().len().max(first_char_len(rest));

    match token {
        Some(Ok(LineStartToken::Continuation)) => (SyntaxKind::SIGNIFICANT_SPACE, len, LexerState::Default),
        Some(Ok(LineStartToken::BlankLine)) => (SyntaxKind::SECTION_END, len, LexerState::Default),
        _ => {
            // A name cut short by a newline (or the end) leaves the colon
            // check to the parser.
            let next_state = match rest.get(len..) {
                Some(after) if after.starts_with(':') => LexerState::HeaderBody,
                _ => LexerState::Default,
            };
            (SyntaxKind::HEADER_NAME, len, next_state)
        }
    }
}

fn scan_body(rest: &str, state: LexerState) -> (SyntaxKind, usize, LexerState) {
    if state == LexerState::HeaderBody {
        match rest.as_bytes().first() {
            Some(b':') => return (SyntaxKind::COLON, 1, LexerState::HeaderBody),
            Some(b' ') => return (SyntaxKind::SIGNIFICANT_SPACE, 1, LexerState::Default),
            _ => {}
        }
    }

    let mut lexer = ValueToken::lexer(rest);
    let kind = match lexer.next() {
        Some(Ok(token)) => token.into(),
        _ => SyntaxKind::HEADER_VALUE_PART,
    };
    (kind, lexer.span().len().max(first_char_len(rest)), state)
}

fn first_char_len(rest: &str) -> usize {
    rest.chars().next().map_or(1, char::len_utf8)
}

/// Pull-based lexer over a buffer range
///
/// Holds the current token; [`Lexer::advance`] scans the next one.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    text: &'a str,
    end: TextSize,
    token: Option<Token<'a>>,
    /// State the current token was scanned in
    token_state: LexerState,
    /// State to scan the next token in
    next_state: LexerState,
}

impl<'a> Lexer<'a> {
    /// Lex the whole buffer from the default state
    pub fn new(text: &'a str) -> Self {
        let mut lexer = Self {
            text,
            end: TextSize::of(text),
            token: None,
            token_state: LexerState::Default,
            next_state: LexerState::Default,
        };
        lexer.scan_at(TextSize::new(0), LexerState::Default);
        lexer
    }

    /// Lex `range` of `text`, starting in `state`
    ///
    /// Text before `range` is only consulted to decide whether the range
    /// starts at a line start.
    pub fn start(text: &'a str, range: TextRange, state: LexerState) -> Result<Self, InputError> {
        let len = TextSize::of(text);
        if range.end() > len {
            return Err(InputError::OutOfBounds { range, len });
        }
        for offset in [range.start(), range.end()] {
            if !text.is_char_boundary(offset.into()) {
                return Err(InputError::NotCharBoundary(offset));
            }
        }

        let mut lexer = Self {
            text,
            end: range.end(),
            token: None,
            token_state: state,
            next_state: state,
        };
        lexer.scan_at(range.start(), state);
        Ok(lexer)
    }

    fn scan_at(&mut self, offset: TextSize, state: LexerState) {
        self.token_state = state;
        match scan(self.text, offset, self.end, state) {
            Some((token, next_state)) => {
                self.token = Some(token);
                self.next_state = next_state;
            }
            None => {
                self.token = None;
                self.next_state = state;
            }
        }
    }

    /// Current token, `None` at the end of the range
    pub fn current(&self) -> Option<Token<'a>> {
        self.token
    }

    /// Move to the next token
    pub fn advance(&mut self) {
        if let Some(token) = self.token {
            self.scan_at(token.range().end(), self.next_state);
        }
    }

    /// The state the current token was scanned in
    ///
    /// Restarting with `Lexer::start(text, current.offset.., state())`
    /// reproduces this token and everything after it.
    pub fn state(&self) -> LexerState {
        self.token_state
    }

    /// The full buffer this lexer reads from
    pub fn buffer(&self) -> &'a str {
        self.text
    }

    /// Exclusive end of the lexed range
    pub fn end(&self) -> TextSize {
        self.end
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.token?;
        self.advance();
        Some(token)
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Tokens recognized at the start of a line
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LineStartToken {
    #[token(" ")]
    Continuation,

    #[token("\n")]
    BlankLine,

    // The first character is always part of the name, even a ':'.
    #[regex(r"[^ \n][^:\n]*")]
    HeaderName,
}

/// Tokens recognized inside a value
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum ValueToken {
    #[token("\n")]
    Newline,

    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("=")]
    Equals,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("\"")]
    Quote,

    #[regex(r#"[^\n:;,=()\[\]"]+"#)]
    Part,
}

impl From<ValueToken> for SyntaxKind {
    fn from(token: ValueToken) -> Self {
        match token {
            ValueToken::Newline => SyntaxKind::NEWLINE,
            ValueToken::Colon => SyntaxKind::COLON,
            ValueToken::Semicolon => SyntaxKind::SEMICOLON,
            ValueToken::Comma => SyntaxKind::COMMA,
            ValueToken::Equals => SyntaxKind::EQUALS,
            ValueToken::LParen => SyntaxKind::L_PAREN,
            ValueToken::RParen => SyntaxKind::R_PAREN,
            ValueToken::LBracket => SyntaxKind::L_BRACKET,
            ValueToken::RBracket => SyntaxKind::R_BRACKET,
            ValueToken::Quote => SyntaxKind::QUOTE,
            ValueToken::Part => SyntaxKind::HEADER_VALUE_PART,
        }
    }
}
