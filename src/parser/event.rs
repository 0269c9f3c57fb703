//! Parse events and markers
//!
//! The parser never builds a tree itself. It records a flat stream of
//! events which a [`TreeSink`](super::sink::TreeSink) replays into whatever
//! tree the host wants. Markers are positions in that stream: a node's kind
//! is only decided when its marker is completed, which lets a grammar open a
//! node before it knows what it is looking at.

use rowan::{TextRange, TextSize};

use super::errors::{ErrorCode, SyntaxError};
use super::parser::Parser;
use super::syntax_kind::SyntaxKind;

/// One step of a parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    /// Start a node. `TOMBSTONE` marks an abandoned node and is skipped.
    Open { kind: SyntaxKind },
    /// Finish the innermost open node
    Close,
    /// Attach the next token to the innermost open node
    Token { kind: SyntaxKind, range: TextRange },
    /// Report an error; never changes the tree shape
    Error(SyntaxError),
}

/// An open node whose kind is not decided yet
#[must_use]
#[derive(Debug)]
pub struct Marker {
    pos: usize,
    start: TextSize,
}

impl Marker {
    pub(super) fn new(pos: usize, start: TextSize) -> Self {
        Self { pos, start }
    }

    /// Close the node as `kind`
    pub fn complete(self, p: &mut Parser<'_, '_>, kind: SyntaxKind) {
        if let Some(ParseEvent::Open { kind: slot }) = p.events.get_mut(self.pos) {
            *slot = kind;
        }
        p.events.push(ParseEvent::Close);
    }

    /// Close the node as `ERROR` and report `code` over everything it holds
    pub fn error(self, p: &mut Parser<'_, '_>, code: ErrorCode) {
        let range = TextRange::new(self.start, self.start.max(p.last_end()));
        self.complete(p, SyntaxKind::ERROR);
        tracing::trace!(?range, %code, "recovered malformed span");
        p.events.push(ParseEvent::Error(SyntaxError::from_code(code, range)));
    }

    /// Drop the node, keeping whatever was parsed inside it
    pub fn abandon(self, p: &mut Parser<'_, '_>) {
        if self.pos + 1 == p.events.len() {
            p.events.pop();
        } else if let Some(ParseEvent::Open { kind }) = p.events.get_mut(self.pos) {
            *kind = SyntaxKind::TOMBSTONE;
        }
    }

    /// Offset where the node starts
    pub fn start(&self) -> TextSize {
        self.start
    }
}
