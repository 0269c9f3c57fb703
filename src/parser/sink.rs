//! Tree sinks
//!
//! A [`TreeSink`] is the node-builder protocol the parser's event stream is
//! replayed into. [`RowanSink`] builds the crate's lossless green tree; hosts
//! with their own tree type implement the trait themselves.

use rowan::{GreenNodeBuilder, TextSize};

use super::errors::SyntaxError;
use super::event::ParseEvent;
use super::parser::Parse;
use super::syntax_kind::SyntaxKind;

/// Receiver of replayed parse events
pub trait TreeSink {
    fn start_node(&mut self, kind: SyntaxKind);
    fn token(&mut self, kind: SyntaxKind, text: &str);
    fn finish_node(&mut self);
    fn error(&mut self, error: SyntaxError);
}

/// Replay `events` into `sink`, slicing token text out of `text`
pub fn replay(text: &str, events: Vec<ParseEvent>, sink: &mut dyn TreeSink) {
    for event in events {
        match event {
            ParseEvent::Open { kind: SyntaxKind::TOMBSTONE } => {}
            ParseEvent::Open { kind } => sink.start_node(kind),
            ParseEvent::Close => sink.finish_node(),
            ParseEvent::Token { kind, range } => {
                let token_text = text.get(usize::from(range.start())..usize::from(range.end())).unwrap_or("");
                sink.token(kind, token_text);
            }
            ParseEvent::Error(error) => sink.error(error),
        }
    }
}

/// Builds a rowan green tree and collects errors
#[derive(Default)]
pub struct RowanSink {
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl RowanSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self, offset: TextSize) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
            offset,
        }
    }
}

impl TreeSink for RowanSink {
    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn token(&mut self, kind: SyntaxKind, text: &str) {
        self.builder.token(kind.into(), text);
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn error(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }
}
