//! Parse options

use super::lexer::LexerState;
use rowan::TextRange;

/// Options for [`parse_with_options`](super::parse_with_options)
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Byte range of the buffer to parse (`None` parses everything)
    pub range: Option<TextRange>,
    /// Lexer state at the start of the range, as saved by an earlier lex
    pub initial_state: LexerState,
}

impl ParseOptions {
    /// Options for resuming at `range` with a saved lexer state
    pub fn resume(range: TextRange, initial_state: LexerState) -> Self {
        Self {
            range: Some(range),
            initial_state,
        }
    }
}
