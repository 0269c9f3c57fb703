use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

use super::HeaderGrammar;

/// Treats the whole value, continuation lines included, as opaque text
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardHeaderGrammar;

impl HeaderGrammar for StandardHeaderGrammar {
    fn parse(&self, p: &mut Parser<'_, '_>) {
        let value = p.start();
        p.consume_header_value();
        value.complete(p, SyntaxKind::HEADER_VALUE);
    }
}
