use crate::parser::errors::ErrorCode;
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

use super::HeaderGrammar;

/// Parses a single class name (`Main-Class`, `Premain-Class`, ...)
///
/// Punctuation cannot appear in a class name; each such token is wrapped in
/// its own error node so the rest of the name is still usable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassReferenceGrammar;

impl HeaderGrammar for ClassReferenceGrammar {
    fn parse(&self, p: &mut Parser<'_, '_>) {
        let value = p.start();
        let reference = p.start();
        let mut has_name = false;

        while !p.at_header_end() {
            match p.current_kind() {
                Some(SyntaxKind::NEWLINE | SyntaxKind::SIGNIFICANT_SPACE) => p.bump(),
                Some(SyntaxKind::HEADER_VALUE_PART) => {
                    has_name |= !p.current_text().trim().is_empty();
                    p.bump();
                }
                _ => {
                    let m = p.start();
                    p.bump();
                    m.error(p, ErrorCode::UnexpectedToken);
                }
            }
        }

        if !has_name {
            p.error(ErrorCode::ValueExpected);
        }
        reference.complete(p, SyntaxKind::CLASS_REFERENCE);
        value.complete(p, SyntaxKind::HEADER_VALUE);
    }
}
