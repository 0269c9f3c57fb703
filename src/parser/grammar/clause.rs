//! Clause grammar for OSGi-style list headers
//!
//! ```text
//! Value     = Clause (',' Clause)*
//! Clause    = Element (';' Element)*
//! Element   = Part                    -> VALUE_PART
//!           | Part '=' Part           -> ATTRIBUTE
//!           | Part ':' '=' Part       -> DIRECTIVE
//! Part      = (token | Quoted)+       stops at , ; = : and the header end
//! Quoted    = '"' ... '"'
//! ```
//!
//! Punctuation inside a quoted string is plain text, so version ranges such
//! as `version="[1.0,2.0)"` stay in one part.

use rowan::TextRange;

use crate::parser::errors::ErrorCode;
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

use super::HeaderGrammar;

const ELEMENT_END: &[SyntaxKind] = &[SyntaxKind::SEMICOLON, SyntaxKind::COMMA];

const PART_END: &[SyntaxKind] = &[
    SyntaxKind::SEMICOLON,
    SyntaxKind::COMMA,
    SyntaxKind::EQUALS,
    SyntaxKind::COLON,
];

/// Parses `a;attr=v;dir:=v, b` style values into clauses
#[derive(Debug, Clone, Copy, Default)]
pub struct ClauseHeaderGrammar;

impl HeaderGrammar for ClauseHeaderGrammar {
    fn parse(&self, p: &mut Parser<'_, '_>) {
        let value = p.start();
        loop {
            parse_clause(p);
            if !p.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        value.complete(p, SyntaxKind::HEADER_VALUE);
    }
}

/// Clause = Element (';' Element)*
fn parse_clause(p: &mut Parser<'_, '_>) {
    let clause = p.start();
    loop {
        parse_element(p);

        if !p.at_header_end() && !p.at_any(ELEMENT_END) {
            let stray = p.start();
            while !p.at_header_end() && !p.at_any(ELEMENT_END) {
                p.bump();
            }
            stray.error(p, ErrorCode::UnexpectedToken);
        }

        if !p.eat(SyntaxKind::SEMICOLON) {
            break;
        }
    }
    clause.complete(p, SyntaxKind::CLAUSE);
}

/// Element = Part (('=' | ':' '=') Part)?
fn parse_element(p: &mut Parser<'_, '_>) {
    let element = p.start();
    parse_part(p);

    if p.eat(SyntaxKind::EQUALS) {
        parse_part(p);
        element.complete(p, SyntaxKind::ATTRIBUTE);
    } else if p.eat(SyntaxKind::COLON) {
        if !p.eat(SyntaxKind::EQUALS) {
            p.error(ErrorCode::EqualsExpected);
        }
        parse_part(p);
        element.complete(p, SyntaxKind::DIRECTIVE);
    } else {
        element.abandon(p);
    }
}

/// Part = (token | Quoted)+
///
/// Line breaks and blanks alone do not make a part; they stay in the
/// enclosing node and `ValueExpected` is reported instead.
fn parse_part(p: &mut Parser<'_, '_>) {
    let part = p.start();
    let mut has_text = false;

    while !p.at_header_end() && !p.at_any(PART_END) {
        match p.current_kind() {
            Some(SyntaxKind::QUOTE) => {
                parse_quoted(p);
                has_text = true;
            }
            Some(SyntaxKind::NEWLINE | SyntaxKind::SIGNIFICANT_SPACE) => p.bump(),
            Some(SyntaxKind::HEADER_VALUE_PART) if p.current_text().trim().is_empty() => p.bump(),
            _ => {
                p.bump();
                has_text = true;
            }
        }
    }

    if has_text {
        part.complete(p, SyntaxKind::VALUE_PART);
    } else {
        part.abandon(p);
        p.error(ErrorCode::ValueExpected);
    }
}

/// Quoted = '"' ... '"', may run over continuation lines
fn parse_quoted(p: &mut Parser<'_, '_>) {
    let start = p.offset();
    p.bump();
    while !p.at_header_end() && !p.at(SyntaxKind::QUOTE) {
        p.bump();
    }
    if !p.eat(SyntaxKind::QUOTE) {
        p.error_at(ErrorCode::UnclosedQuote, TextRange::new(start, p.last_end()));
    }
}
