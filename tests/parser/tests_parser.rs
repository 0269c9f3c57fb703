//! Structural parser behaviour: sections, headers, recovery

use manifest::parser::{AstNode, HeaderParserRepository, ParseEvent, SyntaxKind, parse_events};
use manifest::{ErrorCode, LexerState, ParseOptions, TextRange, TextSize, parse, parse_manifest, parse_with_options};
use rstest::rstest;

use crate::helpers::diagnostic_helpers::{assert_no_errors, assert_parse_ok, error_codes};
use crate::helpers::source_fixtures::{DAMAGED, EXECUTABLE_JAR, MINIMAL, OSGI_BUNDLE, PER_ENTRY_SECTIONS};
use crate::helpers::tree_dump::dump;

// ============================================================================
// Basic scenarios
// ============================================================================

#[test]
fn test_single_header_with_section_end() {
    let parse = parse_manifest("Manifest-Version: 1.0\n\n");
    assert_parse_ok(&parse);
    assert_eq!(
        dump(&parse.syntax()),
        r#"MANIFEST_FILE
  SECTION
    HEADER
      HEADER_NAME "Manifest-Version"
      COLON ":"
      SIGNIFICANT_SPACE " "
      HEADER_VALUE
        HEADER_VALUE_PART "1.0"
        NEWLINE "\n"
    SECTION_END "\n"
"#
    );

    let file = parse.tree();
    assert_eq!(file.sections().count(), 1);
    let header = file.header("Manifest-Version").unwrap();
    assert_eq!(header.value().unwrap().unwrapped_text(), "1.0");
}

#[test]
fn test_missing_colon() {
    let parse = parse_manifest("Foo\n");
    assert_eq!(
        dump(&parse.syntax()),
        r#"MANIFEST_FILE
  SECTION
    HEADER
      HEADER_NAME "Foo"
      ERROR
        NEWLINE "\n"
"#
    );
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].code, ErrorCode::MissingColon);
    assert_eq!(parse.errors[0].message_key(), "manifest.colon.expected");
    assert_eq!(parse.errors[0].range, TextRange::new(TextSize::new(3), TextSize::new(4)));

    let header = parse.tree().header("Foo").unwrap();
    assert!(!header.has_colon());
    assert!(header.value().is_none());
}

#[test]
fn test_continuation_line_joins_value() {
    let parse = parse_manifest("Class-Path: a.jar\n b.jar\n\n");
    assert_parse_ok(&parse);

    let file = parse.tree();
    assert_eq!(file.headers().count(), 1);
    let value = file.header("Class-Path").unwrap().value().unwrap();
    assert_eq!(value.syntax().text().to_string(), "a.jar\n b.jar\n");
    assert_eq!(value.unwrapped_text(), "a.jarb.jar");
}

#[test]
fn test_missing_separator_space_keeps_value() {
    let parse = parse_manifest("X:value\n");
    assert_eq!(error_codes("X:value\n"), vec![ErrorCode::MissingSeparatorSpace]);
    assert_eq!(parse.errors[0].message_key(), "manifest.whitespace.expected");
    assert_eq!(parse.errors[0].range, TextRange::empty(TextSize::new(2)));

    let header = parse.tree().header("X").unwrap();
    assert!(header.has_colon());
    assert_eq!(header.value().unwrap().unwrapped_text(), "value");
}

#[test]
fn test_empty_input() {
    let parse = parse_manifest("");
    assert_parse_ok(&parse);
    assert_eq!(parse.tree().sections().count(), 0);
    assert_eq!(dump(&parse.syntax()), "MANIFEST_FILE\n");
}

// ============================================================================
// Sections
// ============================================================================

#[rstest]
#[case::single_line(MINIMAL, 1)]
#[case::trailing_blank_line(EXECUTABLE_JAR, 1)]
#[case::per_entry(PER_ENTRY_SECTIONS, 3)]
#[case::only_blank_lines("\n\n", 2)]
#[case::no_trailing_newline("A: b", 1)]
fn test_section_count(#[case] source: &str, #[case] sections: usize) {
    let parse = parse_manifest(source);
    assert_parse_ok(&parse);
    assert_eq!(parse.tree().sections().count(), sections);
}

#[test]
fn test_repeated_blank_lines_make_empty_sections() {
    let parse = parse_manifest("A: b\n\n\nC: d\n");
    assert_parse_ok(&parse);
    let sections: Vec<_> = parse.tree().sections().collect();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[1].headers().count(), 0);
    assert!(sections[1].is_terminated());
    assert_eq!(sections[2].header("C").unwrap().value().unwrap().unwrapped_text(), "d");
}

#[test]
fn test_value_without_final_newline() {
    let parse = parse_manifest("Created-By: Apache Maven");
    assert_parse_ok(&parse);
    let header = parse.tree().header("Created-By").unwrap();
    assert_eq!(header.value().unwrap().unwrapped_text(), "Apache Maven");
}

// ============================================================================
// Recovery
// ============================================================================

#[test]
fn test_orphan_value_at_section_start() {
    let text = " stray\nA: b\n";
    let parse = parse_manifest(text);
    assert_eq!(
        dump(&parse.syntax()),
        r#"MANIFEST_FILE
  SECTION
    ERROR
      SIGNIFICANT_SPACE " "
      HEADER_VALUE_PART "stray"
      NEWLINE "\n"
    HEADER
      HEADER_NAME "A"
      COLON ":"
      SIGNIFICANT_SPACE " "
      HEADER_VALUE
        HEADER_VALUE_PART "b"
        NEWLINE "\n"
"#
    );
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].code, ErrorCode::UnexpectedValueOutsideHeader);
    assert_eq!(parse.errors[0].message_key(), "manifest.header.expected");
    assert_eq!(parse.errors[0].range, TextRange::new(TextSize::new(0), TextSize::new(7)));
}

#[test]
fn test_damaged_document_recovers() {
    assert_eq!(
        error_codes(DAMAGED),
        vec![
            ErrorCode::MissingColon,
            ErrorCode::MissingSeparatorSpace,
            ErrorCode::UnexpectedValueOutsideHeader,
        ]
    );

    let parse = parse_manifest(DAMAGED);
    let file = parse.tree();
    let names: Vec<_> = file.headers().filter_map(|h| h.name()).collect();
    assert_eq!(
        names,
        vec!["Manifest-Version", "Broken line without colon", "Created-By", "Good-Header"]
    );
    assert_eq!(
        file.header("Good-Header").unwrap().value().unwrap().unwrapped_text(),
        "still parsed"
    );
    assert_eq!(parse.syntax().text().to_string(), DAMAGED);
}

#[test]
fn test_errors_are_sorted_by_position() {
    let parse = parse_manifest(DAMAGED);
    let starts: Vec<_> = parse.errors.iter().map(|e| e.range.start()).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
}

#[rstest]
#[case::colon_only(":\n")]
#[case::colon_at_line_start(": value\n")]
#[case::tab_indented("\tTabbed: x\n")]
fn test_odd_header_names_still_form_headers(#[case] source: &str) {
    let parse = parse_manifest(source);
    let file = parse.tree();
    assert_eq!(file.headers().count(), 1);
    assert_eq!(parse.syntax().text().to_string(), source);
}

// ============================================================================
// Registry and options
// ============================================================================

#[test]
fn test_empty_registry_parses_everything_as_opaque() {
    let parse = parse(OSGI_BUNDLE, &HeaderParserRepository::new());
    assert_parse_ok(&parse);
    let kinds: Vec<_> = parse.syntax().descendants().map(|n| n.kind()).collect();
    assert!(!kinds.contains(&SyntaxKind::CLAUSE));
    assert!(!kinds.contains(&SyntaxKind::CLASS_REFERENCE));
}

#[test]
fn test_event_stream_is_balanced() {
    let mut lexer = manifest::parser::Lexer::new(DAMAGED);
    let events = parse_events(&mut lexer, manifest::standard_repository(), TextSize::new(0));

    let mut depth = 0i32;
    for event in &events {
        match event {
            ParseEvent::Open { kind } if *kind != SyntaxKind::TOMBSTONE => depth += 1,
            ParseEvent::Open { .. } => {}
            ParseEvent::Close => depth -= 1,
            _ => {}
        }
        assert!(depth >= 0);
    }
    assert_eq!(depth, 0);
}

#[test]
fn test_resume_in_header_body() {
    // Restart right after the name, in the state the lexer was in there
    let text = "Main-Class: com.example.Main\n";
    let options = ParseOptions::resume(
        TextRange::new(TextSize::new(10), TextSize::of(text)),
        LexerState::HeaderBody,
    );
    let parse = parse_with_options(text, manifest::standard_repository(), &options).unwrap();

    assert_eq!(parse.offset, TextSize::new(10));
    assert_eq!(parse.syntax().text().to_string(), ": com.example.Main\n");
    assert_eq!(
        parse.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::UnexpectedValueOutsideHeader]
    );
    assert_eq!(parse.errors[0].range.start(), TextSize::new(10));
}

#[rstest]
#[case::past_end(TextRange::new(TextSize::new(0), TextSize::new(100)))]
#[case::inside_char(TextRange::new(TextSize::new(5), TextSize::new(7)))]
fn test_invalid_ranges_are_rejected(#[case] range: TextRange) {
    let text = "Ä: é\n";
    let options = ParseOptions {
        range: Some(range),
        ..ParseOptions::default()
    };
    assert!(parse_with_options(text, manifest::standard_repository(), &options).is_err());
}

#[test]
fn test_fixture_sources_parse_cleanly() {
    for source in [MINIMAL, EXECUTABLE_JAR, OSGI_BUNDLE, PER_ENTRY_SECTIONS] {
        assert_no_errors(source);
    }
}
