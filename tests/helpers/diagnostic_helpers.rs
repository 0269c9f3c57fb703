//! Diagnostic assertion helpers for parser tests.

use manifest::{ErrorCode, Parse, SyntaxError, parse_manifest};

/// Get all errors for a manifest source string.
pub fn errors_from_manifest(source: &str) -> Vec<SyntaxError> {
    parse_manifest(source).errors
}

/// Error codes in report order.
pub fn error_codes(source: &str) -> Vec<ErrorCode> {
    errors_from_manifest(source).into_iter().map(|e| e.code).collect()
}

/// Assert a parse reported no errors.
pub fn assert_parse_ok(parse: &Parse) {
    assert!(
        parse.ok(),
        "Expected no errors, got {} error(s):\n{}",
        parse.errors.len(),
        parse
            .errors
            .iter()
            .map(|e| format!("  {:?}: {}", e.range, e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Assert a source has no errors.
pub fn assert_no_errors(source: &str) {
    assert_parse_ok(&parse_manifest(source));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_no_errors_passes_for_valid_source() {
        assert_no_errors("Manifest-Version: 1.0\n");
    }

    #[test]
    fn test_error_codes_lists_codes() {
        assert_eq!(error_codes("Foo\n"), vec![ErrorCode::MissingColon]);
    }
}
