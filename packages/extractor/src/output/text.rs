//! Text normalization and wrapping utilities for YAML output.

use regex::Regex;
use std::sync::LazyLock;
use textwrap::{fill, Options};

use crate::config::TEXT_WRAP_WIDTH;

/// Regex pattern for missing space after comma before a word character.
/// Matches "word,word" but not "word, word" or "1,000".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MISSING_SPACE_AFTER_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z\u{c0}-\u{ff}]),([a-zA-Z\u{c0}-\u{ff}])").expect("valid regex"));

/// Normalize common typographical issues in extracted text.
///
/// Fixes missing space after comma before a word (e.g. "stade,phase" →
/// "stade, phase"). PDF text extraction regularly loses these spaces.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    // Loop until no more replacements needed (handles overlapping cases like "a,b,c")
    let mut result = text.to_string();
    loop {
        let replaced = MISSING_SPACE_AFTER_COMMA
            .replace_all(&result, "$1, $2")
            .to_string();
        if replaced == result {
            break;
        }
        result = replaced;
    }
    result
}

/// Check if any line of the text exceeds the wrap width.
#[must_use]
pub fn should_wrap_text(text: &str) -> bool {
    text.lines().any(|line| line.chars().count() > TEXT_WRAP_WIDTH)
}

/// Wrap text at the specified width, preserving existing line breaks.
///
/// Each source line is wrapped independently so the extractor's
/// line-per-alinéa structure survives in the output.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> String {
    let ends_with_newline = text.ends_with('\n');
    let options = Options::new(width);

    let mut wrapped = text
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                fill(line, &options)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    if ends_with_newline && !wrapped.is_empty() {
        wrapped.push('\n');
    }
    wrapped
}

/// Wrap text at the default output width.
#[must_use]
pub fn wrap_text_default(text: &str) -> String {
    wrap_text(text, TEXT_WRAP_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_missing_space() {
        assert_eq!(normalize_text("stade,phase"), "stade, phase");
        assert_eq!(normalize_text("a,b,c"), "a, b, c");
    }

    #[test]
    fn test_normalize_text_accented() {
        assert_eq!(normalize_text("séance,phase"), "séance, phase");
    }

    #[test]
    fn test_normalize_text_leaves_numbers_alone() {
        assert_eq!(normalize_text("1,000 points"), "1,000 points");
        assert_eq!(normalize_text("déjà, correct"), "déjà, correct");
    }

    #[test]
    fn test_should_wrap_text() {
        assert!(!should_wrap_text("court\n"));
        assert!(should_wrap_text(&format!("{}\n", "x".repeat(TEXT_WRAP_WIDTH + 1))));
    }

    #[test]
    fn test_wrap_text_preserves_line_breaks() {
        let text = "première ligne\nseconde ligne\n";
        assert_eq!(wrap_text(text, 100), text);
    }

    #[test]
    fn test_wrap_text_wraps_long_lines() {
        let long = "aile ".repeat(30);
        let wrapped = wrap_text(&long, 40);
        assert!(wrapped.lines().all(|line| line.chars().count() <= 40));
    }

    #[test]
    fn test_wrap_text_keeps_blank_lines() {
        let text = "un\n\ndeux\n";
        assert_eq!(wrap_text(text, 100), "un\n\ndeux\n");
    }
}
