//! Configuration constants and validation functions for the extractor.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ExtractorError, Result};

/// Text wrap width for YAML output.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Default output directory for extraction results.
pub const DEFAULT_OUTPUT_DIR: &str = "extracted";

/// Document id pattern: letters, digits, dots, underscores, dashes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOCUMENT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("valid regex"));

/// Regex for slug generation - matches non-word characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// Regex for slug generation - matches whitespace and dashes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_SPACE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Validate a source document identifier.
///
/// # Examples
/// ```
/// use bridgefacile_extractor::config::validate_document_id;
///
/// assert!(validate_document_id("rnc-2025-2026").is_ok());
/// assert!(validate_document_id("code laws").is_err());
/// ```
pub fn validate_document_id(document_id: &str) -> Result<()> {
    if DOCUMENT_ID_PATTERN.is_match(document_id) {
        Ok(())
    } else {
        Err(ExtractorError::InvalidDocumentId(document_id.to_string()))
    }
}

/// Generate a filesystem-friendly slug from free text.
///
/// # Examples
/// ```
/// use bridgefacile_extractor::config::slugify;
///
/// assert_eq!(slugify("RNC 2025-2026"), "rnc_2025_2026");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let text = text.to_lowercase();
    let text = SLUG_NON_WORD.replace_all(&text, "");
    let text = SLUG_SPACE_DASH.replace_all(&text, "_");
    text.trim_matches('_').to_string()
}
