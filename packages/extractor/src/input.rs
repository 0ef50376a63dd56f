//! Source text loading and normalization.
//!
//! The extractor consumes plain text produced by an upstream PDF
//! conversion step. Converters are inconsistent about line endings and
//! Unicode form (French accents frequently arrive decomposed), so all
//! input is normalized here before any rule sees a line.

use std::fs;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::error::{ExtractorError, Result};

/// Load and normalize the source text of one document.
///
/// # Arguments
/// * `path` - Path to a UTF-8 plain-text file
///
/// # Returns
/// The normalized lines, or an error if the file is unreadable or
/// effectively empty (blank lines only).
pub fn load_source_lines(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)?;
    let lines = normalize_source(&raw);

    if lines.iter().all(|line| line.trim().is_empty()) {
        return Err(ExtractorError::EmptySource {
            path: path.display().to_string(),
        });
    }

    tracing::debug!(path = %path.display(), lines = lines.len(), "Loaded source text");
    Ok(lines)
}

/// Split raw text into normalized lines.
///
/// - strips a leading UTF-8 BOM
/// - accepts both LF and CRLF line endings
/// - trims trailing whitespace per line
/// - applies Unicode NFC normalization (composed accents)
#[must_use]
pub fn normalize_source(raw: &str) -> Vec<String> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    raw.lines()
        .map(|line| line.trim_end().nfc().collect::<String>())
        .collect()
}
