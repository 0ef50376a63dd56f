//! YAML writer for extraction results.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::text::{normalize_text, should_wrap_text, wrap_text_default};
use crate::config::{slugify, DEFAULT_OUTPUT_DIR};
use crate::error::Result;
use crate::references::ReferenceMatch;
use crate::types::{ExtractedDocument, FlatRow};

/// Section representation for YAML serialization.
///
/// Flattens the persisted row shape and carries the resolved references
/// alongside it.
#[derive(Debug, Serialize)]
struct YamlSection {
    #[serde(skip_serializing_if = "String::is_empty")]
    number: String,

    #[serde(flatten)]
    row: FlatRow,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    references: Vec<ReferenceMatch>,
}

/// Full extraction result for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlExtraction {
    document_id: String,
    document_type: String,
    extracted_at: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,

    sections: Vec<YamlSection>,
}

/// Generate the YAML structure for an extracted document.
///
/// `references` holds one entry per section, in section order; pass
/// empty vectors when resolution was skipped.
fn generate_yaml_struct(
    document: &ExtractedDocument,
    references: &[Vec<ReferenceMatch>],
) -> YamlExtraction {
    let sections = document
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let mut row = FlatRow::from_section(&document.document_id, section);

            // Normalize typography, then wrap long lines for readability.
            let normalized = normalize_text(&row.content);
            row.content = if should_wrap_text(&normalized) {
                wrap_text_default(&normalized)
            } else {
                normalized
            };

            YamlSection {
                number: section.number(),
                row,
                references: references.get(index).cloned().unwrap_or_default(),
            }
        })
        .collect();

    YamlExtraction {
        document_id: document.document_id.clone(),
        document_type: document.document_type.as_str().to_string(),
        extracted_at: document.extracted_at.to_rfc3339(),
        warnings: document.warnings.clone(),
        sections,
    }
}

/// Serialize an extracted document to a YAML string.
pub fn generate_yaml(
    document: &ExtractedDocument,
    references: &[Vec<ReferenceMatch>],
) -> Result<String> {
    let yaml_struct = generate_yaml_struct(document, references);
    Ok(serde_yaml_ng::to_string(&yaml_struct)?)
}

/// Write an extracted document to `<output_dir>/<slug>.yaml`.
///
/// # Arguments
/// * `document` - The extraction result to save
/// * `references` - Per-section resolved references (section order)
/// * `output_dir` - Target directory (default: `extracted/`)
///
/// # Returns
/// Path of the written file.
pub fn save_yaml(
    document: &ExtractedDocument,
    references: &[Vec<ReferenceMatch>],
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let yaml = generate_yaml(document, references)?;

    let dir = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    fs::create_dir_all(&dir)?;

    let path = dir.join(format!("{}.yaml", slugify(&document.document_id)));
    let mut file = File::create(&path)?;
    file.write_all(yaml.as_bytes())?;

    tracing::info!(path = %path.display(), sections = document.sections.len(), "Saved extraction");
    Ok(path)
}
