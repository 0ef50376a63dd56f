//! Inline cross-reference scanning and resolution.
//!
//! Section bodies mention other provisions ("Voir Article 4.2", "Loi
//! 2023-1234"). Resolution is a pure read-side enrichment used for
//! rendering: it never mutates a section, and a miss is data, not an
//! error.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::{DocumentType, ExtractedDocument, LevelKind};

/// Kind of target a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceKind {
    /// An article of the RNC or another regulation ("Article 4.2").
    Article,

    /// A law of the international code ("Loi 2023-1234").
    Law,
}

/// Handle to a section in the persisted corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRef {
    /// Document the target lives in.
    pub document_id: String,

    /// Dot-notation path of the target section.
    pub path: String,
}

/// One reference found in a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceMatch {
    /// Text as it appeared in the body.
    pub matched_text: String,

    /// Target kind.
    pub kind: ReferenceKind,

    /// Captured target number, opaque.
    pub number: String,

    /// Byte offset of the match in the body.
    pub position: usize,

    /// Resolved target, or `None` for a broken link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<SectionRef>,
}

/// Lookup capability over an already-persisted corpus.
pub trait SectionLookup {
    /// Find a section by target kind and number.
    fn find_by_number(&self, kind: ReferenceKind, number: &str) -> Option<SectionRef>;
}

/// Pattern for article mentions, e.g. "Article 4" or "Article 1.1".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_REF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Article\s+(\d+(?:\.\d+)*)").expect("valid regex"));

/// Pattern for law mentions, e.g. "Loi 2023-1234".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LAW_REF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Loi\s+(\d+-\d+)").expect("valid regex"));

/// Scan a body for inline references and resolve them against a corpus.
///
/// Returns matches in body order. Unresolved references come back with
/// `resolved: None`.
pub fn resolve_references<L>(body: &str, lookup: &L) -> Vec<ReferenceMatch>
where
    L: SectionLookup + ?Sized,
{
    let mut matches: Vec<ReferenceMatch> = Vec::new();

    for (pattern, kind) in [
        (&*ARTICLE_REF_PATTERN, ReferenceKind::Article),
        (&*LAW_REF_PATTERN, ReferenceKind::Law),
    ] {
        for caps in pattern.captures_iter(body) {
            let (Some(full), Some(number)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let number = number.as_str().to_string();
            let resolved = lookup.find_by_number(kind, &number);
            if resolved.is_none() {
                tracing::debug!(kind = ?kind, number = %number, "Unresolved reference");
            }
            matches.push(ReferenceMatch {
                matched_text: full.as_str().to_string(),
                kind,
                number,
                position: full.start(),
                resolved,
            });
        }
    }

    matches.sort_by_key(|m| m.position);
    matches
}

/// In-memory index over one extraction result.
///
/// Lets the CLI resolve intra-document references right after a pass,
/// before anything is persisted. Articles are keyed by their article
/// number; a code-of-laws document additionally answers law lookups,
/// since its articles are the laws rulings cite.
pub struct InMemoryIndex {
    by_key: HashMap<(ReferenceKind, String), SectionRef>,
}

impl InMemoryIndex {
    /// Build an index over an extracted document.
    #[must_use]
    pub fn from_document(document: &ExtractedDocument) -> Self {
        let mut by_key = HashMap::new();

        for section in &document.sections {
            let Some(entry) = section.entry(LevelKind::Article) else {
                continue;
            };
            let target = SectionRef {
                document_id: document.document_id.clone(),
                path: section.number(),
            };

            by_key.insert((ReferenceKind::Article, entry.number.clone()), target.clone());
            if document.document_type == DocumentType::CodeOfLaws {
                by_key.insert((ReferenceKind::Law, entry.number.clone()), target);
            }
        }

        Self { by_key }
    }
}

impl SectionLookup for InMemoryIndex {
    fn find_by_number(&self, kind: ReferenceKind, number: &str) -> Option<SectionRef> {
        self.by_key.get(&(kind, number.to_string())).cloned()
    }
}
