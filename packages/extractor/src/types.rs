//! Core data types for the extractor.
//!
//! These types represent regulatory bridge documents and their extracted
//! sections, matching the flat row schema used by the persistence layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExtractorError, Result};

/// Types of regulatory documents published by the federation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    /// Règlement National des Compétitions.
    Rnc,

    /// International code of laws (Code International).
    CodeOfLaws,

    /// Bidding-convention category listings.
    BiddingCategories,
}

impl DocumentType {
    /// Get the string value for serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rnc => "RNC",
            Self::CodeOfLaws => "CODE_OF_LAWS",
            Self::BiddingCategories => "BIDDING_CATEGORIES",
        }
    }

    /// Parse an operator-facing document type name.
    ///
    /// Accepts the spellings used on the command line and in upload
    /// metadata ("rnc", "code-of-laws", "bidding-categories" and common
    /// shorthands).
    pub fn parse(text: &str) -> Result<Self> {
        match text.to_lowercase().as_str() {
            "rnc" => Ok(Self::Rnc),
            "code-of-laws" | "code_of_laws" | "codeoflaws" | "code" | "laws" => {
                Ok(Self::CodeOfLaws)
            }
            "bidding-categories" | "bidding_categories" | "bidding" | "conventions" => {
                Ok(Self::BiddingCategories)
            }
            _ => Err(ExtractorError::InvalidDocumentType(text.to_string())),
        }
    }
}

/// One tier of the document hierarchy.
///
/// Discriminant order defines nesting depth: a kind may only be
/// subordinate to kinds with a smaller discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LevelKind {
    Title = 0,
    Chapter = 1,
    Section = 2,
    Article = 3,
    Alinea = 4,
    SubAlinea = 5,
}

impl LevelKind {
    /// Get the string value for serialized output and messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Chapter => "CHAPTER",
            Self::Section => "SECTION",
            Self::Article => "ARTICLE",
            Self::Alinea => "ALINEA",
            Self::SubAlinea => "SUB_ALINEA",
        }
    }

    /// Nesting depth of this kind (0 = outermost).
    #[must_use]
    pub fn depth(&self) -> usize {
        *self as usize
    }
}

/// One ancestry step in a section's level path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    /// Hierarchy tier this entry sits at.
    pub kind: LevelKind,

    /// Captured marker number, kept as an opaque string ("I", "1.1", "a").
    pub number: String,

    /// Captured marker name (may be empty).
    pub name: String,

    /// 1-based sequence among siblings at this level (0 for a synthetic
    /// preamble entry).
    pub ordinal: usize,
}

impl PathEntry {
    /// Create a new path entry.
    #[must_use]
    pub fn new(
        kind: LevelKind,
        number: impl Into<String>,
        name: impl Into<String>,
        ordinal: usize,
    ) -> Self {
        Self {
            kind,
            number: number.into(),
            name: name.into(),
            ordinal,
        }
    }
}

/// Line range in the source text, 1-based and inclusive.
///
/// Covers the marker line plus the body lines. Together with the
/// document id this is the opaque source reference carried by each
/// section; the extractor never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start_line: usize,
    pub end_line: usize,
}

impl SourceSpan {
    /// Number of source lines covered by this span.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end_line < self.start_line
    }
}

/// A contiguous span of source text with its full ancestry path.
///
/// Immutable once produced by an extraction pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Ancestry from outermost to innermost level.
    pub path: Vec<PathEntry>,

    /// Accumulated body text, each line newline-terminated; leading and
    /// trailing blank lines removed.
    pub body: String,

    /// Source line range this section was extracted from.
    pub span: SourceSpan,
}

impl Section {
    /// Create a new section.
    #[must_use]
    pub fn new(path: Vec<PathEntry>, body: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            path,
            body: body.into(),
            span,
        }
    }

    /// Find the path entry at a given level, if present.
    #[must_use]
    pub fn entry(&self, kind: LevelKind) -> Option<&PathEntry> {
        self.path.iter().find(|e| e.kind == kind)
    }

    /// Sibling sequence index at the section's own (deepest) level.
    ///
    /// 0 for a preamble section.
    #[must_use]
    pub fn sequence_index(&self) -> usize {
        self.path.last().map_or(0, |e| e.ordinal)
    }

    /// Dot notation over the path numbers (e.g. "I.2.1").
    #[must_use]
    pub fn number(&self) -> String {
        self.path
            .iter()
            .map(|e| e.number.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Whether this section holds text preceding the first marker.
    #[must_use]
    pub fn is_preamble(&self) -> bool {
        self.path.is_empty() || self.path.iter().all(|e| e.ordinal == 0)
    }
}

/// One extraction pass over one source document.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Operator-supplied identifier of the source document.
    pub document_id: String,

    /// Document type the rule set was selected for.
    pub document_type: DocumentType,

    /// When the pass ran.
    pub extracted_at: DateTime<Utc>,

    /// Extracted sections in source order.
    pub sections: Vec<Section>,

    /// Non-fatal structural anomalies observed during the pass.
    pub warnings: Vec<String>,
}

impl ExtractedDocument {
    /// Assemble a document from the result of an extraction pass.
    #[must_use]
    pub fn new(
        document_id: impl Into<String>,
        document_type: DocumentType,
        sections: Vec<Section>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            document_type,
            extracted_at: Utc::now(),
            sections,
            warnings,
        }
    }
}

/// Flat nullable-column projection of a [`Section`].
///
/// Matches the persisted row shape (`rnc_articles` / `code_laws`): one
/// number/name column pair per level kind rather than a normalized
/// tree. Projection is lossless for the six known level kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlatRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alinea_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alinea_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_alinea_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_alinea_name: Option<String>,

    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_in_title: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_in_chapter: Option<usize>,

    pub source_document: String,
    pub start_line: usize,
    pub end_line: usize,
}

impl FlatRow {
    /// Project a section into the flat persisted shape.
    #[must_use]
    pub fn from_section(document_id: &str, section: &Section) -> Self {
        let mut row = Self {
            content: section.body.clone(),
            source_document: document_id.to_string(),
            start_line: section.span.start_line,
            end_line: section.span.end_line,
            ..Self::default()
        };

        for entry in &section.path {
            let (number_col, name_col) = match entry.kind {
                LevelKind::Title => (&mut row.title_number, &mut row.title_name),
                LevelKind::Chapter => (&mut row.chapter_number, &mut row.chapter_name),
                LevelKind::Section => (&mut row.section_number, &mut row.section_name),
                LevelKind::Article => (&mut row.article_number, &mut row.article_name),
                LevelKind::Alinea => (&mut row.alinea_number, &mut row.alinea_name),
                LevelKind::SubAlinea => (&mut row.sub_alinea_number, &mut row.sub_alinea_name),
            };
            *number_col = Some(entry.number.clone());
            *name_col = Some(entry.name.clone());
        }

        row.order_in_title = section.entry(LevelKind::Title).map(|e| e.ordinal);
        row.order_in_chapter = section.entry(LevelKind::Chapter).map(|e| e.ordinal);

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_as_str() {
        assert_eq!(DocumentType::Rnc.as_str(), "RNC");
        assert_eq!(DocumentType::CodeOfLaws.as_str(), "CODE_OF_LAWS");
        assert_eq!(
            DocumentType::BiddingCategories.as_str(),
            "BIDDING_CATEGORIES"
        );
    }

    #[test]
    fn test_document_type_parse() {
        assert_eq!(DocumentType::parse("rnc").unwrap(), DocumentType::Rnc);
        assert_eq!(DocumentType::parse("RNC").unwrap(), DocumentType::Rnc);
        assert_eq!(
            DocumentType::parse("code-of-laws").unwrap(),
            DocumentType::CodeOfLaws
        );
        assert_eq!(
            DocumentType::parse("bidding").unwrap(),
            DocumentType::BiddingCategories
        );
        assert!(DocumentType::parse("unknown").is_err());
    }

    #[test]
    fn test_level_kind_ordering() {
        assert!(LevelKind::Title < LevelKind::Chapter);
        assert!(LevelKind::Chapter < LevelKind::Section);
        assert!(LevelKind::Article < LevelKind::Alinea);
        assert_eq!(LevelKind::Title.depth(), 0);
        assert_eq!(LevelKind::SubAlinea.depth(), 5);
    }

    #[test]
    fn test_source_span_len() {
        let span = SourceSpan {
            start_line: 3,
            end_line: 5,
        };
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_section_number_dot_notation() {
        let section = Section::new(
            vec![
                PathEntry::new(LevelKind::Title, "I", "Organisation", 1),
                PathEntry::new(LevelKind::Chapter, "2", "Arbitrage", 2),
                PathEntry::new(LevelKind::Article, "4.1", "Désignation", 1),
            ],
            "",
            SourceSpan {
                start_line: 1,
                end_line: 1,
            },
        );
        assert_eq!(section.number(), "I.2.4.1");
        assert_eq!(section.sequence_index(), 1);
        assert!(!section.is_preamble());
    }

    #[test]
    fn test_section_entry_lookup() {
        let section = Section::new(
            vec![
                PathEntry::new(LevelKind::Title, "I", "Organisation", 1),
                PathEntry::new(LevelKind::Article, "1", "Stade", 1),
            ],
            "",
            SourceSpan {
                start_line: 1,
                end_line: 1,
            },
        );
        assert_eq!(section.entry(LevelKind::Title).unwrap().number, "I");
        assert!(section.entry(LevelKind::Chapter).is_none());
    }

    #[test]
    fn test_preamble_section() {
        let anonymous = Section::new(
            Vec::new(),
            "Avant-propos.\n",
            SourceSpan {
                start_line: 1,
                end_line: 1,
            },
        );
        assert!(anonymous.is_preamble());
        assert_eq!(anonymous.sequence_index(), 0);
        assert_eq!(anonymous.number(), "");

        let synthetic = Section::new(
            vec![PathEntry::new(LevelKind::Title, "0", "Préambule", 0)],
            "Avant-propos.\n",
            SourceSpan {
                start_line: 1,
                end_line: 1,
            },
        );
        assert!(synthetic.is_preamble());
        assert_eq!(synthetic.sequence_index(), 0);
    }

    #[test]
    fn test_flat_row_projection() {
        let section = Section::new(
            vec![
                PathEntry::new(LevelKind::Title, "I", "Organisation", 1),
                PathEntry::new(LevelKind::Chapter, "I", "Dispositions générales", 1),
                PathEntry::new(LevelKind::Article, "1", "Stade, phase, séance", 1),
            ],
            "Les compétitions sont organisées en stades.\n",
            SourceSpan {
                start_line: 3,
                end_line: 4,
            },
        );

        let row = FlatRow::from_section("rnc-2025-2026", &section);
        assert_eq!(row.title_number.as_deref(), Some("I"));
        assert_eq!(row.title_name.as_deref(), Some("Organisation"));
        assert_eq!(row.chapter_number.as_deref(), Some("I"));
        assert_eq!(row.article_number.as_deref(), Some("1"));
        assert_eq!(row.article_name.as_deref(), Some("Stade, phase, séance"));
        assert!(row.section_number.is_none());
        assert!(row.alinea_number.is_none());
        assert_eq!(row.order_in_title, Some(1));
        assert_eq!(row.order_in_chapter, Some(1));
        assert_eq!(row.content, "Les compétitions sont organisées en stades.\n");
        assert_eq!(row.source_document, "rnc-2025-2026");
        assert_eq!(row.start_line, 3);
        assert_eq!(row.end_line, 4);
    }

    #[test]
    fn test_flat_row_preamble_has_no_columns() {
        let section = Section::new(
            Vec::new(),
            "Texte liminaire.\n",
            SourceSpan {
                start_line: 1,
                end_line: 2,
            },
        );
        let row = FlatRow::from_section("doc", &section);
        assert!(row.title_number.is_none());
        assert!(row.order_in_title.is_none());
        assert_eq!(row.content, "Texte liminaire.\n");
    }

    #[test]
    fn test_level_kind_serialization() {
        assert_eq!(
            serde_yaml_ng::to_string(&LevelKind::SubAlinea).unwrap().trim(),
            "SUB_ALINEA"
        );
        assert_eq!(
            serde_yaml_ng::to_string(&DocumentType::CodeOfLaws)
                .unwrap()
                .trim(),
            "CODE_OF_LAWS"
        );
    }
}
