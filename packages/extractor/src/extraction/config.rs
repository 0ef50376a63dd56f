//! Rule tables for the known document types.

use crate::error::Result;
use crate::types::{DocumentType, LevelKind};

use super::rules::{LevelRule, PreambleMode, RuleSet};

/// Marker separator between number and name: colon, hyphen or dash.
const SEPARATOR: &str = r"[:\u{2013}\u{2014}-]?";

/// Create the rule set for the Règlement National des Compétitions.
///
/// The hierarchy observed in RNC editions:
///
/// ```text
/// TITRE I Organisation des compétitions fédérales
/// └── Chapitre I : Dispositions générales
///     └── Section 1 : Dispositions générales
///         └── Article 1 – Stade, phase, séance
/// ```
///
/// Numbered alinéas ("1.", "a)") remain body text of their article.
/// Foreword text before TITRE I is kept as a synthetic "Préambule"
/// title.
pub fn rnc_rules() -> Result<RuleSet> {
    let rules = vec![
        LevelRule::new(
            LevelKind::Title,
            &format!(r"(?i)^TITRE\s+(?P<number>[IVXLCDM]+|\d+)\b\s*{SEPARATOR}\s*(?P<name>.*)$"),
        )?,
        LevelRule::new(
            LevelKind::Chapter,
            &format!(
                r"(?i)^Chapitre\s+(?P<number>[IVXLCDM]+|\d+)\b\s*{SEPARATOR}\s*(?P<name>.*)$"
            ),
        )?
        .with_required_parent(),
        LevelRule::new(
            LevelKind::Section,
            &format!(
                r"(?i)^Section\s+(?P<number>\d+(?:\.\d+)*)\b\s*{SEPARATOR}\s*(?P<name>.*)$"
            ),
        )?,
        LevelRule::new(
            LevelKind::Article,
            &format!(
                r"(?i)^Article\s+(?P<number>\d+(?:\.\d+)*)\b\s*{SEPARATOR}\s*(?P<name>.*)$"
            ),
        )?,
    ];

    Ok(RuleSet::new(rules)?.with_preamble(PreambleMode::Synthetic {
        number: "0".to_string(),
        name: "Préambule".to_string(),
    }))
}

/// Create the rule set for the international code of laws.
///
/// The code is a flat run of articles; numbered alinéas and lettered
/// sub-alinéas are their own tiers so rulings can cite "64.B.2" style
/// paths. Introduction text before the first article keeps an empty
/// path.
pub fn code_of_laws_rules() -> Result<RuleSet> {
    let rules = vec![
        LevelRule::new(
            LevelKind::Article,
            &format!(
                r"(?i)^Article\s+(?P<number>\d+(?:\.\d+)*[A-Z]?)\b\s*{SEPARATOR}\s*(?P<name>.*)$"
            ),
        )?,
        LevelRule::new(LevelKind::Alinea, r"^(?P<number>\d+)\s*[.)]\s*(?P<name>.*)$")?,
        LevelRule::new(
            LevelKind::SubAlinea,
            r"^(?P<number>[a-z])\)\s*(?P<name>.*)$",
        )?,
    ];

    Ok(RuleSet::new(rules)?)
}

/// Create the rule set for bidding-convention category listings.
pub fn bidding_rules() -> Result<RuleSet> {
    let rules = vec![
        LevelRule::new(
            LevelKind::Chapter,
            &format!(
                r"(?i)^Cat[ée]gorie\s+(?P<number>\d+)\b\s*{SEPARATOR}\s*(?P<name>.*)$"
            ),
        )?,
        LevelRule::new(
            LevelKind::Article,
            &format!(
                r"(?i)^Convention\s+(?P<number>\d+(?:\.\d+)*)\b\s*{SEPARATOR}\s*(?P<name>.*)$"
            ),
        )?
        .with_required_parent(),
    ];

    Ok(RuleSet::new(rules)?)
}

/// Rule set for a document type.
pub fn document_rules(document_type: DocumentType) -> Result<RuleSet> {
    match document_type {
        DocumentType::Rnc => rnc_rules(),
        DocumentType::CodeOfLaws => code_of_laws_rules(),
        DocumentType::BiddingCategories => bidding_rules(),
    }
}
