//! Hierarchical section extraction for regulatory bridge documents.
//!
//! This module implements the single-pass line extractor: a validated
//! table of level rules per document type (e.g. TITRE/Chapitre/Section/
//! Article for the RNC) drives the segmentation of source text into
//! sections tagged with their full ancestry path.

mod config;
mod engine;
mod rules;

pub use config::{bidding_rules, code_of_laws_rules, document_rules, rnc_rules};
pub use engine::{ExtractionOutcome, SectionExtractor};
pub use rules::{LevelRule, PreambleMode, RuleSet};
