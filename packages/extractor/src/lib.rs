//! BridgeFacile Section Extractor - Segment regulatory bridge documents
//! into hierarchical sections.
//!
//! This crate turns the plain text of a federation document (RNC
//! competition rules, the international code of laws, bidding-convention
//! categories) into an ordered sequence of sections, each tagged with
//! its full ancestry path (title → chapter → section → article), ready
//! for the persistence layer's flat row schema.
//!
//! # Example
//!
//! ```
//! use bridgefacile_extractor::extraction::{document_rules, SectionExtractor};
//! use bridgefacile_extractor::types::DocumentType;
//!
//! let rules = document_rules(DocumentType::Rnc).expect("built-in rules are valid");
//! let extractor = SectionExtractor::new(rules);
//!
//! let lines = ["TITRE I Organisation", "Article 1 – Stade", "Texte."];
//! let outcome = extractor.extract(&lines);
//! assert_eq!(outcome.sections.len(), 2);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (Section, PathEntry, FlatRow, etc.)
//! - [`error`]: Error types and Result alias
//! - [`input`]: Source text loading and normalization
//! - [`extraction`]: Level rules and the section extraction engine
//! - [`references`]: Inline cross-reference scanning and resolution
//! - [`output`]: YAML output generation
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod input;
pub mod output;
pub mod references;
pub mod types;

// Re-export commonly used items
pub use error::{ExtractorError, Result};
pub use extraction::{document_rules, SectionExtractor};
pub use types::{DocumentType, ExtractedDocument, FlatRow, LevelKind, PathEntry, Section};
