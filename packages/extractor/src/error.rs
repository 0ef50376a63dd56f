//! Error types for the extractor.
//!
//! Configuration and input errors are fatal and raised before any
//! section is produced; structural anomalies during a pass are reported
//! as warnings on the result instead.

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Unknown document type name.
    #[error("Unknown document type: '{0}'. Expected rnc, code-of-laws or bidding-categories")]
    InvalidDocumentType(String),

    /// Invalid document identifier.
    #[error("Invalid document id: '{0}'. Expected letters, digits, '.', '_' or '-'")]
    InvalidDocumentId(String),

    /// A level rule pattern failed to compile.
    #[error("Invalid pattern for {kind} rule: {source}")]
    InvalidPattern {
        kind: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A level rule pattern has no `number` capture group.
    #[error("Pattern for {kind} rule has no 'number' capture group")]
    MissingNumberGroup { kind: &'static str },

    /// A rule set with no rules.
    #[error("Level rule set is empty")]
    EmptyRuleSet,

    /// Two rules share the same level kind.
    #[error("Duplicate level kind in rule set: {kind}")]
    DuplicateLevel { kind: &'static str },

    /// Rule kinds are not in ascending depth order.
    #[error("Level {kind} listed after deeper level {after} in rule set")]
    MisorderedLevel {
        kind: &'static str,
        after: &'static str,
    },

    /// Source text is empty or contains only blank lines.
    #[error("Source text is empty: {path}")]
    EmptySource { path: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;
