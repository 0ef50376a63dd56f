//! Level rules and rule-set validation.

use regex::Regex;

use crate::error::{ExtractorError, Result};
use crate::types::LevelKind;

/// Pattern recognizing marker lines at one hierarchy tier.
///
/// The pattern must expose a `number` capture group; a `name` group is
/// optional and defaults to the empty string.
#[derive(Debug, Clone)]
pub struct LevelRule {
    kind: LevelKind,
    matcher: Regex,
    requires_parent: bool,
}

impl LevelRule {
    /// Compile a new level rule.
    ///
    /// # Errors
    /// Returns a configuration error if the pattern does not compile or
    /// lacks a `number` capture group.
    pub fn new(kind: LevelKind, pattern: &str) -> Result<Self> {
        let matcher = Regex::new(pattern).map_err(|source| ExtractorError::InvalidPattern {
            kind: kind.as_str(),
            source,
        })?;

        if !matcher
            .capture_names()
            .flatten()
            .any(|name| name == "number")
        {
            return Err(ExtractorError::MissingNumberGroup {
                kind: kind.as_str(),
            });
        }

        Ok(Self {
            kind,
            matcher,
            requires_parent: false,
        })
    }

    /// Mark this rule as requiring its immediately shallower rule kind
    /// to be open when it matches. Violations are recorded as warnings,
    /// not errors.
    #[must_use]
    pub fn with_required_parent(mut self) -> Self {
        self.requires_parent = true;
        self
    }

    /// Hierarchy tier this rule recognizes.
    #[must_use]
    pub fn kind(&self) -> LevelKind {
        self.kind
    }

    #[must_use]
    pub fn requires_parent(&self) -> bool {
        self.requires_parent
    }

    /// Try to match a marker line, yielding the captured number and name.
    #[must_use]
    pub fn matches(&self, line: &str) -> Option<(String, String)> {
        let caps = self.matcher.captures(line.trim())?;
        let number = caps.name("number")?.as_str().trim().to_string();
        let name = caps
            .name("name")
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        Some((number, name))
    }
}

/// Handling of unstructured text preceding the first marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreambleMode {
    /// Emit the preamble with an empty level path.
    Anonymous,

    /// Emit the preamble under a synthetic entry at the shallowest rule
    /// kind (e.g. Title "0" / "Préambule").
    Synthetic { number: String, name: String },
}

/// Validated, ordered table of level rules for one document type.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<LevelRule>,
    preamble: PreambleMode,
}

impl RuleSet {
    /// Validate and assemble a rule set.
    ///
    /// Rules must be non-empty and listed in strictly ascending kind
    /// order; duplicates and out-of-order kinds are caller errors,
    /// rejected before any line is processed.
    pub fn new(rules: Vec<LevelRule>) -> Result<Self> {
        if rules.is_empty() {
            return Err(ExtractorError::EmptyRuleSet);
        }

        for pair in rules.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.kind() == prev.kind() {
                return Err(ExtractorError::DuplicateLevel {
                    kind: next.kind().as_str(),
                });
            }
            if next.kind() < prev.kind() {
                return Err(ExtractorError::MisorderedLevel {
                    kind: next.kind().as_str(),
                    after: prev.kind().as_str(),
                });
            }
        }

        Ok(Self {
            rules,
            preamble: PreambleMode::Anonymous,
        })
    }

    /// Set the preamble handling mode.
    #[must_use]
    pub fn with_preamble(mut self, preamble: PreambleMode) -> Self {
        self.preamble = preamble;
        self
    }

    /// All rules, shallowest kind first.
    #[must_use]
    pub fn rules(&self) -> &[LevelRule] {
        &self.rules
    }

    /// Rule at a given depth index.
    #[must_use]
    pub fn rule(&self, depth: usize) -> &LevelRule {
        &self.rules[depth]
    }

    /// Number of hierarchy tiers in this rule set.
    #[must_use]
    pub fn depth_count(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn preamble(&self) -> &PreambleMode {
        &self.preamble
    }

    /// Match a line against the rules, shallowest kind first.
    ///
    /// A line matches at most one rule; trying shallow rules first
    /// ensures "TITRE 1" is never captured by a deeper pattern.
    #[must_use]
    pub fn match_line(&self, line: &str) -> Option<(usize, String, String)> {
        self.rules
            .iter()
            .enumerate()
            .find_map(|(depth, rule)| {
                rule.matches(line)
                    .map(|(number, name)| (depth, number, name))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_rule() -> LevelRule {
        LevelRule::new(
            LevelKind::Title,
            r"(?i)^TITRE\s+(?P<number>[IVXLCDM]+|\d+)\b\s*[:\u{2013}\u{2014}-]?\s*(?P<name>.*)$",
        )
        .unwrap()
    }

    fn article_rule() -> LevelRule {
        LevelRule::new(
            LevelKind::Article,
            r"(?i)^Article\s+(?P<number>\d+(?:\.\d+)*)\b\s*[:\u{2013}\u{2014}-]?\s*(?P<name>.*)$",
        )
        .unwrap()
    }

    #[test]
    fn test_level_rule_rejects_bad_pattern() {
        let err = LevelRule::new(LevelKind::Title, r"^TITRE (").unwrap_err();
        assert!(matches!(
            err,
            ExtractorError::InvalidPattern { kind: "TITLE", .. }
        ));
    }

    #[test]
    fn test_level_rule_requires_number_group() {
        let err = LevelRule::new(LevelKind::Title, r"^TITRE\s+(\d+)$").unwrap_err();
        assert!(matches!(
            err,
            ExtractorError::MissingNumberGroup { kind: "TITLE" }
        ));
    }

    #[test]
    fn test_level_rule_captures_number_and_name() {
        let rule = title_rule();
        let (number, name) = rule.matches("TITRE I Organisation").unwrap();
        assert_eq!(number, "I");
        assert_eq!(name, "Organisation");
    }

    #[test]
    fn test_level_rule_name_defaults_empty() {
        let rule = LevelRule::new(LevelKind::Alinea, r"^(?P<number>\d+)\.$").unwrap();
        let (number, name) = rule.matches("3.").unwrap();
        assert_eq!(number, "3");
        assert_eq!(name, "");
    }

    #[test]
    fn test_level_rule_no_match() {
        let rule = title_rule();
        assert!(rule.matches("Texte ordinaire.").is_none());
    }

    #[test]
    fn test_rule_set_rejects_empty() {
        let err = RuleSet::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ExtractorError::EmptyRuleSet));
    }

    #[test]
    fn test_rule_set_rejects_duplicate_kind() {
        let err = RuleSet::new(vec![article_rule(), article_rule()]).unwrap_err();
        assert!(matches!(
            err,
            ExtractorError::DuplicateLevel { kind: "ARTICLE" }
        ));
    }

    #[test]
    fn test_rule_set_rejects_misordered_kinds() {
        let err = RuleSet::new(vec![article_rule(), title_rule()]).unwrap_err();
        assert!(matches!(
            err,
            ExtractorError::MisorderedLevel {
                kind: "TITLE",
                after: "ARTICLE"
            }
        ));
    }

    #[test]
    fn test_rule_set_match_line_shallowest_first() {
        // An ambiguous pattern pair: both rules would match "TITRE 1",
        // but the shallower rule wins.
        let greedy_article = LevelRule::new(
            LevelKind::Article,
            r"(?i)^\w+\s+(?P<number>\d+)\s*(?P<name>.*)$",
        )
        .unwrap();
        let rules = RuleSet::new(vec![title_rule(), greedy_article]).unwrap();

        let (depth, number, _) = rules.match_line("TITRE 1 Organisation").unwrap();
        assert_eq!(depth, 0);
        assert_eq!(number, "1");

        let (depth, _, _) = rules.match_line("Article 2 Organisation").unwrap();
        assert_eq!(depth, 1);
    }

    #[test]
    fn test_rule_set_preamble_default_anonymous() {
        let rules = RuleSet::new(vec![title_rule()]).unwrap();
        assert_eq!(*rules.preamble(), PreambleMode::Anonymous);

        let rules = rules.with_preamble(PreambleMode::Synthetic {
            number: "0".to_string(),
            name: "Préambule".to_string(),
        });
        assert!(matches!(rules.preamble(), PreambleMode::Synthetic { .. }));
    }
}
