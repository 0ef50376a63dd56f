//! Single-pass section extraction engine.
//!
//! Walks the source lines once, carrying the active marker stack
//! forward, and emits one [`Section`] per structural span. All state is
//! owned by the invocation; nothing survives between documents.

use crate::types::{PathEntry, Section, SourceSpan};

use super::rules::{PreambleMode, RuleSet};

/// Result of one extraction pass.
#[derive(Debug)]
pub struct ExtractionOutcome {
    /// Emitted sections in source order.
    pub sections: Vec<Section>,

    /// Non-fatal structural anomalies (e.g. a level matched with no
    /// required parent open).
    pub warnings: Vec<String>,
}

/// Extractor for one document type's rule set.
///
/// The extractor is stateless between calls; independent documents may
/// be processed by independent extractor values in parallel.
pub struct SectionExtractor {
    rules: RuleSet,
}

impl SectionExtractor {
    /// Create a new extractor over a validated rule set.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Extract the ordered section sequence from one document's lines.
    ///
    /// Every input line ends up in exactly one emitted section's span:
    /// marker lines as headers, everything else as body. The final open
    /// section is always emitted, even with an empty body.
    pub fn extract<S: AsRef<str>>(&self, lines: &[S]) -> ExtractionOutcome {
        let depth_count = self.rules.depth_count();
        let mut active: Vec<Option<PathEntry>> = vec![None; depth_count];
        let mut counters: Vec<usize> = vec![0; depth_count];
        let mut body: Vec<String> = Vec::new();
        let mut sections: Vec<Section> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        // First line of the currently open span; a purely blank prologue
        // is absorbed into the first marker's span.
        let mut open_start: usize = 1;
        let mut marker_open = false;

        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;
            let line = line.as_ref();

            let Some((depth, number, name)) = self.rules.match_line(line) else {
                body.push(line.to_string());
                continue;
            };

            // Close the open section before this marker takes effect.
            if marker_open || !is_blank(&body) {
                sections.push(self.close_section(
                    &active,
                    &body,
                    open_start,
                    line_number - 1,
                    marker_open,
                ));
                open_start = line_number;
            }
            body.clear();

            let rule = self.rules.rule(depth);
            if rule.requires_parent() && depth > 0 && active[depth - 1].is_none() {
                let parent_kind = self.rules.rule(depth - 1).kind().as_str();
                let message = format!(
                    "{} {} at line {} has no open {} parent",
                    rule.kind().as_str(),
                    number,
                    line_number,
                    parent_kind,
                );
                tracing::warn!(line = line_number, "{message}");
                warnings.push(message);
            }

            counters[depth] += 1;
            for counter in counters.iter_mut().skip(depth + 1) {
                *counter = 0;
            }

            active[depth] = Some(PathEntry::new(rule.kind(), number, name, counters[depth]));
            for slot in active.iter_mut().skip(depth + 1) {
                *slot = None;
            }

            marker_open = true;
        }

        // Final open section, even with an empty body.
        if marker_open || !is_blank(&body) {
            sections.push(self.close_section(&active, &body, open_start, lines.len(), marker_open));
        }

        ExtractionOutcome { sections, warnings }
    }

    /// Emit the currently open section with the path as it stands.
    fn close_section(
        &self,
        active: &[Option<PathEntry>],
        body: &[String],
        start_line: usize,
        end_line: usize,
        marker_open: bool,
    ) -> Section {
        let path: Vec<PathEntry> = if marker_open {
            active.iter().flatten().cloned().collect()
        } else {
            match self.rules.preamble() {
                PreambleMode::Anonymous => Vec::new(),
                PreambleMode::Synthetic { number, name } => vec![PathEntry::new(
                    self.rules.rule(0).kind(),
                    number.clone(),
                    name.clone(),
                    0,
                )],
            }
        };

        Section::new(
            path,
            render_body(body),
            SourceSpan {
                start_line,
                end_line,
            },
        )
    }
}

/// Whether the accumulated lines are all blank.
fn is_blank(lines: &[String]) -> bool {
    lines.iter().all(|line| line.trim().is_empty())
}

/// Render accumulated body lines: drop leading and trailing blank
/// lines, keep interior blanks, newline-terminate every line.
fn render_body(lines: &[String]) -> String {
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let last = lines.iter().rposition(|line| !line.trim().is_empty());

    match (first, last) {
        (Some(first), Some(last)) => {
            let mut body = String::new();
            for line in &lines[first..=last] {
                body.push_str(line);
                body.push('\n');
            }
            body
        }
        _ => String::new(),
    }
}
