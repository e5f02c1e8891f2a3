//! The analyzer: raw text in, [`AnalysisResult`] out.
//!
//! Analysis is a pure function of its input. It does no I/O and keeps no
//! state, so one [`Analyzer`] can be shared freely across threads.

pub mod batch;

use crate::complexity::calculate_complexity;
use crate::core::{AnalysisResult, Metrics};
use crate::issues::detect_issues;
use crate::metrics::{maintainability_score, LocCounter};

/// Stateless entry point for analysis
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer;

impl Analyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, content: &str, identifier: &str) -> AnalysisResult {
        analyze(content, identifier)
    }
}

/// Analyze one piece of source text.
///
/// `identifier` is an opaque label (usually a file path) carried through to
/// the result; it is never parsed.
pub fn analyze(content: &str, identifier: &str) -> AnalysisResult {
    AnalysisResult::new(identifier, calculate_metrics(content))
}

/// Compute all metrics for a text
pub fn calculate_metrics(content: &str) -> Metrics {
    let loc = LocCounter::new().count_content(content);
    let complexity = calculate_complexity(content);

    Metrics {
        complexity,
        maintainability: maintainability_score(loc.code_lines, complexity),
        lines_of_code: loc.physical_lines,
        issues: detect_issues(content),
    }
}
