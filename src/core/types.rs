//! Result types produced by the analyzer
//!
//! JSON field names are `filePath`, `linesOfCode` and `type`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a detected issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Suggestion,
}

impl IssueKind {
    /// Lowercase label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Error => "error",
            IssueKind::Warning => "warning",
            IssueKind::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single condition detected at a text position.
///
/// Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl Issue {
    pub fn new(kind: IssueKind, message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column,
        }
    }

    pub fn error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(IssueKind::Error, message, line, column)
    }

    pub fn warning(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(IssueKind::Warning, message, line, column)
    }

    pub fn suggestion(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(IssueKind::Suggestion, message, line, column)
    }
}

/// Metrics computed for one piece of source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub complexity: u32,
    pub maintainability: u8,
    pub lines_of_code: usize,
    pub issues: Vec<Issue>,
}

impl Metrics {
    /// Number of issues of the given kind
    pub fn count_of(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }

    pub fn rating(&self) -> MaintainabilityRating {
        MaintainabilityRating::from_score(self.maintainability)
    }
}

/// Analysis outcome for one identifier (usually a file path)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "filePath")]
    pub identifier: String,
    pub metrics: Metrics,
}

impl AnalysisResult {
    pub fn new(identifier: impl Into<String>, metrics: Metrics) -> Self {
        Self {
            identifier: identifier.into(),
            metrics,
        }
    }

    /// Build the zero-valued result used when content could not be acquired.
    ///
    /// `complexity == 0` marks the analysis as not having run; real analysis
    /// always yields a complexity of at least 1.
    pub fn acquisition_failure(identifier: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            identifier: identifier.into(),
            metrics: Metrics {
                complexity: 0,
                maintainability: 0,
                lines_of_code: 0,
                issues: vec![Issue::error(format!("Failed to analyze file: {error}"), 1, 1)],
            },
        }
    }

    /// True when this result stands in for a failed acquisition
    pub fn is_degenerate(&self) -> bool {
        self.metrics.complexity == 0
    }

    /// First error-kind issue, if any
    pub fn first_error(&self) -> Option<&Issue> {
        self.metrics
            .issues
            .iter()
            .find(|issue| issue.kind == IssueKind::Error)
    }
}

/// Coarse bucket for the maintainability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintainabilityRating {
    Poor,
    Fair,
    Good,
}

impl MaintainabilityRating {
    pub const GOOD_THRESHOLD: u8 = 70;
    pub const FAIR_THRESHOLD: u8 = 50;

    pub fn from_score(score: u8) -> Self {
        if score >= Self::GOOD_THRESHOLD {
            MaintainabilityRating::Good
        } else if score >= Self::FAIR_THRESHOLD {
            MaintainabilityRating::Fair
        } else {
            MaintainabilityRating::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaintainabilityRating::Good => "good",
            MaintainabilityRating::Fair => "fair",
            MaintainabilityRating::Poor => "poor",
        }
    }
}

/// Aggregate figures over a set of results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub files_analyzed: usize,
    pub failed_files: usize,
    pub total_lines: usize,
    pub average_complexity: f64,
    pub average_maintainability: f64,
    pub errors: usize,
    pub warnings: usize,
    pub suggestions: usize,
}

impl AnalysisSummary {
    /// Summarize a set of results.
    ///
    /// Degenerate results count towards `failed_files` and their error
    /// issues, but are left out of the averages and line totals.
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a AnalysisResult>,
    {
        let mut summary = AnalysisSummary::default();
        let mut complexity_sum = 0u64;
        let mut maintainability_sum = 0u64;

        for result in results {
            let metrics = &result.metrics;
            summary.errors += metrics.count_of(IssueKind::Error);
            summary.warnings += metrics.count_of(IssueKind::Warning);
            summary.suggestions += metrics.count_of(IssueKind::Suggestion);

            if result.is_degenerate() {
                summary.failed_files += 1;
                continue;
            }

            summary.files_analyzed += 1;
            summary.total_lines += metrics.lines_of_code;
            complexity_sum += u64::from(metrics.complexity);
            maintainability_sum += u64::from(metrics.maintainability);
        }

        if summary.files_analyzed > 0 {
            let n = summary.files_analyzed as f64;
            summary.average_complexity = complexity_sum as f64 / n;
            summary.average_maintainability = maintainability_sum as f64 / n;
        }

        summary
    }

    pub fn total_issues(&self) -> usize {
        self.errors + self.warnings + self.suggestions
    }
}
