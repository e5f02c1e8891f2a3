//! Heuristic source-code metrics.
//!
//! For any text, `codemetrics` computes a cyclomatic-style complexity score,
//! a 0-100 maintainability score and a list of line-level issues (long
//! lines, debug prints, TODO markers). Files that cannot be read produce a
//! degenerate result instead of an error, so a batch always yields one
//! result per input.
//!
//! ```rust
//! let result = codemetrics::analyze("if (ready) { start(); } // TODO", "main.ts");
//! assert_eq!(result.metrics.complexity, 2);
//! assert_eq!(result.metrics.issues.len(), 1);
//! ```

pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod complexity;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod issues;
pub mod metrics;
pub mod progress;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    AnalysisResult, AnalysisSummary, Issue, IssueKind, MaintainabilityRating, Metrics,
};

pub use crate::analyzers::{analyze, calculate_metrics, Analyzer};
pub use crate::complexity::calculate_complexity;
pub use crate::errors::{AnalysisError, Result};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::{ContentSource, FsContentSource, MemorySource};
pub use crate::issues::detect_issues;
pub use crate::metrics::{calculate_maintainability, count_lines};
pub use crate::store::AnalysisStore;
