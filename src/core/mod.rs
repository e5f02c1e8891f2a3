//! Core data types shared by the analyzer, the batch layer and the writers.

pub mod types;

pub use types::{
    AnalysisResult, AnalysisSummary, Issue, IssueKind, MaintainabilityRating, Metrics,
};
