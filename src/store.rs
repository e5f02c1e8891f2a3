//! Keyed store of analysis results.
//!
//! The store is an explicit state container owned by the caller and passed
//! by `&mut` to whatever drives a batch. It holds the current file selection,
//! a flag raised while a batch runs, one result per identifier and an
//! optional selected identifier.
//!
//! Recording a result for an identifier that is already present replaces it;
//! results are never merged.

use crate::core::{AnalysisResult, AnalysisSummary};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct AnalysisStore {
    files: Vec<String>,
    is_analyzing: bool,
    results: BTreeMap<String, AnalysisResult>,
    selected_file: Option<String>,
}

impl AnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current file selection
    pub fn set_files(&mut self, files: Vec<String>) {
        self.files = files;
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn begin_batch(&mut self) {
        self.is_analyzing = true;
    }

    pub fn finish_batch(&mut self) {
        self.is_analyzing = false;
    }

    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    /// Store a result, returning the one it replaced
    pub fn record(&mut self, result: AnalysisResult) -> Option<AnalysisResult> {
        self.results.insert(result.identifier.clone(), result)
    }

    pub fn get(&self, identifier: &str) -> Option<&AnalysisResult> {
        self.results.get(identifier)
    }

    /// Results ordered by identifier
    pub fn results(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.results.values()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn select(&mut self, identifier: Option<String>) {
        self.selected_file = identifier;
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    /// Result for the selected identifier, if both exist
    pub fn selected_result(&self) -> Option<&AnalysisResult> {
        self.selected_file
            .as_deref()
            .and_then(|identifier| self.get(identifier))
    }

    /// Drop all results and the selection; the file list is kept.
    pub fn clear(&mut self) {
        self.results.clear();
        self.selected_file = None;
    }

    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary::from_results(self.results())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::analyze;

    #[test]
    fn test_record_replaces_previous_result() {
        let mut store = AnalysisStore::new();

        assert!(store.record(analyze("if (a) {}", "a.ts")).is_none());
        let replaced = store.record(analyze("", "a.ts")).unwrap();

        assert_eq!(replaced.metrics.complexity, 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a.ts").unwrap().metrics.complexity, 1);
    }

    #[test]
    fn test_clear_drops_results_and_selection() {
        let mut store = AnalysisStore::new();
        store.set_files(vec!["a.ts".into()]);
        store.record(analyze("", "a.ts"));
        store.select(Some("a.ts".into()));
        assert!(store.selected_result().is_some());

        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.selected_file(), None);
        assert_eq!(store.files(), &["a.ts".to_string()]);
    }

    #[test]
    fn test_analyzing_flag() {
        let mut store = AnalysisStore::new();
        assert!(!store.is_analyzing());
        store.begin_batch();
        assert!(store.is_analyzing());
        store.finish_batch();
        assert!(!store.is_analyzing());
    }

    #[test]
    fn test_results_are_ordered_by_identifier() {
        let mut store = AnalysisStore::new();
        store.record(analyze("", "b.ts"));
        store.record(analyze("", "a.ts"));

        let ids: Vec<&str> = store.results().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["a.ts", "b.ts"]);
    }

    #[test]
    fn test_selecting_unknown_identifier() {
        let mut store = AnalysisStore::new();
        store.select(Some("nope.ts".into()));
        assert_eq!(store.selected_file(), Some("nope.ts"));
        assert!(store.selected_result().is_none());
    }

    #[test]
    fn test_summary_counts_failures() {
        let mut store = AnalysisStore::new();
        store.record(analyze("", "a.ts"));
        store.record(AnalysisResult::acquisition_failure("b.ts", "denied"));

        let summary = store.summary();
        assert_eq!(summary.files_analyzed, 1);
        assert_eq!(summary.failed_files, 1);
    }
}
