//! Batch analysis over many identifiers.
//!
//! Each identifier is acquired through a [`ContentSource`] and analyzed
//! independently. Acquisition failures never abort a batch: each one is
//! converted into a degenerate result (complexity 0) carrying a single error
//! issue, so the batch always yields exactly one result per identifier, in
//! input order.
//!
//! # Example
//!
//! ```rust
//! use codemetrics::analyzers::batch::analyze_batch;
//! use codemetrics::config::ParallelConfig;
//! use codemetrics::io::MemorySource;
//!
//! let source = MemorySource::new().with_entry("a.ts", "if (x) {}");
//! let ids = vec!["a.ts".to_string(), "b.ts".to_string()];
//!
//! let results = analyze_batch(&source, &ids, &ParallelConfig::default());
//! assert_eq!(results[0].metrics.complexity, 2);
//! assert!(results[1].is_degenerate());
//! ```

use crate::analyzers::analyze;
use crate::config::ParallelConfig;
use crate::core::AnalysisResult;
use crate::io::traits::ContentSource;
use crate::store::AnalysisStore;
use indicatif::ProgressBar;
use rayon::prelude::*;

/// Acquire and analyze a single identifier
pub fn analyze_identifier<S>(source: &S, identifier: &str) -> AnalysisResult
where
    S: ContentSource + ?Sized,
{
    match source.read_content(identifier) {
        Ok(content) => {
            log::debug!("Analyzing {} ({} bytes)", identifier, content.len());
            analyze(&content, identifier)
        }
        Err(e) => {
            log::warn!("Failed to read {}: {}", identifier, e);
            AnalysisResult::acquisition_failure(identifier, e)
        }
    }
}

/// Analyze identifiers, in parallel when the config allows it
pub fn analyze_batch<S>(
    source: &S,
    identifiers: &[String],
    config: &ParallelConfig,
) -> Vec<AnalysisResult>
where
    S: ContentSource + ?Sized,
{
    analyze_batch_with_progress(source, identifiers, config, &ProgressBar::hidden())
}

/// Same as [`analyze_batch`], ticking `progress` once per identifier
pub fn analyze_batch_with_progress<S>(
    source: &S,
    identifiers: &[String],
    config: &ParallelConfig,
    progress: &ProgressBar,
) -> Vec<AnalysisResult>
where
    S: ContentSource + ?Sized,
{
    let run = |identifier: &String| {
        let result = analyze_identifier(source, identifier);
        progress.inc(1);
        result
    };

    let results: Vec<AnalysisResult> = if !config.enabled || identifiers.len() <= 1 {
        identifiers.iter().map(run).collect()
    } else {
        identifiers
            .chunks(config.effective_batch_size())
            .flat_map(|chunk| chunk.par_iter().map(run).collect::<Vec<_>>())
            .collect()
    };

    let failures = results.iter().filter(|r| r.is_degenerate()).count();
    log::info!(
        "Analyzed {} files ({} failed)",
        results.len() - failures,
        failures
    );
    results
}

/// Outcome of a batch recorded into a store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Identifiers analyzed in this batch, in input order
    pub analyzed: Vec<String>,
    /// Error messages from failed acquisitions, in input order
    pub notifications: Vec<String>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.notifications.is_empty()
    }
}

/// Run a batch against `store`.
///
/// Selects the identifiers, raises the analyzing flag for the duration of
/// the batch and records every result, replacing earlier results for the
/// same identifier.
pub fn analyze_into_store<S>(
    store: &mut AnalysisStore,
    source: &S,
    identifiers: Vec<String>,
    config: &ParallelConfig,
    progress: &ProgressBar,
) -> BatchReport
where
    S: ContentSource + ?Sized,
{
    if identifiers.is_empty() {
        return BatchReport::default();
    }

    store.set_files(identifiers.clone());
    store.begin_batch();

    let results = analyze_batch_with_progress(source, &identifiers, config, progress);

    let mut report = BatchReport::default();
    for result in results {
        if let Some(error) = result.first_error() {
            report.notifications.push(error.message.clone());
        }
        report.analyzed.push(result.identifier.clone());
        store.record(result);
    }

    store.finish_batch();
    report
}
