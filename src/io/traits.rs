//! I/O seams for the analysis pipeline.
//!
//! The analyzer is pure; everything that touches the outside world goes
//! through these traits so the batch layer can be tested with in-memory
//! sources.

use crate::errors::AnalysisError;
use std::collections::HashMap;

/// Acquires the text behind an identifier.
///
/// Implementations should be thread-safe (`Send + Sync`) to support
/// parallel batches.
pub trait ContentSource: Send + Sync {
    /// Return the full text for `identifier`.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Acquisition` when the content cannot be
    /// obtained (missing file, permission denied, invalid UTF-8, ...).
    fn read_content(&self, identifier: &str) -> Result<String, AnalysisError>;
}

/// In-memory content source keyed by identifier.
///
/// Unknown identifiers fail with `"not found"`.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, identifier: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(identifier, content);
        self
    }

    pub fn insert(&mut self, identifier: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(identifier.into(), content.into());
    }
}

impl ContentSource for MemorySource {
    fn read_content(&self, identifier: &str) -> Result<String, AnalysisError> {
        self.entries
            .get(identifier)
            .cloned()
            .ok_or_else(|| AnalysisError::acquisition(identifier, "not found"))
    }
}
