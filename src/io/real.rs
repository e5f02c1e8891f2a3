//! File system implementation of [`ContentSource`].

use crate::errors::AnalysisError;
use crate::io::traits::ContentSource;
use std::fs;

/// Reads identifiers as UTF-8 file paths.
///
/// Thread-safe and cheap to share across a rayon batch.
#[derive(Debug, Default, Clone)]
pub struct FsContentSource;

impl FsContentSource {
    pub fn new() -> Self {
        Self
    }
}

impl ContentSource for FsContentSource {
    fn read_content(&self, identifier: &str) -> Result<String, AnalysisError> {
        fs::read_to_string(identifier)
            .map_err(|e| AnalysisError::acquisition(identifier, e.to_string()))
    }
}
