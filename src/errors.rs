//! Error types for codemetrics.
//!
//! The scoring functions themselves are total and never fail. Errors only
//! arise at the edges: acquiring file content, discovering files, loading
//! configuration and writing reports.
//!
//! Acquisition failures are special: the batch layer never propagates them,
//! it converts each one into a degenerate [`AnalysisResult`] so that callers
//! can render a uniform issue list.
//!
//! [`AnalysisResult`]: crate::core::AnalysisResult

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Content for an identifier could not be obtained
    #[error("{message}")]
    Acquisition { identifier: String, message: String },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Walk(#[from] ignore::Error),
}

impl AnalysisError {
    pub fn acquisition(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Acquisition {
            identifier: identifier.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn is_acquisition(&self) -> bool {
        matches!(self, Self::Acquisition { .. })
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
