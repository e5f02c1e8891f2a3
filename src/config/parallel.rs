//! Parallelism configuration for batch analysis.

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_batch_size() -> usize {
    100
}

fn default_batch_size_option() -> Option<usize> {
    Some(default_batch_size())
}

/// Controls how a batch of files is processed.
///
/// When enabled, files are analyzed concurrently on rayon's global pool,
/// in chunks of `batch_size` so progress stays responsive on large trees.
///
/// # Example
///
/// ```rust
/// use codemetrics::config::ParallelConfig;
///
/// let config = ParallelConfig {
///     enabled: true,
///     jobs: 4,
///     batch_size: Some(50),
/// };
/// assert_eq!(config.effective_batch_size(), 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Enable parallel processing (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Worker threads; 0 means one per available core
    #[serde(default)]
    pub jobs: usize,

    /// Files handed to the pool at a time (default: 100)
    #[serde(default = "default_batch_size_option")]
    pub batch_size: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            jobs: 0,
            batch_size: default_batch_size_option(),
        }
    }
}

impl ParallelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with parallel processing disabled
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Configured worker count, or the number of available cores
    pub fn effective_jobs(&self) -> usize {
        if self.jobs == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            self.jobs
        }
    }

    /// Batch size, never zero
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.unwrap_or_else(default_batch_size).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParallelConfig::default();
        assert!(config.enabled);
        assert_eq!(config.effective_batch_size(), 100);
        assert!(config.effective_jobs() >= 1);
    }

    #[test]
    fn test_zero_batch_size_is_bumped() {
        let config = ParallelConfig {
            batch_size: Some(0),
            ..Default::default()
        };
        assert_eq!(config.effective_batch_size(), 1);
    }

    #[test]
    fn test_explicit_jobs() {
        let config = ParallelConfig {
            jobs: 3,
            ..Default::default()
        };
        assert_eq!(config.effective_jobs(), 3);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ParallelConfig = toml::from_str("enabled = false").unwrap();
        assert_eq!(config, ParallelConfig::sequential());
    }
}
