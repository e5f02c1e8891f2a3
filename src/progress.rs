//! Progress feedback for batch analysis.
//!
//! Bars are drawn on stderr with `indicatif` and only when stderr is a
//! terminal. Quiet mode (`--quiet` or `CODEMETRICS_QUIET`) hides them.
//!
//! ```rust,no_run
//! use codemetrics::progress::{ProgressConfig, ProgressManager, TEMPLATE_FILE_ANALYSIS};
//!
//! let manager = ProgressManager::new(ProgressConfig::from_env(false, 0));
//! let progress = manager.create_bar(10, TEMPLATE_FILE_ANALYSIS);
//! progress.set_message("Analyzing files");
//! for _ in 0..10 {
//!     progress.inc(1);
//! }
//! progress.finish_and_clear();
//! ```

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Arc;

pub const QUIET_ENV_VAR: &str = "CODEMETRICS_QUIET";

pub const TEMPLATE_FILE_ANALYSIS: &str = "{msg} {pos}/{len} files ({percent}%) - {eta}";
pub const TEMPLATE_SPINNER: &str = "{spinner} {msg}";

#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    /// Suppress all progress output
    pub quiet_mode: bool,
    pub verbosity: u8,
}

impl ProgressConfig {
    pub fn from_env(quiet: bool, verbosity: u8) -> Self {
        let env_quiet = std::env::var(QUIET_ENV_VAR).is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
            verbosity,
        }
    }

    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }
}

#[derive(Clone)]
pub struct ProgressManager {
    multi: Arc<MultiProgress>,
    config: ProgressConfig,
}

impl ProgressManager {
    pub fn new(config: ProgressConfig) -> Self {
        Self {
            multi: Arc::new(MultiProgress::new()),
            config,
        }
    }

    /// Progress bar with a known length; hidden when progress is suppressed
    pub fn create_bar(&self, len: u64, template: &str) -> ProgressBar {
        if !self.config.should_show_progress() {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::default_bar()
            .template(template)
            .unwrap_or_else(|e| {
                log::debug!("Invalid progress template {:?}: {}", template, e);
                ProgressStyle::default_bar()
            })
            .progress_chars("█▓▒░  ");
        let pb = self.multi.add(ProgressBar::new(len));
        pb.set_style(style);
        pb
    }

    /// Spinner for work of unknown length, such as walking directories
    pub fn create_spinner(&self, msg: &str) -> ProgressBar {
        if !self.config.should_show_progress() {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::default_spinner()
            .template(TEMPLATE_SPINNER)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(style);
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    pub fn verbosity(&self) -> u8 {
        self.config.verbosity
    }

    /// Clear bars before printing the final report
    pub fn clear(&self) -> std::io::Result<()> {
        self.multi.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_env_disables_progress() {
        std::env::set_var(QUIET_ENV_VAR, "1");
        let config = ProgressConfig::from_env(false, 0);
        assert!(!config.should_show_progress());
        std::env::remove_var(QUIET_ENV_VAR);
    }

    #[test]
    fn test_explicit_quiet_flag() {
        let config = ProgressConfig::from_env(true, 1);
        assert!(!config.should_show_progress());
        assert_eq!(config.verbosity, 1);
    }

    #[test]
    fn test_hidden_bars_in_quiet_mode() {
        let manager = ProgressManager::new(ProgressConfig {
            quiet_mode: true,
            verbosity: 0,
        });

        assert!(manager.create_bar(10, TEMPLATE_FILE_ANALYSIS).is_hidden());
        assert!(manager.create_spinner("Walking").is_hidden());
    }
}
