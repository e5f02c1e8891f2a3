//! Command implementations behind the CLI.
//!
//! - **analyze**: select files, analyze them and write a report
//! - **init**: write a default `.codemetrics.toml`

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, render_report, run_analysis, AnalyzeConfig, AnalyzeSettings};
pub use init::{init_config, init_config_in};
