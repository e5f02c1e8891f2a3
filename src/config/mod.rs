//! Configuration for codemetrics.
//!
//! Settings come from `.codemetrics.toml`, found in the working directory or
//! one of its ancestors, or named explicitly on the command line. Every
//! section is optional. Command-line flags override the file and the file
//! overrides built-in defaults.
//!
//! Scoring constants are not configurable.

mod core;
mod loader;
mod parallel;

pub use self::core::{CodemetricsConfig, OutputConfig, SelectionConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;

/// Contents written by `codemetrics init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# codemetrics configuration

[selection]
extensions = ["js", "jsx", "ts", "tsx"]
ignore = [
    "**/node_modules/**",
    "**/dist/**",
    "**/*.min.js",
]

[output]
default_format = "terminal"

[parallel]
enabled = true
jobs = 0
"#;
