use serde::{Deserialize, Serialize};

use super::parallel::ParallelConfig;
use crate::io::output::OutputFormat;
use crate::io::walker::default_extensions;

/// Root configuration structure, read from `.codemetrics.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CodemetricsConfig {
    /// Which files a directory walk selects
    #[serde(default)]
    pub selection: Option<SelectionConfig>,

    /// Report format and colour
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Batch parallelism
    #[serde(default)]
    pub parallel: Option<ParallelConfig>,
}

impl CodemetricsConfig {
    /// Extensions to select; defaults to JavaScript/TypeScript sources
    pub fn get_extensions(&self) -> Vec<String> {
        self.selection
            .as_ref()
            .and_then(|s| s.extensions.clone())
            .unwrap_or_else(default_extensions)
    }

    /// Glob patterns excluded from directory walks
    pub fn get_ignore_patterns(&self) -> Vec<String> {
        self.selection
            .as_ref()
            .map(|s| s.ignore.clone())
            .unwrap_or_default()
    }

    pub fn get_default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.default_format)
    }

    pub fn get_use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }

    pub fn get_parallel(&self) -> ParallelConfig {
        self.parallel.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SelectionConfig {
    /// File extensions without the dot; an empty list selects every file
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub ignore: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_defaults_without_sections() {
        let config = CodemetricsConfig::default();
        assert_eq!(config.get_extensions(), vec!["js", "jsx", "ts", "tsx"]);
        assert!(config.get_ignore_patterns().is_empty());
        assert_eq!(config.get_default_format(), None);
        assert_eq!(config.get_parallel(), ParallelConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config: CodemetricsConfig = toml::from_str(indoc! {r#"
            [selection]
            extensions = ["rs"]
            ignore = ["target/**"]

            [output]
            default_format = "json"
            use_color = false

            [parallel]
            enabled = false
            jobs = 2
        "#})
        .unwrap();

        assert_eq!(config.get_extensions(), vec!["rs"]);
        assert_eq!(config.get_ignore_patterns(), vec!["target/**"]);
        assert_eq!(config.get_default_format(), Some(OutputFormat::Json));
        assert_eq!(config.get_use_color(), Some(false));
        assert!(!config.get_parallel().enabled);
        assert_eq!(config.get_parallel().jobs, 2);
    }

    #[test]
    fn test_empty_extension_list_is_kept() {
        let config: CodemetricsConfig = toml::from_str("[selection]\nextensions = []").unwrap();
        assert!(config.get_extensions().is_empty());
    }
}
