use std::fs;
use std::path::{Path, PathBuf};

use super::core::CodemetricsConfig;
use crate::errors::{AnalysisError, Result};

/// File name searched for in the current directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".codemetrics.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<CodemetricsConfig> {
    toml::from_str::<CodemetricsConfig>(contents)
        .map_err(|e| AnalysisError::config(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))
}

/// Load an explicitly named config file; any failure is an error
pub fn load_config_from(path: &Path) -> Result<CodemetricsConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AnalysisError::config_with_path(format!("Failed to read {}: {e}", path.display()), path)
    })?;
    let config = toml::from_str::<CodemetricsConfig>(&contents).map_err(|e| {
        AnalysisError::config_with_path(format!("Failed to parse {}: {e}", path.display()), path)
    })?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// `start` followed by up to `max_depth - 1` of its ancestors
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
///
/// Unreadable or malformed files are logged and skipped; the search falls
/// back to defaults when nothing usable is found.
pub fn discover_config(start: &Path) -> CodemetricsConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
        .find_map(|path| match load_config_from(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("{}. Using defaults.", e);
                None
            }
        })
        .unwrap_or_else(|| {
            log::debug!(
                "No {} found after checking {} directories. Using default config.",
                CONFIG_FILE_NAME,
                MAX_TRAVERSAL_DEPTH
            );
            CodemetricsConfig::default()
        })
}

/// Discover config from the current directory
pub fn load_config() -> CodemetricsConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CodemetricsConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::output::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_ancestors_are_bounded() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_discovers_config_in_parent() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("src/deep");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[output]\ndefault_format = \"markdown\"\n",
        )
        .unwrap();

        let config = discover_config(&nested);
        assert_eq!(config.get_default_format(), Some(OutputFormat::Markdown));
    }

    #[test]
    fn test_malformed_discovered_config_falls_back() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "[output\n").unwrap();

        assert_eq!(discover_config(root.path()), CodemetricsConfig::default());
    }

    #[test]
    fn test_explicit_config_errors_surface() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("custom.toml");

        assert!(load_config_from(&path).is_err());

        fs::write(&path, "[parallel]\nenabled = \"yes\"\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::Config { path: Some(_), .. }));
    }

    #[test]
    fn test_parse_config_error_message() {
        let err = parse_config("not = [valid").unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }
}
