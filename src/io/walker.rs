use crate::errors::Result;
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Extensions selected when none are configured
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

/// Expands a root path into the files to analyze.
///
/// Directories are walked recursively, honouring `.gitignore`. A root that is
/// itself a file, or that does not exist, is returned as is without
/// extension or ignore filtering; a missing file then surfaces as an
/// acquisition failure when it is read.
pub struct FileWalker {
    root: PathBuf,
    extensions: Vec<String>,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extensions: default_extensions(),
            ignore_patterns: vec![],
        }
    }

    /// Restrict to these extensions; an empty list selects every file.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Collect matching files in sorted order
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if self.root.is_file() || !self.root.exists() {
            return Ok(vec![self.root.clone()]);
        }

        let patterns = self
            .ignore_patterns
            .iter()
            .map(|pattern| glob::Pattern::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .filter_entry(|entry| entry.file_name() != ".git")
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path, &patterns) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        log::debug!(
            "Selected {} files under {}",
            files.len(),
            self.root.display()
        );
        Ok(files)
    }

    fn should_process(&self, path: &Path, patterns: &[glob::Pattern]) -> bool {
        if !self.extensions.is_empty() {
            let matches_extension = path
                .extension()
                .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
                .is_some_and(|ext| self.extensions.contains(&ext));
            if !matches_extension {
                return false;
            }
        }

        // Patterns may be written relative to the root or against the full path.
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        !patterns
            .iter()
            .any(|pattern| pattern.matches_path(path) || pattern.matches_path(relative))
    }
}

/// Expand several roots and return each selected file once
pub fn select_files(
    roots: &[PathBuf],
    extensions: &[String],
    ignore_patterns: &[String],
) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut selected = Vec::new();
    for root in roots {
        let files = FileWalker::new(root.clone())
            .with_extensions(extensions.to_vec())
            .with_ignore_patterns(ignore_patterns.to_vec())
            .walk()?;
        for file in files {
            if seen.insert(file.clone()) {
                selected.push(file);
            }
        }
    }
    Ok(selected)
}
