use crate::analyzers::batch::analyze_into_store;
use crate::cli::configure_thread_pool;
use crate::config::{load_config, load_config_from, CodemetricsConfig, ParallelConfig};
use crate::core::AnalysisResult;
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::{select_files, FsContentSource};
use crate::progress::{ProgressConfig, ProgressManager, TEMPLATE_FILE_ANALYSIS};
use crate::store::AnalysisStore;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Options collected from the `analyze` subcommand
#[derive(Debug, Clone, Default)]
pub struct AnalyzeConfig {
    pub paths: Vec<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub all_files: bool,
    pub jobs: Option<usize>,
    pub no_parallel: bool,
    pub plain: bool,
    pub config_path: Option<PathBuf>,
    pub verbosity: u8,
    pub quiet: bool,
}

/// Effective settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeSettings {
    pub extensions: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub format: OutputFormat,
    pub parallel: ParallelConfig,
    pub formatting: FormattingConfig,
}

impl AnalyzeSettings {
    pub fn resolve(config: &AnalyzeConfig, file_config: &CodemetricsConfig) -> Self {
        let extensions = if config.all_files {
            Vec::new()
        } else if !config.extensions.is_empty() {
            config.extensions.clone()
        } else {
            file_config.get_extensions()
        };

        let mut parallel = file_config.get_parallel();
        if let Some(jobs) = config.jobs {
            parallel.jobs = jobs;
        }
        if config.no_parallel {
            parallel.enabled = false;
        }

        // Reports written to a file never carry escape codes.
        let formatting = if config.plain || config.output.is_some() {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env().with_preference(file_config.get_use_color())
        };

        Self {
            extensions,
            ignore_patterns: file_config.get_ignore_patterns(),
            format: config
                .format
                .or_else(|| file_config.get_default_format())
                .unwrap_or_default(),
            parallel,
            formatting,
        }
    }
}

/// Select files under `paths` and analyze them, in selection order
pub fn run_analysis(
    paths: &[PathBuf],
    settings: &AnalyzeSettings,
    progress: &ProgressManager,
) -> Result<Vec<AnalysisResult>> {
    let spinner = progress.create_spinner("Discovering files");
    let files = select_files(paths, &settings.extensions, &settings.ignore_patterns)
        .context("Failed to select files")?;
    spinner.finish_and_clear();
    log::info!("Selected {} files", files.len());

    let identifiers: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();

    let bar = progress.create_bar(identifiers.len() as u64, TEMPLATE_FILE_ANALYSIS);
    bar.set_message("Analyzing");
    let mut store = AnalysisStore::new();
    let report = analyze_into_store(
        &mut store,
        &FsContentSource::new(),
        identifiers,
        &settings.parallel,
        &bar,
    );
    bar.finish_and_clear();

    if report.has_failures() {
        log::warn!("{} files could not be read", report.notifications.len());
    }

    Ok(report
        .analyzed
        .iter()
        .filter_map(|identifier| store.get(identifier).cloned())
        .collect())
}

/// Render results in `format` into a byte buffer
pub fn render_report(
    results: &[AnalysisResult],
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut writer = create_writer(format, Box::new(&mut buffer), formatting);
        writer.write_results(results)?;
    }
    Ok(buffer)
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let file_config = match &config.config_path {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };
    let settings = AnalyzeSettings::resolve(&config, &file_config);

    if settings.parallel.enabled {
        configure_thread_pool(settings.parallel.jobs);
    }

    let progress = ProgressManager::new(ProgressConfig::from_env(config.quiet, config.verbosity));
    let results = run_analysis(&config.paths, &settings, &progress)?;
    let _ = progress.clear();

    let report = render_report(&results, settings.format, settings.formatting)?;
    match &config.output {
        Some(path) => {
            fs::write(path, &report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            log::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&report)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, SelectionConfig};
    use crate::formatting::ColorMode;
    use tempfile::TempDir;

    fn quiet_progress() -> ProgressManager {
        ProgressManager::new(ProgressConfig {
            quiet_mode: true,
            verbosity: 0,
        })
    }

    #[test]
    fn test_flags_override_config_file() {
        let file_config = CodemetricsConfig {
            selection: Some(SelectionConfig {
                extensions: Some(vec!["rs".into()]),
                ignore: vec!["target/**".into()],
            }),
            output: Some(OutputConfig {
                default_format: Some(OutputFormat::Markdown),
                use_color: Some(true),
            }),
            parallel: Some(ParallelConfig {
                jobs: 8,
                ..Default::default()
            }),
        };
        let config = AnalyzeConfig {
            format: Some(OutputFormat::Json),
            extensions: vec!["ts".into()],
            jobs: Some(2),
            no_parallel: true,
            plain: true,
            ..Default::default()
        };

        let settings = AnalyzeSettings::resolve(&config, &file_config);
        assert_eq!(settings.extensions, vec!["ts"]);
        assert_eq!(settings.ignore_patterns, vec!["target/**"]);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.parallel.jobs, 2);
        assert!(!settings.parallel.enabled);
        assert_eq!(settings.formatting.color, ColorMode::Never);
    }

    #[test]
    fn test_config_file_fills_gaps() {
        let file_config = CodemetricsConfig {
            output: Some(OutputConfig {
                default_format: Some(OutputFormat::Markdown),
                use_color: None,
            }),
            ..Default::default()
        };
        let settings = AnalyzeSettings::resolve(&AnalyzeConfig::default(), &file_config);
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.extensions, vec!["js", "jsx", "ts", "tsx"]);
        assert!(settings.parallel.enabled);
    }

    #[test]
    fn test_all_files_clears_extension_filter() {
        let config = AnalyzeConfig {
            all_files: true,
            ..Default::default()
        };
        let settings = AnalyzeSettings::resolve(&config, &CodemetricsConfig::default());
        assert!(settings.extensions.is_empty());
    }

    #[test]
    fn test_run_analysis_reports_missing_paths() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.ts"), "if (a) {}\n").unwrap();
        let missing = dir.path().join("missing.ts");

        let config = AnalyzeConfig {
            no_parallel: true,
            ..Default::default()
        };
        let settings = AnalyzeSettings::resolve(&config, &CodemetricsConfig::default());
        let paths = vec![dir.path().to_path_buf(), missing.clone()];
        let results = run_analysis(&paths, &settings, &quiet_progress()).unwrap();

        assert_eq!(results.len(), 2);
        assert!(results[0].identifier.ends_with("a.ts"));
        assert_eq!(results[0].metrics.complexity, 2);
        assert_eq!(results[1].identifier, missing.display().to_string());
        assert!(results[1].is_degenerate());
    }

    #[test]
    fn test_render_report_json() {
        let results = vec![crate::analyzers::analyze("", "empty.ts")];
        let bytes =
            render_report(&results, OutputFormat::Json, FormattingConfig::plain()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value[0]["metrics"]["maintainability"], 98);
    }
}
