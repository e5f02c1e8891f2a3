use crate::io::output::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codemetrics")]
#[command(about = "Heuristic complexity, maintainability and issue metrics for source files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze files and directories
    Analyze {
        /// Files or directories to analyze
        #[arg(value_name = "PATH", default_value = ".")]
        paths: Vec<PathBuf>,

        /// Report format (default: terminal, or the config file's choice)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Extensions to select, without the dot (repeatable or comma separated)
        #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
        extensions: Vec<String>,

        /// Select every file regardless of extension
        #[arg(long, conflicts_with = "extensions")]
        all_files: bool,

        /// Worker threads (0 = one per core)
        #[arg(short, long, value_name = "N")]
        jobs: Option<usize>,

        /// Analyze files one at a time
        #[arg(long)]
        no_parallel: bool,

        /// Disable colored output
        #[arg(long)]
        plain: bool,

        /// Use this config file instead of discovering .codemetrics.toml
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Increase log verbosity (-v info, -vv debug, -vvv trace)
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,

        /// Suppress progress bars and non-error logging
        #[arg(short, long)]
        quiet: bool,
    },

    /// Write a default .codemetrics.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
