use anyhow::Result;
use codemetrics::cli::{init_logging, Cli, Commands};
use codemetrics::commands::{handle_analyze, init_config, AnalyzeConfig};

fn main() -> Result<()> {
    let cli = codemetrics::cli::parse_args();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            paths,
            format,
            output,
            extensions,
            all_files,
            jobs,
            no_parallel,
            plain,
            config,
            verbose,
            quiet,
        } => {
            init_logging(verbose, quiet);
            handle_analyze(AnalyzeConfig {
                paths,
                format,
                output,
                extensions,
                all_files,
                jobs,
                no_parallel,
                plain,
                config_path: config,
                verbosity: verbose,
                quiet,
            })
        }
        Commands::Init { force } => {
            init_logging(0, false);
            init_config(force)
        }
    }
}
