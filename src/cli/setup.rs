//! Runtime setup: logging and the rayon thread pool.

use log::LevelFilter;

/// Log level for a `-v` count; quiet wins over verbosity
pub fn level_for_verbosity(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize env_logger. `RUST_LOG` overrides the verbosity flags.
pub fn init_logging(verbosity: u8, quiet: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity, quiet))
        .format_timestamp(None)
        .parse_default_env();

    // A second initialization (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}

/// Configure rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        log::debug!("Thread pool already configured: {}", e);
    }
}
