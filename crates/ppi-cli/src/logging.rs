use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const PPI_LOG_ENV: &str = "PPI_LOG";

/// Installs the stderr subscriber. `PPI_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(PPI_LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
