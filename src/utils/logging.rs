use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence, then `--verbose`, then the configured level.
/// The configured level has already been validated by the config parser.
pub fn init_logging(verbose: bool, configured_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("vcmp=debug")
        } else {
            EnvFilter::new(configured_level)
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
