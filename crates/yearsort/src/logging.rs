use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a default filter. `RUST_LOG` wins when set.
///
/// - 0: warn (extraction warnings still reach stderr)
/// - 1: info
/// - 2: debug
/// - 3+: trace
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber, writing to stderr so stdout only carries
/// the per-file lines and the summary. `log` records are bridged as well.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
