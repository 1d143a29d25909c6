use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Diagnostics go to stderr so stdout carries only the report. The filter is
/// read from `RUST_LOG` and defaults to `warn`.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
