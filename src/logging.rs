use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. Verbosity is controlled via `RUST_LOG`;
/// defaults to `info` so pass-level diagnostics stay quiet unless asked for.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
