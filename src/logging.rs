use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr.
///
/// The filter comes from `AUTHSYNC_LOG`, then `RUST_LOG`, defaulting to
/// `info`. Stdout is left to command output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("AUTHSYNC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
