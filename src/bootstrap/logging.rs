use tracing_subscriber::EnvFilter;

/// Log filter variable, e.g. `DEPMAP_LOG=depmap_resolver=debug`
pub const LOG_ENV: &str = "DEPMAP_LOG";

pub fn initialize() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout belongs to the rpm build log echo
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
