use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber used by every tool. `RUST_LOG` overrides the
/// default `info` level. Logs go to stderr so stdout stays free for tool output.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
