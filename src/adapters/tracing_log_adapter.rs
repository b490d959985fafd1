//! Log sink backed by `tracing`.

use crate::ports::log_port::LogPort;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogAdapter;

impl LogPort for TracingLogAdapter {
    fn info(&self, message: &str) {
        tracing::info!(target: "twsconf", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "twsconf", "{message}");
    }
}

/// Installs a `fmt` subscriber on stderr. `RUST_LOG` overrides the default
/// `twsconf=info` filter.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("twsconf=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
