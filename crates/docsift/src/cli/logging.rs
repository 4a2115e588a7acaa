//! Diagnostic logging for the CLI.

use std::io;

use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, registry, util::SubscriberInitExt,
};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "DOCSIFT_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs a stderr fmt subscriber filtered by [`LOG_ENV`].
///
/// Accepts any `EnvFilter` directive, e.g. `debug` or `docsift_index=debug`.
pub fn init_tracing() {
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_filter(log_filter());

    if registry().with(fmt_layer).try_init().is_err() {
        eprintln!("warning: tracing subscriber already initialized");
    }
}

/// Builds the filter from the environment.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
