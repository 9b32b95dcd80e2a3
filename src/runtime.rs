//! Runtime helpers shared across binaries.
//!
//! Both binaries write their user-facing output to stderr/stdout directly;
//! tracing output also goes to stderr, so the default filter stays at `warn`
//! to keep a normal launch limited to the warning text.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PLUGCHECK_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
