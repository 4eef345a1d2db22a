//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter directive for normal and quiet runs
pub const fn default_directive(quiet: bool) -> &'static str {
    if quiet { "lifecat=warn" } else { "lifecat=info" }
}

/// Build the filter, preferring `RUST_LOG` over the default directive
pub fn build_filter(quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)))
}

/// Install the global subscriber writing to stderr
///
/// Stdout is reserved for command output. Calling this more than once keeps
/// the first subscriber.
pub fn init_logging(quiet: bool) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(quiet))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
