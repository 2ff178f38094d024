//! Tracing setup for the server binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::LogFormat;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber in the configured format.
pub fn init_tracing(format: LogFormat) {
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(env_filter()).init(),
    }
}

/// Run `load` under a scoped text subscriber writing to `writer`.
///
/// The log format lives in the config itself, so the global subscriber can
/// only be installed after loading. Events emitted while loading (missing
/// file, migrations) go through this one instead of being dropped.
pub fn with_startup_logging<W, T>(writer: W, load: impl FnOnce() -> T) -> T
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .finish();
    tracing::subscriber::with_default(subscriber, load)
}
