use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Route diagnostics to a file in the temp directory; stdout belongs to the
/// UI. `RUST_LOG` filters as usual, defaulting to `info`.
///
/// Returns the appender guard; dropping it flushes buffered lines. `None`
/// means another subscriber was already installed (tests).
pub fn init() -> Option<WorkerGuard> {
    let appender = tracing_appender::rolling::never(std::env::temp_dir(), "widgetZoom.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
