use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

use crate::config::{LoggingSettings, default_log_dir};

/// Send `tracing` output to `soundboard.log`; the terminal belongs to the UI.
///
/// Returns `None` (logging disabled) when no log directory can be resolved or
/// created. Keep the guard alive until exit so buffered lines get flushed.
pub fn init(settings: &LoggingSettings) -> Option<WorkerGuard> {
    let dir = settings.directory.clone().or_else(default_log_dir)?;
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(&dir, "soundboard.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_thread_names(true)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .ok()?;

    Some(guard)
}
