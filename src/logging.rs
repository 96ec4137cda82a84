use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the background log writer alive; dropping it flushes the file.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// The settings-derived log directory, or a temp dir when that one is
/// unavailable or cannot be created.
fn ensure_log_dir() -> Option<PathBuf> {
    let fallback = std::env::temp_dir().join("padnav").join("logs");
    padnav::services::settings::log_dir()
        .into_iter()
        .chain(std::iter::once(fallback))
        .find(|dir| std::fs::create_dir_all(dir).is_ok())
}

/// File logging only: the terminal belongs to the UI.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = ensure_log_dir()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "padnav.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("padnav=info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true),
    );
    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");
    Some(LoggingGuard { _guard: guard })
}
