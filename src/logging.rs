//! Logging setup for keyqueue using tracing.

use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingSettings;

const DEFAULT_FILTER: &str = "info,keyqueue=debug,tower_http=debug";

/// Initialize console logging, plus a rolling log file when enabled.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process.
pub fn init(settings: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(settings.level.as_deref().unwrap_or(DEFAULT_FILTER))
    })?;

    let (file_layer, guard, log_dir) = if settings.file {
        let log_dir = match &settings.directory {
            Some(dir) => dir.clone(),
            None => get_log_dir()?,
        };
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = tracing_appender::rolling::daily(&log_dir, "keyqueue.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        (Some(layer), Some(guard), Some(log_dir))
    } else {
        (None, None, None)
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    tracing::info!("keyqueue logging initialized");
    if let Some(dir) = log_dir {
        tracing::info!("Log directory: {}", dir.display());
    }

    Ok(guard)
}

/// Get the default log directory path.
fn get_log_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "keyqueue", "keyqueue")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;

    Ok(dirs.data_dir().join("logs"))
}
