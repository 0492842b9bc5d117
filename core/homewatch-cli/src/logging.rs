//! File logging for the homewatch CLI.
//!
//! Logs go to a daily-rotating file under `~/.homewatch/logs` so console
//! output stays reserved for command results. Returns a guard that must be
//! held for the lifetime of the process to flush buffered log lines.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub fn init() -> Option<WorkerGuard> {
    let log_dir = homewatch_core::get_log_dir()?;
    std::fs::create_dir_all(&log_dir).ok()?;

    let appender = tracing_appender::rolling::daily(log_dir, "homewatch.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}
