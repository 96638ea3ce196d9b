//! Tracing subscriber setup.
//!
//! Logs go to stdout; when `LOG_DIR` is set a daily-rolling file sink is
//! added on top, keeping at most `LOG_MAX_FILES` files.

use std::{env, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Keeps the background log writer alive for the process lifetime so buffered
/// lines are flushed on shutdown.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false);

    match env::var("LOG_DIR") {
        Ok(dir) => {
            let stdout = std::io::stdout.with_max_level(tracing::Level::INFO);
            builder.with_writer(stdout.and(file_writer(&dir))).init();
        }
        Err(_) => builder.init(),
    }

    tracing::info!("logger initialized");
}

fn file_writer(dir: &str) -> NonBlocking {
    let mut builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("lolbot.log");

    if let Some(max) = env::var("LOG_MAX_FILES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
    {
        builder = builder.max_log_files(max);
    }

    let appender = builder.build(dir).expect("failed to create log file");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    LOG_GUARD.set(guard).expect("LOG_GUARD already set");
    writer
}
