//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments
//! Features:
//! - Console output (pretty for development, JSON for production)
//! - Optional daily rotating log files, deleted after 14 days

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::Layered;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// Rolling log file prefix
const LOG_FILE_PREFIX: &str = "cart-engine.log";

/// Days a rotated log file is kept
const LOG_RETENTION_DAYS: i64 = 14;

type ConsoleLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// Clean up rotated log files older than 14 days
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    let cutoff = chrono::Local::now().date_naive() - chrono::Duration::days(LOG_RETENTION_DAYS);
    let mut removed = 0;

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        // cart-engine.log.YYYY-MM-DD
        if let Some(date_part) = name
            .strip_prefix(LOG_FILE_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
            && let Ok(date) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }

    Ok(removed)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level or EnvFilter directive (e.g., "info", "cart_engine=debug")
/// * `json_format` - Whether to use JSON format on the console
/// * `log_dir` - Optional directory for daily rotating log files
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer: ConsoleLayer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let mut removed = 0;
    let file_layer = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;
            removed = cleanup_old_logs(log_dir)?;

            let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(appender)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    if removed > 0 {
        tracing::info!(removed, "Deleted old log files");
    }
    Ok(())
}

/// Initialize the logging system (console only)
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}
