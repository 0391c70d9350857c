//! File logging for the recipe browser
//!
//! The TUI owns stdout, so every tracing event goes to a daily log file.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "MEALDECK_LOG";

/// Environment variable overriding the log directory
pub const LOG_DIR_ENV_VAR: &str = "MEALDECK_LOG_DIR";

/// Filter used when `MEALDECK_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str =
    "mealdeck=info,mealdeck_api=info,mealdeck_app=info,mealdeck_tui=info,warn";

const LOG_FILE_PREFIX: &str = "mealdeck.log";

/// Start logging to `<data dir>/mealdeck/logs/mealdeck.log.<date>`
///
/// Returns the directory the log files land in.
///
/// ```bash
/// MEALDECK_LOG=mealdeck_api=debug mealdeck
/// MEALDECK_LOG_DIR=/tmp/mealdeck mealdeck
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory(
        std::env::var_os(LOG_DIR_ENV_VAR).map(PathBuf::from),
        dirs::data_local_dir(),
    );
    std::fs::create_dir_all(&log_dir)?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer(&log_dir))
        .init();

    tracing::info!(
        "mealdeck {} starting, logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    Ok(log_dir)
}

fn file_layer<S>(log_dir: &Path) -> impl tracing_subscriber::Layer<S> + Send + Sync + 'static
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + 'static,
{
    let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
    fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::ChronoLocal::new("%H:%M:%S%.3f".to_string()))
}

/// An explicit directory wins; otherwise `mealdeck/logs` under the data dir,
/// or under the working directory when the platform has none
fn log_directory(explicit: Option<PathBuf>, data_dir: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        data_dir
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mealdeck")
            .join("logs")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_log_directory_wins() {
        let dir = log_directory(
            Some(PathBuf::from("/tmp/md-logs")),
            Some(PathBuf::from("/home/me/.local/share")),
        );
        assert_eq!(dir, PathBuf::from("/tmp/md-logs"));
    }

    #[test]
    fn test_log_directory_under_data_dir() {
        let dir = log_directory(None, Some(PathBuf::from("/home/me/.local/share")));
        assert_eq!(dir, PathBuf::from("/home/me/.local/share/mealdeck/logs"));
    }

    #[test]
    fn test_log_directory_without_data_dir() {
        assert_eq!(log_directory(None, None), PathBuf::from("./mealdeck/logs"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
