//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "DSA_GUIDE_LOG";

/// Filter used when `DSA_GUIDE_LOG` is unset. `dsa` matches every crate of
/// the guide by target prefix.
pub const DEFAULT_FILTER: &str = "dsa=info,warn";

const LOG_FILE_NAME: &str = "dsa-guide.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/dsa-guide/logs/` because the terminal
/// UI owns stdout and the headless mode reserves it for NDJSON.
/// Log level is controlled by the `DSA_GUIDE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// DSA_GUIDE_LOG=debug cargo run
/// DSA_GUIDE_LOG=dsa_app=trace cargo run -- strings
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("DSA Guide starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("dsa-guide").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_lives_under_app_directory() {
        assert!(get_log_directory().ends_with("dsa-guide/logs"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
