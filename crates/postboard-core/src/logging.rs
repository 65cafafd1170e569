//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "POSTBOARD_LOG";

const LOG_FILE_NAME: &str = "postboard.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/postboard/logs/`, never to the
/// terminal, which belongs to the TUI. Log level is controlled by the
/// `POSTBOARD_LOG` environment variable.
///
/// # Examples
/// ```bash
/// POSTBOARD_LOG=debug postboard
/// POSTBOARD_LOG=postboard_app=trace postboard
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via POSTBOARD_LOG
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new("postboard=info,postboard_app=info,postboard_client=info,warn")
    });

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
    tracing::info!("Postboard starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("postboard").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_lives_under_postboard_logs() {
        let dir = get_log_directory().unwrap();
        assert!(dir.ends_with("postboard/logs"));
    }
}
