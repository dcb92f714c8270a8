//! Logging Infrastructure
//!
//! `RUST_LOG` wins over the configured level. Output goes to stderr, or to a
//! daily rolling file when the log directory exists.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// Fails when a global subscriber is already installed.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> anyhow::Result<()> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let installed = match log_dir.map(Path::new) {
        Some(log_path) if log_path.is_dir() => {
            let file_appender = tracing_appender::rolling::daily(log_path, "dashboard");
            subscriber.with_ansi(false).with_writer(file_appender).try_init()
        }
        _ => subscriber.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_is_reported() {
        let _ = init_logger_with_file(Some("debug"), None);
        let err = init_logger_with_file(Some("debug"), None).unwrap_err();
        assert!(err.to_string().contains("log subscriber"));
    }
}
