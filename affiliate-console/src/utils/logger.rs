//! Logging setup
//!
//! Console output by default; a daily rolling file under `log_dir` when one is
//! configured. Calling either initializer twice is harmless, the second call
//! is ignored.

use std::path::Path;

/// File name prefix for rolling log files
const LOG_FILE_PREFIX: &str = "affiliate-console";

/// Initialize the logger at `info`, console only
pub fn init_logger() {
    // Console-only setup cannot fail on the filesystem
    let _ = init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output.
///
/// The log directory is created when missing.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> std::io::Result<()> {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        std::fs::create_dir_all(log_path)?;
        let file_appender = tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX);
        let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
        return Ok(());
    }

    let _ = subscriber.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_logger_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs");
        let dir_str = dir.to_str().unwrap();

        init_logger_with_file(Some("debug"), Some(dir_str)).unwrap();
        assert!(dir.is_dir());

        // Already initialized, must not panic
        init_logger();
    }
}
