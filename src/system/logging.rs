//! Logging system initialization
//!
//! Sets up `tracing` from the `[logging]` section: level filter, text or JSON
//! output, and an optional log file with daily rotation.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{FolioError, Result};

const DEFAULT_LOG_PREFIX: &str = "folio";

/// 日志输出目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    /// 按天轮转：目录 + 文件名前缀
    Rolling { dir: PathBuf, prefix: String },
    /// 追加到单个文件
    File(PathBuf),
}

impl LogTarget {
    pub fn from_config(config: &LoggingConfig) -> Self {
        match config.file.as_deref().filter(|f| !f.is_empty()) {
            None => LogTarget::Stdout,
            Some(file) if config.enable_rotation => {
                let path = Path::new(file);
                let dir = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(Path::new("."))
                    .to_path_buf();
                let prefix = path
                    .file_name()
                    .and_then(|f| f.to_str())
                    .map(|f| f.trim_end_matches(".log").to_string())
                    .filter(|f| !f.is_empty())
                    .unwrap_or_else(|| DEFAULT_LOG_PREFIX.to_string());
                LogTarget::Rolling { dir, prefix }
            }
            Some(file) => LogTarget::File(PathBuf::from(file)),
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, LogTarget::Stdout)
    }

    fn writer(&self, max_backups: u32) -> Result<Box<dyn std::io::Write + Send + Sync>> {
        Ok(match self {
            LogTarget::Stdout => Box::new(std::io::stdout()),
            LogTarget::Rolling { dir, prefix } => Box::new(
                rolling::Builder::new()
                    .rotation(rolling::Rotation::DAILY)
                    .filename_prefix(prefix)
                    .filename_suffix("log")
                    .max_log_files(max_backups.max(1) as usize)
                    .build(dir)
                    .map_err(|e| {
                        FolioError::file_operation(format!(
                            "Failed to create rolling log appender in {}: {}",
                            dir.display(),
                            e
                        ))
                    })?,
            ),
            LogTarget::File(path) => Box::new(
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        FolioError::file_operation(format!(
                            "Failed to open log file {}: {}",
                            path.display(),
                            e
                        ))
                    })?,
            ),
        })
    }
}

/// Initialize logging system based on configuration
///
/// Must be called once, after the configuration is loaded. The returned
/// `WorkerGuard` must be kept alive so buffered lines are flushed on exit.
/// `RUST_LOG` takes precedence over `logging.level` when set.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let target = LogTarget::from_config(config);
    let (non_blocking_writer, guard) =
        tracing_appender::non_blocking(target.writer(config.max_backups)?);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.level.clone()));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(target.is_terminal());

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| FolioError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(file: Option<&str>, rotation: bool) -> LoggingConfig {
        LoggingConfig {
            file: file.map(str::to_string),
            enable_rotation: rotation,
            ..Default::default()
        }
    }

    #[test]
    fn test_stdout_without_file() {
        assert_eq!(LogTarget::from_config(&config(None, true)), LogTarget::Stdout);
        assert_eq!(LogTarget::from_config(&config(Some(""), true)), LogTarget::Stdout);
    }

    #[test]
    fn test_rolling_target_splits_path() {
        assert_eq!(
            LogTarget::from_config(&config(Some("logs/folio.log"), true)),
            LogTarget::Rolling {
                dir: PathBuf::from("logs"),
                prefix: "folio".to_string()
            }
        );
        assert_eq!(
            LogTarget::from_config(&config(Some("site.log"), true)),
            LogTarget::Rolling {
                dir: PathBuf::from("."),
                prefix: "site".to_string()
            }
        );
    }

    #[test]
    fn test_plain_file_without_rotation() {
        assert_eq!(
            LogTarget::from_config(&config(Some("folio.log"), false)),
            LogTarget::File(PathBuf::from("folio.log"))
        );
    }

    #[test]
    fn test_file_writer_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.log");
        let target = LogTarget::File(path.clone());
        assert!(target.writer(5).is_ok());
        assert!(path.exists());
    }
}
