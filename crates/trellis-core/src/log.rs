//! Logging setup on top of `tracing`.
//!
//! With `[logging] enabled = true`, events go to
//! `~/.config/trellis/logs/trellis.log`. A log that has grown past
//! `max_file_mb` is moved to `trellis.log.1` (one backup kept) before
//! the new session starts writing. Otherwise events go to stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "trellis.log";
const BACKUP_FILE_NAME: &str = "trellis.log.1";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "trace", "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// `RUST_LOG` overrides the configured level. Without file logging,
/// stderr only shows warnings unless `RUST_LOG` says otherwise.
pub fn init(config: &LogConfig) {
    if config.enabled
        && let Some(file) = crate::config::config_dir().and_then(|d| open_log_file(&d, config))
    {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter(&config.level))
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Opens (creating if needed) the log file under `dir/logs`, rotating
/// it first if it exceeds the configured size.
fn open_log_file(dir: &Path, config: &LogConfig) -> Option<File> {
    let log_dir = dir.join("logs");
    fs::create_dir_all(&log_dir).ok()?;
    let path = log_dir.join(LOG_FILE_NAME);
    rotate_if_oversized(&path, config.max_file_mb * 1024 * 1024);
    OpenOptions::new().create(true).append(true).open(&path).ok()
}

fn rotate_if_oversized(path: &Path, max_bytes: u64) {
    let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    if max_bytes > 0 && size >= max_bytes {
        let _ = fs::rename(path, backup_path(path));
    }
}

fn backup_path(path: &Path) -> PathBuf {
    path.with_file_name(BACKUP_FILE_NAME)
}
