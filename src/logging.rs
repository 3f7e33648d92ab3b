//! Tracing setup. Output goes to a file because the terminal is owned by the
//! UI's alternate screen while the game runs.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::LoggingError;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// trace, debug, info, warn or error. `RUST_LOG` directives take precedence.
    pub level: String,
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            enabled: true,
            level: "info".to_string(),
            file: PathBuf::from("connect-four.log"),
        }
    }
}

/// Install the global subscriber. Does nothing when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = build_filter(&config.level)?;
    let file = open_log_file(&config.file)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let level: Level = level
        .parse()
        .map_err(|_| LoggingError::InvalidLevel(level.to_string()))?;

    Ok(EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy())
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::OpenFile {
            path: path.to_path_buf(),
            source: e,
        })
}
