//! `[logging]` section: level, JSON file output, rotation

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// Single file, appended forever
    Never,
}

impl LogRotation {
    /// Unrecognized names fall back to daily
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }

    fn rotation(self) -> Rotation {
        match self {
            Self::Hourly => Rotation::HOURLY,
            Self::Daily => Rotation::DAILY,
            Self::Never => Rotation::NEVER,
        }
    }
}

/// Effective logging settings
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    pub level: String,
    /// Also write JSON lines to `file_dir`
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// Log file name prefix ("pageboard" -> "pageboard.2024-01-15")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "pageboard".to_string(),
        }
    }
}

/// `[logging]` as written in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Layer the file section and an env level override over the defaults
    pub fn merged(file: Option<FileLogging>, env_level: Option<String>) -> Self {
        let file = file.unwrap_or_default();
        let mut config = Self::default();

        if let Some(level) = env_level.or(file.level).filter(|l| !l.trim().is_empty()) {
            config.level = level;
        }
        if let Some(enabled) = file.file_enabled {
            config.file_enabled = enabled;
        }
        if let Some(dir) = file.file_dir.filter(|d| !d.is_empty()) {
            config.file_dir = PathBuf::from(dir);
        }
        if let Some(rotation) = file.file_rotation {
            config.file_rotation = LogRotation::from_str(&rotation);
        }
        if let Some(prefix) = file.file_prefix.filter(|p| !p.is_empty()) {
            config.file_prefix = prefix;
        }
        config
    }

    /// EnvFilter directive used when RUST_LOG is unset
    pub fn default_directive(&self) -> String {
        format!("pageboard={}", self.level)
    }

    /// Rolling appender for the JSON log file, creating `file_dir` if needed
    pub fn file_appender(&self) -> Result<RollingFileAppender> {
        std::fs::create_dir_all(&self.file_dir)
            .with_context(|| format!("Could not create log directory {:?}", self.file_dir))?;

        RollingFileAppender::builder()
            .rotation(self.file_rotation.rotation())
            .filename_prefix(self.file_prefix.as_str())
            .build(&self.file_dir)
            .with_context(|| format!("Could not open log file in {:?}", self.file_dir))
    }
}
