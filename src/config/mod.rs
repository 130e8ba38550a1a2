//! Configuration for pageboard
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/pageboard/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::component::{SlotOptions, SlotPolicy};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;

#[cfg(test)]
mod tests;

pub use observability::{FileLogging, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_THEME: &str = "Dark";
const DEFAULT_CLOSE_GLYPH: &str = "×";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme name: "Dark", "Light", "Monokai", "Dracula", "Nord", "Solarized"
    pub theme: String,

    /// What a slot does when given content twice
    pub slot_policy: SlotPolicy,

    /// Label on every slot's close button
    pub close_glyph: String,

    /// Board file loaded at startup (TOML or JSON)
    pub board_file: Option<PathBuf>,

    /// Seed sample content when no board file is configured
    pub demo_board: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            slot_policy: SlotPolicy::default(),
            close_glyph: DEFAULT_CLOSE_GLYPH.to_string(),
            board_file: None,
            demo_board: true,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub slot_policy: Option<String>,
    pub close_glyph: Option<String>,
    pub board_file: Option<String>,
    pub demo_board: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/pageboard/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("pageboard").join("config.toml"))
    }

    /// Write the default template to `path`, creating parent directories
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Error creating directory {}", parent.display()))?;
        }
        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("Error writing config {}", path.display()))
    }

    /// Seed the template on first run so the options are discoverable.
    /// An existing file is never touched; failures are ignored.
    pub fn ensure_config_exists() {
        if let Some(path) = Self::config_path().filter(|p| !p.exists()) {
            let _ = Self::write_default(&path);
        }
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be read or parsed is an error:
    /// a broken config should fail loudly, not silently fall back to defaults.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("Cannot read config file {}", path.display())),
        }
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config()?;
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed config file with environment lookups
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("PAGEBOARD_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Slot policy: env > file > default ("replace")
        let slot_policy = env("PAGEBOARD_SLOT_POLICY")
            .or(file.slot_policy)
            .map(|s| SlotPolicy::from_str(&s))
            .unwrap_or(defaults.slot_policy);

        // Close glyph: file > default
        let close_glyph = file
            .close_glyph
            .filter(|g| !g.trim().is_empty())
            .unwrap_or(defaults.close_glyph);

        // Board file: env > file > none
        let board_file = env("PAGEBOARD_BOARD")
            .or(file.board_file)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let demo_board = file.demo_board.unwrap_or(defaults.demo_board);

        // Log level: env > file > default (RUST_LOG still wins at subscriber setup)
        let logging = LoggingConfig::merged(file.logging, env("PAGEBOARD_LOG_LEVEL"));

        Self {
            theme,
            slot_policy,
            close_glyph,
            board_file,
            demo_board,
            logging,
        }
    }

    /// Options handed to every slot the page creates
    pub fn slot_options(&self) -> SlotOptions {
        SlotOptions {
            policy: self.slot_policy,
            close_glyph: self.close_glyph.clone(),
        }
    }
}
