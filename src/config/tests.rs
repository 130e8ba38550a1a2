//! Configuration tests
//!
//! The round-trip tests guard the TOML template: every field written by
//! `to_toml()` must parse back into `FileConfig` and produce the same config.

use super::observability::LogRotation;
use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let reloaded = Config::from_sources(parsed.unwrap(), no_env);
    assert_eq!(reloaded, config);
}

#[test]
fn test_config_roundtrip_customized() {
    let config = Config {
        theme: "Nord".to_string(),
        slot_policy: SlotPolicy::Append,
        close_glyph: "[x]".to_string(),
        board_file: Some(PathBuf::from("/tmp/board.json")),
        demo_board: false,
        logging: LoggingConfig {
            level: "debug".to_string(),
            file_enabled: true,
            file_dir: PathBuf::from("/var/log/pageboard"),
            file_rotation: LogRotation::Hourly,
            file_prefix: "pb".to_string(),
        },
    };

    let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    assert_eq!(Config::from_sources(file, no_env), config);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::from_sources(FileConfig::default(), no_env);
    assert_eq!(config, Config::default());
    assert_eq!(config.slot_policy, SlotPolicy::Replace);
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "Light"
slot_policy = "replace"
board_file = "from-file.toml"

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("PAGEBOARD_THEME", "Dracula"),
        ("PAGEBOARD_SLOT_POLICY", "append"),
        ("PAGEBOARD_BOARD", "from-env.json"),
        ("PAGEBOARD_LOG_LEVEL", "trace"),
    ]);
    let config = Config::from_sources(file, env);

    assert_eq!(config.theme, "Dracula");
    assert_eq!(config.slot_policy, SlotPolicy::Append);
    assert_eq!(config.board_file, Some(PathBuf::from("from-env.json")));
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_file_overrides_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
close_glyph = "✕"
demo_board = false

[logging]
file_rotation = "never"
"#,
    )
    .unwrap();
    let config = Config::from_sources(file, no_env);

    assert_eq!(config.close_glyph, "✕");
    assert!(!config.demo_board);
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_blank_values_fall_back() {
    let file: FileConfig = toml::from_str(
        r#"
close_glyph = "  "
board_file = ""
slot_policy = "sideways"
"#,
    )
    .unwrap();
    let config = Config::from_sources(file, no_env);

    assert_eq!(config.close_glyph, Config::default().close_glyph);
    assert_eq!(config.board_file, None);
    assert_eq!(config.slot_policy, SlotPolicy::Replace);
}

#[test]
fn test_invalid_toml_is_rejected() {
    let parsed: Result<FileConfig, _> = toml::from_str("demo_board = \"yes\"");
    assert!(parsed.is_err());
}

#[test]
fn test_slot_options_follow_config() {
    let config = Config {
        slot_policy: SlotPolicy::Append,
        close_glyph: "x".to_string(),
        ..Config::default()
    };
    let options = config.slot_options();
    assert_eq!(options.policy, SlotPolicy::Append);
    assert_eq!(options.close_glyph, "x");
}

#[test]
fn test_log_rotation_parsing() {
    assert_eq!(LogRotation::from_str("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::Never.as_str(), "never");
}

#[test]
fn test_logging_merge_and_directive() {
    let file = FileLogging {
        level: Some("warn".to_string()),
        file_dir: Some(String::new()),
        file_prefix: Some("board".to_string()),
        ..FileLogging::default()
    };
    let logging = LoggingConfig::merged(Some(file), Some("debug".to_string()));

    assert_eq!(logging.level, "debug");
    assert_eq!(logging.file_dir, LoggingConfig::default().file_dir);
    assert_eq!(logging.file_prefix, "board");
    assert_eq!(logging.default_directive(), "pageboard=debug");

    let blank_env = LoggingConfig::merged(None, Some(" ".to_string()));
    assert_eq!(blank_env.level, "info");
}
