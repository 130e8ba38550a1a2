//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let board_file = match &self.board_file {
            Some(path) => format!("board_file = {:?}", path.display().to_string()),
            None => "# board_file = \"~/boards/today.toml\"".to_string(),
        };

        format!(
            r#"# pageboard configuration

# Theme: Dark, Light, Monokai, Dracula, Nord, Solarized
# Press Tab in the TUI to cycle themes
theme = "{theme}"

# What a slot does when it is given content twice
# - replace: drop the old content (a slot holds one item)
# - append: keep stacking content in the slot
slot_policy = "{slot_policy}"

# Label of every slot's close button
close_glyph = {close_glyph:?}

# Content loaded at startup (TOML or JSON, picked by extension)
{board_file}

# Seed sample content when no board file is set
demo_board = {demo_board}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir:?}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            slot_policy = self.slot_policy.as_str(),
            close_glyph = self.close_glyph,
            board_file = board_file,
            demo_board = self.demo_board,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
