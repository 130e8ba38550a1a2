// CLI module - command-line argument parsing and handlers
//
// Without a subcommand pageboard runs the TUI. Subcommands:
// - render: build the page headlessly and print it (html, outline, json)
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --path: Show config file path

use crate::board::{self, Board};
use crate::component::PageComponent;
use crate::config::{Config, VERSION};
use crate::dom::{render, MountTree};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// pageboard - a page of removable content slots
#[derive(Parser, Debug)]
#[command(name = "pageboard")]
#[command(version = VERSION)]
#[command(about = "Compose a page of removable content slots", long_about = None)]
pub struct Cli {
    /// Board file to load (overrides config and PAGEBOARD_BOARD)
    #[arg(long, global = true)]
    pub board: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the page without the TUI and print it
    Render {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Close the slot at this index before printing (repeatable, applied in order)
        #[arg(long = "close", value_name = "INDEX")]
        close: Vec<usize>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// How `render` prints the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Outline,
    Json,
}

/// Handle `pageboard config`. Returns true if the config subcommand ran (exit after).
pub fn handle_config_command(cli: &Cli) -> Result<bool> {
    let Some(Commands::Config {
        show,
        reset,
        edit,
        path,
    }) = &cli.command
    else {
        return Ok(false);
    };

    if *path {
        println!("{}", config_path_or_err()?.display());
    } else if *show {
        print!("{}", config_report(&Config::from_env()?, Config::config_path().as_deref()));
    } else if *reset {
        let path = config_path_or_err()?;
        if reset_config(&path, confirm_overwrite)? {
            println!("Config reset to defaults: {}", path.display());
        } else {
            println!("Aborted.");
        }
    } else if *edit {
        edit_config()?;
    } else {
        println!("Usage: pageboard config [--show|--reset|--edit|--path]");
    }
    Ok(true)
}

/// Build a page from `board`, apply closes, and format it
pub fn render_board(
    config: &Config,
    board: &Board,
    format: OutputFormat,
    close: &[usize],
) -> Result<String> {
    let mut tree = MountTree::new();
    let page = PageComponent::new(&mut tree, config.slot_options());
    board.populate(&page, &mut tree)?;

    for index in close {
        page.close_item(&mut tree, *index)
            .with_context(|| format!("Failed to close slot {}", index))?;
    }

    let output = match format {
        OutputFormat::Html => render::to_html(&tree, page.element()),
        OutputFormat::Outline => render::outline(&tree, page.element()).join("\n") + "\n",
        OutputFormat::Json => {
            let snapshot = render::snapshot(&tree, page.element())
                .context("Page element missing from tree")?;
            serde_json::to_string_pretty(&snapshot)? + "\n"
        }
    };
    Ok(output)
}

/// `pageboard render`
pub fn handle_render(cli: &Cli, config: &Config) -> Result<()> {
    let Some(Commands::Render { format, close }) = &cli.command else {
        bail!("render called without the render subcommand");
    };

    let board_path = cli.board.as_deref().or(config.board_file.as_deref());
    let board = board::resolve(board_path, config.demo_board)?;
    let output = render_board(config, &board, *format, close)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn config_path_or_err() -> Result<PathBuf> {
    Config::config_path().context("Could not determine config path")
}

/// Effective configuration as TOML, followed by where it came from
fn config_report(config: &Config, path: Option<&Path>) -> String {
    let source = match path {
        Some(path) if path.exists() => format!("# Source: {}", path.display()),
        _ => "# Source: defaults (no config file)".to_string(),
    };
    format!(
        "# Effective configuration (env > file > defaults)\n\n{}\n{}\n",
        config.to_toml(),
        source
    )
}

/// Write the default config to `path`, asking `confirm` first if it exists
///
/// Returns false when the user declined.
fn reset_config(path: &Path, confirm: impl FnOnce(&Path) -> Result<bool>) -> Result<bool> {
    if path.exists() && !confirm(path)? {
        return Ok(false);
    }

    Config::write_default(path)?;
    Ok(true)
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    eprint!("Config file exists at {}. Overwrite? [y/N] ", path.display());
    std::io::stderr().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Editor to launch: $EDITOR, then $VISUAL, then a platform default
fn editor_from(env: impl Fn(&str) -> Option<String>) -> String {
    ["EDITOR", "VISUAL"]
        .into_iter()
        .filter_map(|key| env(key))
        .find(|e| !e.trim().is_empty())
        .unwrap_or_else(|| if cfg!(windows) { "notepad" } else { "nano" }.to_string())
}

fn edit_config() -> Result<()> {
    let path = config_path_or_err()?;
    if !path.exists() {
        reset_config(&path, |_| Ok(true))?;
        println!("Created new config file: {}", path.display());
    }

    let editor = editor_from(|key| std::env::var(key).ok());
    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status().with_context(|| {
        format!(
            "Failed to launch editor '{}'. Set $EDITOR to your preferred editor",
            editor
        )
    })?;
    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ContentSpec, SlotPolicy};

    fn three_notes() -> Board {
        Board {
            items: ["A", "B", "C"]
                .iter()
                .map(|t| ContentSpec::Note {
                    title: t.to_string(),
                    body: format!("{} body", t),
                })
                .collect(),
        }
    }

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::try_parse_from([
            "pageboard", "render", "--format", "outline", "--close", "1", "--close", "0",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Render { format, close }) => {
                assert_eq!(format, OutputFormat::Outline);
                assert_eq!(close, vec![1, 0]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_board_flag() {
        let cli = Cli::try_parse_from(["pageboard", "--board", "b.toml"]).unwrap();
        assert_eq!(cli.board, Some(PathBuf::from("b.toml")));
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["pageboard", "render", "--board", "b.json"]).unwrap();
        assert_eq!(cli.board, Some(PathBuf::from("b.json")));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["pageboard", "render", "--format", "pdf"]).is_err());
    }

    #[test]
    fn test_render_outline_after_close() {
        let output = render_board(
            &Config::default(),
            &three_notes(),
            OutputFormat::Outline,
            &[1],
        )
        .unwrap();

        assert!(output.starts_with("ul.page\n"));
        assert_eq!(output.matches("li.page-item").count(), 2);
        assert!(output.contains("\"A\""));
        assert!(!output.contains("\"B\""));
        assert!(output.contains("\"C\""));
        assert!(output.find("\"A\"") < output.find("\"C\""));
    }

    #[test]
    fn test_render_html_contains_close_glyph() {
        let config = Config {
            close_glyph: "[x]".to_string(),
            ..Config::default()
        };
        let output = render_board(&config, &three_notes(), OutputFormat::Html, &[]).unwrap();
        assert_eq!(output.matches("<button class=\"close\">[x]</button>").count(), 3);
        assert!(output.starts_with("<ul class=\"page\">"));
    }

    #[test]
    fn test_render_json_snapshot() {
        let config = Config {
            slot_policy: SlotPolicy::Append,
            ..Config::default()
        };
        let output = render_board(&config, &three_notes(), OutputFormat::Json, &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["tag"], "ul");
        assert_eq!(value["children"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_config_report_names_source() {
        let report = config_report(&Config::default(), None);
        assert!(report.starts_with("# Effective configuration"));
        assert!(report.contains("slot_policy = \"replace\""));
        assert!(report.trim_end().ends_with("# Source: defaults (no config file)"));
    }

    #[test]
    fn test_reset_config_respects_confirmation() {
        let dir = std::env::temp_dir().join(format!("pageboard-reset-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let _ = std::fs::remove_dir_all(&dir);

        // Missing file: written without asking
        assert!(reset_config(&path, |_| panic!("should not ask")).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), Config::default().to_toml());

        std::fs::write(&path, "theme = \"Nord\"").unwrap();
        assert!(!reset_config(&path, |_| Ok(false)).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "theme = \"Nord\"");

        assert!(reset_config(&path, |_| Ok(true)).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), Config::default().to_toml());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_editor_lookup_order() {
        let env = |pairs: &'static [(&'static str, &'static str)]| {
            move |key: &str| {
                pairs
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| v.to_string())
            }
        };
        assert_eq!(editor_from(env(&[("EDITOR", "vim"), ("VISUAL", "code")])), "vim");
        assert_eq!(editor_from(env(&[("VISUAL", "code")])), "code");
        assert_eq!(editor_from(env(&[("EDITOR", " "), ("VISUAL", "code")])), "code");
        let fallback = if cfg!(windows) { "notepad" } else { "nano" };
        assert_eq!(editor_from(env(&[])), fallback);
    }

    #[test]
    fn test_render_close_out_of_range() {
        let err = render_board(
            &Config::default(),
            &three_notes(),
            OutputFormat::Html,
            &[0, 0, 0, 0],
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to close slot 0"));
    }
}
