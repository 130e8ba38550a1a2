// pageboard - a page of removable content slots
//
// Content (images, videos, notes, todos) is composed into a page. Each
// piece sits in its own slot with a close button that removes the slot.
//
// Architecture:
// - dom: Arena mount tree the components render into
// - component: Component/Composable capabilities, page and slot components
// - board: Startup content from TOML/JSON board files
// - TUI (ratatui): Slot list, compose dialog, live logs
// - CLI (clap): Headless `render` and `config` subcommands

mod board;
mod cli;
mod component;
mod config;
mod dom;
mod error;
mod logging;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LoggingConfig, VERSION};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config subcommands print and exit before anything else starts
    if cli::handle_config_command(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env()?;
    let tui_mode = cli.command.is_none();

    // In TUI mode logs go to the in-memory buffer (stderr would garble the
    // display); headless runs log to stderr so stdout carries only output.
    // The file guard must outlive every log call so buffered lines flush.
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config.logging, tui_mode, &log_buffer);

    tracing::info!(version = VERSION, "pageboard starting");

    match &cli.command {
        Some(Commands::Render { .. }) => cli::handle_render(&cli, &config),
        Some(Commands::Config { .. }) => Ok(()),
        None => run_board(&cli, &config, log_buffer),
    }
}

/// Load the startup board and hand the page to the TUI
fn run_board(cli: &Cli, config: &Config, log_buffer: LogBuffer) -> Result<()> {
    let board_path = cli.board.as_deref().or(config.board_file.as_deref());
    let board = board::resolve(board_path, config.demo_board)?;

    let mut app = tui::app::App::new(config, log_buffer);
    app.load_board(&board)?;

    tui::run_tui(&mut app)?;

    tracing::info!(
        slots = app.slot_count(),
        closed = app.closed_count,
        "pageboard exiting"
    );
    Ok(())
}

/// Install the global subscriber
///
/// Precedence: RUST_LOG env var > config file / PAGEBOARD_LOG_LEVEL > default "info"
fn init_tracing(
    logging: &LoggingConfig,
    tui_mode: bool,
    log_buffer: &LogBuffer,
) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.default_directive()));

    let tui_layer = tui_mode.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer =
        (!tui_mode).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let (file_writer, guard) = match file_writer(logging) {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };
    // File layer uses JSON format for structured log parsing
    let file_layer = file_writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Rolling, non-blocking file writer when file logging is enabled
fn file_writer(logging: &LoggingConfig) -> Option<(NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }

    match logging.file_appender() {
        // Writes happen on a background thread
        Ok(appender) => Some(tracing_appender::non_blocking(appender)),
        Err(e) => {
            // Fall back to non-file logging
            eprintln!("Warning: {:#}", e);
            None
        }
    }
}
