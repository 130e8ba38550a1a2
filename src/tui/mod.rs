// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, redraw ticks)
// - Routing keys to the modal, the slot list, or global actions

pub mod app;
pub mod components;
pub mod modal;
pub mod theme;
pub mod traits;
pub mod views;

use crate::component::ContentKind;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use traits::Interactive;

/// Redraw interval while idle (toasts expire between key presses)
const TICK: Duration = Duration::from_millis(200);

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub fn run_tui(app: &mut App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop: draw, wait up to one tick for a key, repeat
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        if event::poll(TICK).context("Failed to poll terminal events")? {
            if let Event::Key(key_event) = event::read().context("Failed to read event")? {
                // Ignore release/repeat events on terminals that report them
                if key_event.kind == KeyEventKind::Press {
                    handle_key_event(app, key_event);
                }
            }
        }

        app.clear_expired_toast();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Slot list → Global
pub fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, key_event) {
        return;
    }

    // Layer 2: Slot list navigation
    if app.board_panel.handle_key(key_event).was_handled() {
        return;
    }

    // Layer 3: Global keys
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        if key_event.code == KeyCode::Char('c') {
            app.should_quit = true;
        }
        return;
    }

    match key_event.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.open_modal(Modal::help()),
        KeyCode::Char('x') | KeyCode::Delete => app.close_selected(),
        KeyCode::Char(c) => {
            if let Some(kind) = ContentKind::from_key(c) {
                app.open_modal(Modal::compose(kind));
            }
        }
        KeyCode::Tab => app.cycle_theme(),
        _ => {}
    }
}

/// Returns true if a modal was open and consumed the key
fn handle_modal_input(app: &mut App, key: KeyEvent) -> bool {
    let Some(modal) = app.modal.as_mut() else {
        return false;
    };

    match modal.handle_input(key) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Submit(spec) => {
            app.modal = None;
            app.add_content(&spec);
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::config::Config;
    use crate::logging::LogBuffer;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn demo_app() -> App {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        app.load_board(&Board::demo()).unwrap();
        app
    }

    #[test]
    fn test_compose_flow_adds_slot() {
        let mut app = demo_app();
        press(&mut app, KeyCode::Char('n'));
        assert!(matches!(app.modal, Some(Modal::Compose(_))));

        // 'x' and 'q' are text while the dialog is open
        type_str(&mut app, "xq");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "body");
        press(&mut app, KeyCode::Enter);

        assert!(app.modal.is_none());
        assert!(!app.should_quit);
        assert_eq!(app.slot_count(), 5);
        assert_eq!(app.rows()[4].summary, "xq body");
    }

    #[test]
    fn test_escape_cancels_compose() {
        let mut app = demo_app();
        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "Cat");
        press(&mut app, KeyCode::Esc);

        assert!(app.modal.is_none());
        assert_eq!(app.slot_count(), 4);
    }

    #[test]
    fn test_navigate_and_close() {
        let mut app = demo_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('x'));

        assert_eq!(app.slot_count(), 3);
        let titles: Vec<_> = app.rows().into_iter().map(|r| r.summary).collect();
        assert!(!titles.iter().any(|s| s.starts_with("Reading list")));
        assert_eq!(app.board_panel.selection(), Some(2));

        press(&mut app, KeyCode::Delete);
        assert_eq!(app.slot_count(), 2);
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = demo_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modal, Some(Modal::Help));

        // q closes help before it can quit
        press(&mut app, KeyCode::Char('q'));
        assert!(app.modal.is_none());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_cancels_compose_then_quits() {
        let mut app = demo_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "ab");
        handle_key_event(&mut app, ctrl_c);
        assert!(app.modal.is_none());
        assert!(!app.should_quit);
        assert_eq!(app.slot_count(), 4);

        handle_key_event(&mut app, ctrl_c);
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_cycles_theme_outside_modal() {
        let mut app = demo_app();
        let before = app.theme_kind;
        press(&mut app, KeyCode::Tab);
        assert_ne!(app.theme_kind, before);
    }
}
