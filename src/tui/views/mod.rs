// Views module - screen-level rendering logic
//
// One screen: title, slot list beside a preview of the selected slot's
// markup, logs, status. Modals and toasts draw on top.

mod modal;

use super::app::App;
use crate::dom::render;
use crate::tui::components::{logs_panel, status_bar, title_bar};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    // Apply theme background to entire frame
    f.render_widget(Block::default().style(app.theme.base_style()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Board
            Constraint::Length(8), // Logs
            Constraint::Length(2), // Status
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    render_board(f, chunks[1], app);
    logs_panel::render(f, chunks[2], &app.log_buffer, &app.theme);
    status_bar::render(f, chunks[3], app);

    if let Some(modal) = &app.modal {
        modal::render(f, modal, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

/// Slot list on the left, selected slot's markup on the right
fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let rows = app.rows();
    app.board_panel.render(f, columns[0], &rows, &app.theme);

    let preview: Vec<Line> = if app.page.is_empty(&app.tree) {
        vec![Line::styled(
            " Empty page. Press i/v/n/t to add content.",
            Style::default().fg(app.theme.muted),
        )]
    } else {
        app.board_panel
            .selection()
            .and_then(|index| app.page.items(&app.tree).get(index).copied())
            .map(|item| render::outline(&app.tree, item))
            .unwrap_or_default()
            .into_iter()
            .map(Line::raw)
            .collect()
    };

    let paragraph = Paragraph::new(preview).style(app.theme.base_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border_style(false))
            .title(" Markup "),
    );
    f.render_widget(paragraph, columns[1]);
}
