// Status bar component
//
// Renders slot count, selection, and key hints at the bottom.

use crate::tui::app::App;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let selection = match app.board_panel.selection() {
        Some(index) => format!("{}/{}", index + 1, app.slot_count()),
        None => "empty".to_string(),
    };
    let hint = app.board_panel.focus_hint().unwrap_or_default();

    let status_text = format!(
        " {} │ closed {} │ {} │ ?:help  Tab:theme  q:quit",
        selection, app.closed_count, hint
    );

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
