// Title bar component
//
// Renders the app name, the active slot policy, and the help hint.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title_text = format!(
        " pageboard ──── policy: {} │ theme: {}",
        app.page.options().policy.as_str(),
        app.theme_kind.name()
    );

    let title = Paragraph::new(title_text)
        .style(app.theme.title_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
