//! Logs panel component
//!
//! Shows the tail of the in-memory log buffer, color-coded by level.

use crate::logging::{LogBuffer, LogEntry};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// `[HH:MM:SS] LEVEL module: message`
///
/// Only the last path segment of the target is shown.
pub fn format_log_entry(entry: &LogEntry) -> String {
    let module = entry.target.rsplit("::").next().unwrap_or_default();
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        module,
        entry.message
    )
}

/// Render as many of the newest entries as fit in `area`
pub fn render(f: &mut Frame, area: Rect, buffer: &LogBuffer, theme: &Theme) {
    let height = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = buffer
        .tail(height)
        .iter()
        .map(|entry| {
            ListItem::new(format_log_entry(entry)).style(theme.log_level_style(entry.level))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(false))
            .title(format!(" Logs ({}) ", buffer.len())),
    );

    f.render_widget(list, area);
}
