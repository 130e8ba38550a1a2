// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current settings
// - Compose modal: title and detail inputs for a new slot

use crate::tui::app::App;
use crate::tui::modal::{ComposeField, ComposeForm, Modal};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Compose(form) => render_compose(f, form, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Help sections: (header, [(keys, description)])
const HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "Slots",
        &[
            ("↑/↓, j/k", "Select slot"),
            ("Home/End", "First / last slot"),
            ("x, Delete", "Close selected slot"),
        ],
    ),
    (
        "Add content",
        &[("i", "Image"), ("v", "Video"), ("n", "Note"), ("t", "Todo")],
    ),
    (
        "General",
        &[("Tab", "Next theme"), ("?", "Toggle this help"), ("q, Ctrl+C", "Quit")],
    ),
];

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.border_focused);
    let desc_style = Style::default().fg(app.theme.fg);
    let header_style = app.theme.title_style();

    let mut lines = vec![Line::raw("")];
    for (header, keys) in HELP {
        lines.push(Line::from(Span::styled(format!("  {}", header), header_style)));
        lines.extend(keys.iter().map(|(key, desc)| {
            Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("{:<12}", key), key_style),
                Span::styled(*desc, desc_style),
            ])
        }));
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(vec![
        Span::styled("  Theme: ", desc_style),
        Span::styled(app.theme_kind.name(), key_style),
        Span::styled("  |  Slots: ", desc_style),
        Span::styled(app.page.options().policy.as_str(), key_style),
    ]));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(44, height, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(app.theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focused))
                .title(" Help ")
                .title_bottom(Line::from(" ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the compose dialog
fn render_compose(f: &mut Frame, form: &ComposeForm, app: &App) {
    let label_style = Style::default().fg(app.theme.muted);
    let field_line = |label: &str, value: &str, field: ComposeField| -> Line {
        let focused = form.focus == field;
        let value_style = if focused {
            app.theme.selected_style()
        } else {
            Style::default().fg(app.theme.fg)
        };
        let cursor = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::styled(format!("  {:<7}", label), label_style),
            Span::styled(format!("{}{}", value, cursor), value_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        field_line("Title", &form.title, ComposeField::Title),
        Line::raw(""),
        field_line(form.kind.detail_label(), &form.detail, ComposeField::Detail),
        Line::raw(""),
    ]);

    let area = centered_rect(60, 7, f.area());
    f.render_widget(Clear, area);

    let accent = app.theme.kind_color(Some(form.kind));
    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .title(format!(" New {} ", form.kind.name().to_lowercase()))
                .title_bottom(Line::from(" Tab:field  Enter:add  Esc/Ctrl+C:cancel ").centered()),
        );

    f.render_widget(paragraph, area);
}
