//! Board panel component
//!
//! Lists the page's slots in order, one row per slot. Rows are read from
//! the mount tree each frame, so a slot closed by its own button disappears
//! without the panel being told.

use super::formatters::truncate_to_width;
use crate::component::{ContentKind, PageComponent};
use crate::dom::MountTree;
use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// One slot as shown in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    /// Kind of the slot's first content, if recognized
    pub kind: Option<ContentKind>,
    /// Text of the first content's title element
    pub title: Option<String>,
    /// Text of everything in the slot body
    pub summary: String,
    /// Number of content mounts in the slot body
    pub contents: usize,
}

/// Read the page's current slots out of the tree
pub fn slot_rows(tree: &MountTree, page: &PageComponent) -> Vec<SlotRow> {
    (0..page.len(tree))
        .map(|index| match page.content_of(tree, index) {
            Ok(contents) => {
                let first = contents.first().copied();
                let kind = first
                    .and_then(|node| tree.element(node))
                    .and_then(|el| el.classes.first())
                    .and_then(|class| ContentKind::from_class(class));
                let title = first
                    .zip(kind)
                    .and_then(|(node, kind)| tree.query_selector(node, &kind.title_class()))
                    .map(|node| tree.text_content(node));
                let summary = contents
                    .iter()
                    .map(|&node| tree.text_content(node))
                    .filter(|text| !text.is_empty())
                    .collect::<Vec<_>>()
                    .join(" | ");
                SlotRow {
                    kind,
                    title,
                    summary,
                    contents: contents.len(),
                }
            }
            Err(e) => SlotRow {
                kind: None,
                title: None,
                summary: e.to_string(),
                contents: 0,
            },
        })
        .collect()
}

/// Selection state for the slot list
#[derive(Debug, Default)]
pub struct BoardPanel {
    /// Selected slot index (meaningless while `len == 0`)
    pub selected: usize,
    /// Cached slot count, synced by App after every page change
    len: usize,
}

impl BoardPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the slot count, keeping the selection in range
    pub fn sync_len(&mut self, len: usize) {
        self.len = len;
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Selected index, if there is anything to select
    pub fn selection(&self) -> Option<usize> {
        (self.len > 0).then_some(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_last(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }

    pub fn render(&self, f: &mut Frame, area: Rect, rows: &[SlotRow], theme: &Theme) {
        // Borders plus the "NN " index and kind label columns
        let summary_width = area.width.saturating_sub(2 + 4 + 7) as usize;

        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let label = row.kind.map(|k| k.name()).unwrap_or("?");
                let mut summary = truncate_to_width(&row.summary, summary_width);
                if row.contents > 1 {
                    summary = truncate_to_width(
                        &format!("{} (+{})", row.summary, row.contents - 1),
                        summary_width,
                    );
                }
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>2}  ", i + 1), Style::default().fg(theme.muted)),
                    Span::styled(
                        format!("{:<7}", label),
                        Style::default().fg(theme.kind_color(row.kind)),
                    ),
                    Span::styled(summary, Style::default().fg(theme.fg)),
                ]))
            })
            .collect();

        let title = format!(" Page ({} slots) ", rows.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style(true))
                    .title(title),
            )
            .highlight_style(theme.selected_style());

        let mut state = ListState::default().with_selected(self.selection());
        f.render_stateful_widget(list, area, &mut state);
    }
}

impl Interactive for BoardPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Handled::Yes
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Handled::Yes
            }
            KeyCode::Home => {
                self.selected = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.select_last();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  x:close  i/v/n/t:add")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::component::{ContentSpec, SlotOptions, SlotPolicy};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_slot_rows_follow_tree() {
        let mut tree = MountTree::new();
        let page = PageComponent::new(&mut tree, SlotOptions::default());
        Board::demo().populate(&page, &mut tree).unwrap();

        let rows = slot_rows(&tree, &page);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].kind, Some(ContentKind::Image));
        assert_eq!(rows[0].summary, "Sunrise");
        assert_eq!(rows[0].title.as_deref(), Some("Sunrise"));
        assert_eq!(rows[2].kind, Some(ContentKind::Note));

        page.close_item(&mut tree, 0).unwrap();
        let rows = slot_rows(&tree, &page);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].kind, Some(ContentKind::Video));
    }

    #[test]
    fn test_slot_rows_count_appended_content() {
        let mut tree = MountTree::new();
        let options = SlotOptions {
            policy: SlotPolicy::Append,
            ..SlotOptions::default()
        };
        let page = PageComponent::new(&mut tree, options);
        let first = ContentSpec::Note {
            title: "One".to_string(),
            body: String::new(),
        }
        .build(&mut tree);
        let item = page.append(&mut tree, first.as_ref()).unwrap();
        let second = ContentSpec::Note {
            title: "Two".to_string(),
            body: String::new(),
        }
        .build(&mut tree);
        crate::component::Composable::add_child(&item, &mut tree, second.as_ref()).unwrap();

        let rows = slot_rows(&tree, &page);
        assert_eq!(rows[0].contents, 2);
        assert_eq!(rows[0].summary, "One | Two");
    }

    #[test]
    fn test_navigation_stays_in_range() {
        let mut panel = BoardPanel::new();
        assert_eq!(panel.selection(), None);

        panel.sync_len(3);
        assert_eq!(panel.handle_key(key(KeyCode::Char('j'))), Handled::Yes);
        assert_eq!(panel.handle_key(key(KeyCode::Down)), Handled::Yes);
        assert_eq!(panel.handle_key(key(KeyCode::Down)), Handled::Yes);
        assert_eq!(panel.selection(), Some(2));

        panel.sync_len(2);
        assert_eq!(panel.selection(), Some(1));

        panel.handle_key(key(KeyCode::Home));
        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.selection(), Some(0));

        assert_eq!(panel.handle_key(key(KeyCode::Char('x'))), Handled::No);
    }
}
