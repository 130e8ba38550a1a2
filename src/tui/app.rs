// TUI application state
//
// App owns the mount tree and the page component. Everything shown on screen
// is read back out of the tree; App never keeps its own list of slots.

use super::components::board_panel::{slot_rows, BoardPanel, SlotRow};
use super::components::toast::Toast;
use super::modal::Modal;
use super::theme::{Theme, ThemeKind};
use crate::board::Board;
use crate::component::{ContentSpec, PageComponent};
use crate::config::Config;
use crate::dom::MountTree;
use crate::logging::LogBuffer;
use anyhow::Result;
use tracing::{debug, warn};

/// Main application state for the TUI
pub struct App {
    /// Arena holding the page and every slot ever created
    pub tree: MountTree,

    /// Root of the rendered page
    pub page: PageComponent,

    /// Slot list selection
    pub board_panel: BoardPanel,

    /// Active modal overlay (captures all input when Some)
    pub modal: Option<Modal>,

    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Transient notification
    pub toast: Option<Toast>,

    /// Captured tracing output for the logs panel
    pub log_buffer: LogBuffer,

    /// Slots closed this session
    pub closed_count: usize,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create app state with an empty page shaped by `config`
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let mut tree = MountTree::new();
        let page = PageComponent::new(&mut tree, config.slot_options());
        let theme_kind = ThemeKind::from_name(&config.theme);

        Self {
            tree,
            page,
            board_panel: BoardPanel::new(),
            modal: None,
            theme_kind,
            theme: theme_kind.theme(),
            toast: None,
            log_buffer,
            closed_count: 0,
            should_quit: false,
        }
    }

    /// Add every board item to the page
    pub fn load_board(&mut self, board: &Board) -> Result<()> {
        board.populate(&self.page, &mut self.tree)?;
        self.sync_panel();
        Ok(())
    }

    pub fn slot_count(&self) -> usize {
        self.page.len(&self.tree)
    }

    /// Current slots, read from the tree
    pub fn rows(&self) -> Vec<SlotRow> {
        slot_rows(&self.tree, &self.page)
    }

    /// Build `spec` and append it as a new slot, selecting it
    pub fn add_content(&mut self, spec: &ContentSpec) {
        let content = spec.build(&mut self.tree);
        match self.page.append(&mut self.tree, content.as_ref()) {
            Ok(_) => {
                self.sync_panel();
                self.board_panel.select_last();
                self.toast = Some(Toast::new(format!(
                    "Added {} '{}'",
                    spec.kind().name().to_lowercase(),
                    spec.title()
                )));
            }
            Err(e) => {
                warn!(error = %e, "failed to add slot");
                self.toast = Some(Toast::error(e.to_string()));
            }
        }
    }

    /// Fire the close button of the selected slot
    pub fn close_selected(&mut self) {
        let Some(index) = self.board_panel.selection() else {
            self.toast = Some(Toast::new("Nothing to close"));
            return;
        };

        let title = self.rows().get(index).and_then(|row| row.title.clone());

        match self.page.close_item(&mut self.tree, index) {
            Ok(item) => {
                debug!(index, %item, "slot closed from TUI");
                self.closed_count += 1;
                self.sync_panel();
                self.toast = Some(Toast::new(match title {
                    Some(title) => format!("Closed '{}'", title),
                    None => format!("Closed slot {}", index + 1),
                }));
            }
            Err(e) => {
                warn!(index, error = %e, "failed to close slot");
                self.toast = Some(Toast::error(e.to_string()));
            }
        }
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    /// Switch to the next theme
    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme_kind.name())));
    }

    /// Drop the toast once its time is up (called every loop iteration)
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    fn sync_panel(&mut self) {
        let len = self.slot_count();
        self.board_panel.sync_len(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ContentKind;

    fn demo_app() -> App {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        app.load_board(&Board::demo()).unwrap();
        app
    }

    #[test]
    fn test_new_app_uses_config_theme() {
        let config = Config {
            theme: "Nord".to_string(),
            ..Config::default()
        };
        let app = App::new(&config, LogBuffer::new());
        assert_eq!(app.theme_kind, ThemeKind::Nord);
        assert_eq!(app.slot_count(), 0);
        assert_eq!(app.board_panel.selection(), None);
    }

    #[test]
    fn test_add_content_selects_new_slot() {
        let mut app = demo_app();
        app.add_content(&ContentKind::Todo.spec("Water plants", "balcony"));

        assert_eq!(app.slot_count(), 5);
        assert_eq!(app.board_panel.selection(), Some(4));
        let rows = app.rows();
        assert_eq!(rows[4].kind, Some(ContentKind::Todo));
        assert_eq!(rows[4].summary, "Water plants balcony");
        assert!(app.toast.as_ref().is_some_and(|t| !t.is_error));
    }

    #[test]
    fn test_close_selected_keeps_neighbors() {
        let mut app = demo_app();
        app.board_panel.selected = 1;
        app.close_selected();

        assert_eq!(app.slot_count(), 3);
        assert_eq!(app.closed_count, 1);
        assert!(app
            .toast
            .as_ref()
            .is_some_and(|t| t.message.starts_with("Closed '") && !t.is_error));
        let kinds: Vec<_> = app.rows().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                Some(ContentKind::Image),
                Some(ContentKind::Note),
                Some(ContentKind::Todo)
            ]
        );
    }

    #[test]
    fn test_close_last_clamps_selection() {
        let mut app = demo_app();
        app.board_panel.select_last();
        app.close_selected();
        assert_eq!(app.board_panel.selection(), Some(2));

        while app.slot_count() > 0 {
            app.close_selected();
        }
        assert_eq!(app.closed_count, 4);
        assert_eq!(app.board_panel.selection(), None);

        app.close_selected();
        assert_eq!(app.closed_count, 4);
        assert!(app.toast.as_ref().is_some_and(|t| t.message == "Nothing to close"));
    }

    #[test]
    fn test_cycle_theme() {
        let mut app = demo_app();
        app.cycle_theme();
        assert_eq!(app.theme_kind, ThemeKind::Light);
    }
}
