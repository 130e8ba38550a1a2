// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crate::component::{ContentKind, ContentSpec};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Compose dialog confirmed: add this content as a new slot
    Submit(ContentSpec),
}

/// Which compose input receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    Title,
    Detail,
}

impl ComposeField {
    fn toggle(self) -> Self {
        match self {
            Self::Title => Self::Detail,
            Self::Detail => Self::Title,
        }
    }
}

/// Input state of the compose dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeForm {
    pub kind: ContentKind,
    pub title: String,
    pub detail: String,
    pub focus: ComposeField,
}

impl ComposeForm {
    pub fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            title: String::new(),
            detail: String::new(),
            focus: ComposeField::default(),
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ComposeField::Title => &mut self.title,
            ComposeField::Detail => &mut self.detail,
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> ModalAction {
        // Chords are commands, never text
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            };
        }

        match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
                ModalAction::None
            }
            KeyCode::Enter => {
                // Title is required; detail may be empty
                if self.title.trim().is_empty() {
                    self.focus = ComposeField::Title;
                    return ModalAction::None;
                }
                ModalAction::Submit(self.kind.spec(self.title.trim(), self.detail.trim()))
            }
            KeyCode::Backspace => {
                self.focused_mut().pop();
                ModalAction::None
            }
            KeyCode::Char(c) => {
                self.focused_mut().push(c);
                ModalAction::None
            }
            _ => ModalAction::None,
        }
    }
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Compose dialog for a new slot
    Compose(ComposeForm),
}

impl Modal {
    /// Create a help modal
    pub fn help() -> Self {
        Modal::Help
    }

    /// Create an empty compose dialog for `kind`
    pub fn compose(kind: ContentKind) -> Self {
        Modal::Compose(ComposeForm::new(kind))
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyEvent) -> ModalAction {
        match self {
            Modal::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Compose(form) => form.handle_input(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(modal: &mut Modal, text: &str) {
        for c in text.chars() {
            assert_eq!(modal.handle_input(key(KeyCode::Char(c))), ModalAction::None);
        }
    }

    #[test]
    fn test_help_closes() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(key(KeyCode::Char('j'))), ModalAction::None);
        assert_eq!(modal.handle_input(key(KeyCode::Char('?'))), ModalAction::Close);
        assert_eq!(modal.handle_input(key(KeyCode::Esc)), ModalAction::Close);
    }

    #[test]
    fn test_compose_submits_both_fields() {
        let mut modal = Modal::compose(ContentKind::Note);
        type_str(&mut modal, "Groceries");
        modal.handle_input(key(KeyCode::Tab));
        type_str(&mut modal, "eggs, milkk");
        modal.handle_input(key(KeyCode::Backspace));

        assert_eq!(
            modal.handle_input(key(KeyCode::Enter)),
            ModalAction::Submit(ContentSpec::Note {
                title: "Groceries".to_string(),
                body: "eggs, milk".to_string(),
            })
        );
    }

    #[test]
    fn test_compose_requires_title() {
        let mut modal = Modal::compose(ContentKind::Image);
        modal.handle_input(key(KeyCode::Tab));
        type_str(&mut modal, "cat.png");

        assert_eq!(modal.handle_input(key(KeyCode::Enter)), ModalAction::None);
        match &modal {
            Modal::Compose(form) => {
                assert_eq!(form.focus, ComposeField::Title);
                assert_eq!(form.detail, "cat.png");
            }
            other => panic!("unexpected modal: {:?}", other),
        }
    }

    #[test]
    fn test_compose_typed_q_is_text() {
        let mut modal = Modal::compose(ContentKind::Todo);
        type_str(&mut modal, "q?");
        assert_eq!(modal.handle_input(key(KeyCode::Esc)), ModalAction::Close);
        match modal {
            Modal::Compose(form) => assert_eq!(form.title, "q?"),
            other => panic!("unexpected modal: {:?}", other),
        }
    }

    #[test]
    fn test_compose_ignores_chords() {
        let mut modal = Modal::compose(ContentKind::Note);
        type_str(&mut modal, "ab");
        let alt_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(modal.handle_input(alt_x), ModalAction::None);
        match &modal {
            Modal::Compose(form) => assert_eq!(form.title, "ab"),
            other => panic!("unexpected modal: {:?}", other),
        }

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(modal.handle_input(ctrl_c), ModalAction::Close);
    }

    #[test]
    fn test_shift_still_types() {
        let mut modal = Modal::compose(ContentKind::Note);
        let upper = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(modal.handle_input(upper), ModalAction::None);
        match &modal {
            Modal::Compose(form) => assert_eq!(form.title, "A"),
            other => panic!("unexpected modal: {:?}", other),
        }
    }
}
