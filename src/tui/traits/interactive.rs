//! Keyboard handling contract for panels

use crossterm::event::KeyEvent;

/// Whether a panel consumed a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    /// Bubble up to App's global keys
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// A panel that reacts to keys while focused
pub trait Interactive {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Key hints for the status bar
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
