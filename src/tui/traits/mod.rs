//! Traits shared by TUI panels
//!
//! App routes keyboard input; panels declare whether they consumed it.
//!
//! ```text
//! KeyEvent
//!    │
//!    ▼
//! Modal (captures everything while open)
//!    │
//!    ▼
//! Focused panel (Interactive::handle_key)
//!    │ Handled::No
//!    ▼
//! App global keys
//! ```

mod interactive;

pub use interactive::{Handled, Interactive};
