// TUI components
//
// Each component renders one region of the screen. Stateful panels own
// their selection and implement `Interactive`; the rest are plain render fns.

pub mod board_panel;
pub mod formatters;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
