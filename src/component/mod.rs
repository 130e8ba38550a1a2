//! Component capabilities
//!
//! Two independent traits instead of a class hierarchy:
//!
//! - [`Component`]: can place its own mount into a host at a position
//! - [`Composable`]: can take a child component and incorporate it
//!
//! A type implementing both (pages, page items) is usable wherever either
//! is required, including as the content of another page.
//!
//! ```text
//! ul.page                        PageComponent      (Composable + Component)
//! ├── li.page-item               PageItemComponent  (Composable + Component)
//! │   ├── section.page-item__body
//! │   │   └── section.note       NoteComponent      (Component)
//! │   └── div.page-item__controls
//! │       └── button.close       ── activation ──▶ removes its own li
//! └── li.page-item
//!     └── ...
//! ```

mod content;
mod page;

pub use content::{ContentKind, ContentSpec};
pub use page::{PageComponent, SlotOptions, SlotPolicy};

use crate::dom::{MountTree, NodeId, Position, Template};
use crate::error::Result;

/// Anything that can render itself into a host mount
pub trait Component {
    /// Insert this component's mount into `host` at `position`
    ///
    /// Calling again moves the mount.
    fn attach_to(&self, tree: &mut MountTree, host: NodeId, position: Position) -> Result<()>;
}

/// Interior node that adopts child components
pub trait Composable {
    fn add_child(&self, tree: &mut MountTree, child: &dyn Component) -> Result<()>;
}

/// Mount handle built from a template, shared by every concrete component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseComponent {
    element: NodeId,
}

impl BaseComponent {
    pub fn new(tree: &mut MountTree, template: &Template) -> Self {
        Self {
            element: tree.build(template),
        }
    }

    pub fn element(&self) -> NodeId {
        self.element
    }
}

impl Component for BaseComponent {
    fn attach_to(&self, tree: &mut MountTree, host: NodeId, position: Position) -> Result<()> {
        tree.insert_adjacent(host, position, self.element)?;
        tracing::trace!(
            element = %self.element,
            host = %host,
            position = position.as_str(),
            "attached"
        );
        Ok(())
    }
}
