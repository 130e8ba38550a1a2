//! Page and page item slots
//!
//! The page keeps no list of its items. Every query (`items`, `len`,
//! `close_item`) reads the page's children straight from the mount tree, so
//! a slot that closed itself simply stops showing up.

use super::{BaseComponent, Component, Composable};
use crate::dom::{Element, MountTree, NodeId, Position, Template};
use crate::error::{ComponentError, Result};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info};

const PAGE_CLASS: &str = "page";
const ITEM_CLASS: &str = "page-item";
const BODY_CLASS: &str = "page-item__body";
const CONTROLS_CLASS: &str = "page-item__controls";
const CLOSE_CLASS: &str = "close";

const DEFAULT_CLOSE_GLYPH: &str = "×";

/// What a page item does with existing content when given another child
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotPolicy {
    /// Clear the body before attaching (a slot holds one content item)
    #[default]
    Replace,
    /// Keep prior content; new content stacks after it
    Append,
}

impl SlotPolicy {
    /// Parse policy string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "append" => Self::Append,
            "replace" => Self::Replace,
            _ => Self::Replace, // Unknown values fall back to the default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Append => "append",
        }
    }
}

/// Settings every slot created by a page shares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotOptions {
    pub policy: SlotPolicy,
    /// Label of the close button
    pub close_glyph: String,
}

impl Default for SlotOptions {
    fn default() -> Self {
        Self {
            policy: SlotPolicy::default(),
            close_glyph: DEFAULT_CLOSE_GLYPH.to_string(),
        }
    }
}

/// Lifecycle of a page item: `Constructed → Attached → Removed`
///
/// `Removed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Constructed,
    Attached,
    Removed,
}

// ─────────────────────────────────────────────────────────────────────────────
// Page
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level ordered collection of item slots
#[derive(Debug, Clone)]
pub struct PageComponent {
    base: BaseComponent,
    options: SlotOptions,
}

impl PageComponent {
    pub fn new(tree: &mut MountTree, options: SlotOptions) -> Self {
        let template = Template::new(Element::new("ul").class(PAGE_CLASS));
        Self {
            base: BaseComponent::new(tree, &template),
            options,
        }
    }

    pub fn element(&self) -> NodeId {
        self.base.element()
    }

    pub fn options(&self) -> &SlotOptions {
        &self.options
    }

    /// Wrap `content` in a new slot appended at the end of the page
    pub fn append(
        &self,
        tree: &mut MountTree,
        content: &dyn Component,
    ) -> Result<PageItemComponent> {
        let item = PageItemComponent::new(tree, &self.options)?;
        // Content moves only after the empty slot is in the page
        item.attach_to(tree, self.element(), Position::BeforeEnd)?;
        if let Err(e) = item.add_child(tree, content) {
            tree.detach(item.element())?;
            tree.unbind(item.close);
            return Err(e);
        }
        info!(
            item = %item.element(),
            slots = self.len(tree),
            "page item added"
        );
        Ok(item)
    }

    /// Slot mounts currently in the page, in order
    pub fn items(&self, tree: &MountTree) -> Vec<NodeId> {
        tree.children(self.element()).to_vec()
    }

    pub fn len(&self, tree: &MountTree) -> usize {
        tree.children(self.element()).len()
    }

    pub fn is_empty(&self, tree: &MountTree) -> bool {
        self.len(tree) == 0
    }

    /// Content mounts held by the slot at `index`
    pub fn content_of(&self, tree: &MountTree, index: usize) -> Result<Vec<NodeId>> {
        let item = self.item_at(tree, index)?;
        let body = body_of(tree, item)?;
        Ok(tree.children(body).to_vec())
    }

    /// Fire the close affordance of the slot at `index`
    ///
    /// Goes through the same activation path as a user pressing the button.
    /// Returns the removed slot's mount.
    pub fn close_item(&self, tree: &mut MountTree, index: usize) -> Result<NodeId> {
        let item = self.item_at(tree, index)?;
        let button = close_button_of(tree, item)?;
        tree.activate(button)?;
        Ok(item)
    }

    fn item_at(&self, tree: &MountTree, index: usize) -> Result<NodeId> {
        let items = tree.children(self.element());
        items
            .get(index)
            .copied()
            .ok_or(ComponentError::IndexOutOfRange {
                index,
                len: items.len(),
            })
    }
}

impl Component for PageComponent {
    fn attach_to(&self, tree: &mut MountTree, host: NodeId, position: Position) -> Result<()> {
        self.base.attach_to(tree, host, position)
    }
}

impl Composable for PageComponent {
    fn add_child(&self, tree: &mut MountTree, child: &dyn Component) -> Result<()> {
        self.append(tree, child).map(|_| ())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page item
// ─────────────────────────────────────────────────────────────────────────────

/// Removable slot wrapping one piece of content
///
/// Cloning yields another handle to the same slot.
#[derive(Debug, Clone)]
pub struct PageItemComponent {
    base: BaseComponent,
    close: NodeId,
    policy: SlotPolicy,
    state: Rc<Cell<ItemState>>,
}

impl PageItemComponent {
    /// Build the slot mount and bind its close button to this item
    pub fn new(tree: &mut MountTree, options: &SlotOptions) -> Result<Self> {
        let template = Template::new(Element::new("li").class(ITEM_CLASS))
            .child(Element::new("section").class(BODY_CLASS).into())
            .child(
                Template::new(Element::new("div").class(CONTROLS_CLASS)).child(
                    Element::new("button")
                        .class(CLOSE_CLASS)
                        .text(options.close_glyph.as_str())
                        .into(),
                ),
            );
        let base = BaseComponent::new(tree, &template);
        let element = base.element();

        let close = close_button_of(tree, element)?;

        let state = Rc::new(Cell::new(ItemState::Constructed));
        let handler_state = Rc::clone(&state);
        tree.on_activate(
            close,
            Box::new(move |tree: &mut MountTree| -> Result<()> {
                remove_item(tree, element, close, &handler_state)
            }),
        )?;

        Ok(Self {
            base,
            close,
            policy: options.policy,
            state,
        })
    }

    pub fn element(&self) -> NodeId {
        self.base.element()
    }

    #[cfg(test)]
    pub fn close_button(&self) -> NodeId {
        self.close
    }

    #[allow(dead_code)] // Handle-level API; the TUI and CLI work by index
    pub fn state(&self) -> ItemState {
        self.state.get()
    }

    /// Container that holds this slot's content
    pub fn body(&self, tree: &MountTree) -> Result<NodeId> {
        body_of(tree, self.element())
    }

    /// Fire this slot's close affordance
    ///
    /// A removed slot has released its handler; closing it again is a
    /// `Removal` error like any other close of a detached slot.
    #[allow(dead_code)] // Handle-level API; the TUI and CLI close by index
    pub fn close(&self, tree: &mut MountTree) -> Result<()> {
        if self.state.get() == ItemState::Removed {
            return Err(ComponentError::Removal {
                item: self.element(),
            });
        }
        tree.activate(self.close)
    }
}

// Slot parts are looked up among the slot's own children only. A descendant
// search would reach into nested pages held as content.

fn child_with_class(tree: &MountTree, parent: NodeId, class: &str) -> Option<NodeId> {
    tree.children(parent)
        .iter()
        .copied()
        .find(|&child| tree.element(child).is_some_and(|el| el.has_class(class)))
}

fn body_of(tree: &MountTree, item: NodeId) -> Result<NodeId> {
    child_with_class(tree, item, BODY_CLASS).ok_or(ComponentError::Structural {
        item,
        selector: BODY_CLASS,
    })
}

fn close_button_of(tree: &MountTree, item: NodeId) -> Result<NodeId> {
    child_with_class(tree, item, CONTROLS_CLASS)
        .and_then(|controls| child_with_class(tree, controls, CLOSE_CLASS))
        .ok_or(ComponentError::Structural {
            item,
            selector: CLOSE_CLASS,
        })
}

/// Removal handler bound to a slot's close button
///
/// On success the handler unbinds itself, so a closed slot holds nothing
/// in the tree's handler table.
fn remove_item(
    tree: &mut MountTree,
    item: NodeId,
    close: NodeId,
    state: &Cell<ItemState>,
) -> Result<()> {
    let parent = tree.parent(item).ok_or(ComponentError::Removal { item })?;
    tree.remove_child(parent, item)?;
    state.set(ItemState::Removed);
    tree.unbind(close);
    info!(item = %item, "page item removed");
    Ok(())
}

impl Component for PageItemComponent {
    fn attach_to(&self, tree: &mut MountTree, host: NodeId, position: Position) -> Result<()> {
        if self.state.get() == ItemState::Removed {
            return Err(ComponentError::Reuse {
                item: self.element(),
            });
        }
        self.base.attach_to(tree, host, position)?;
        self.state.set(ItemState::Attached);
        Ok(())
    }
}

impl Composable for PageItemComponent {
    fn add_child(&self, tree: &mut MountTree, child: &dyn Component) -> Result<()> {
        let body = self.body(tree)?;
        child.attach_to(tree, body, Position::BeforeEnd)?;

        // The new child is now last; under Replace everything before it goes
        if self.policy == SlotPolicy::Replace {
            let mut previous = tree.clear_children(body)?;
            if let Some(newest) = previous.pop() {
                tree.insert_adjacent(body, Position::BeforeEnd, newest)?;
            }
            if !previous.is_empty() {
                debug!(item = %self.element(), replaced = previous.len(), "slot content replaced");
            }
        }
        Ok(())
    }
}
