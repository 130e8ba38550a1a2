//! Host mount structure
//!
//! An arena of elements with parent/child links. Components never own
//! elements directly; they hold a [`NodeId`] into the [`MountTree`] and
//! mutate the tree through it.
//!
//! # Insertion positions
//!
//! ```text
//!   <!-- BeforeBegin -->
//!   <target>
//!     <!-- AfterBegin -->
//!     ...existing children...
//!     <!-- BeforeEnd -->
//!   </target>
//!   <!-- AfterEnd -->
//! ```
//!
//! Detached nodes stay valid handles. Removing a node from its parent only
//! unlinks it, so a component keeps its mount handle for its whole lifetime.

mod element;
pub mod render;

pub use element::{Element, Template};

use crate::error::{ComponentError, DomError};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Handle to an element in a [`MountTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a node lands relative to an insertion target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Previous sibling of the target
    BeforeBegin,
    /// First child of the target
    AfterBegin,
    /// Last child of the target
    BeforeEnd,
    /// Next sibling of the target
    AfterEnd,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeBegin => "beforebegin",
            Self::AfterBegin => "afterbegin",
            Self::BeforeEnd => "beforeend",
            Self::AfterEnd => "afterend",
        }
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beforebegin" => Ok(Self::BeforeBegin),
            "afterbegin" => Ok(Self::AfterBegin),
            "beforeend" => Ok(Self::BeforeEnd),
            "afterend" => Ok(Self::AfterEnd),
            other => Err(format!("unknown insertion position '{}'", other)),
        }
    }
}

/// Handler run when a node's activation event fires
///
/// Receives the tree mutably so a handler can restructure it (e.g. a close
/// button detaching its own item).
pub type ActivationHandler = Box<dyn FnMut(&mut MountTree) -> Result<(), ComponentError>>;

#[derive(Debug)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-memory element tree with activation handlers
#[derive(Default)]
pub struct MountTree {
    nodes: Vec<Node>,
    /// `None` while the node's handler is running
    handlers: HashMap<NodeId, Option<ActivationHandler>>,
}

impl fmt::Debug for MountTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountTree")
            .field("nodes", &self.nodes.len())
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl MountTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached node
    pub fn create(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a detached subtree from a template, returning its root
    pub fn build(&mut self, template: &Template) -> NodeId {
        let root = self.create(template.element.clone());
        for child in &template.children {
            let id = self.build(child);
            self.link(root, self.children(root).len(), id);
        }
        root
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0).map(|n| &n.element)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Children in document order (empty for unknown handles)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `node` sits strictly below `ancestor`
    pub fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    /// Insert `node` at `position` relative to `target`
    ///
    /// A node that is already attached somewhere is moved.
    pub fn insert_adjacent(
        &mut self,
        target: NodeId,
        position: Position,
        node: NodeId,
    ) -> Result<(), DomError> {
        self.check(target)?;
        self.check(node)?;

        if node == target || self.is_descendant(target, node) {
            return Err(DomError::Cycle { node, target });
        }

        let sibling_position = matches!(position, Position::BeforeBegin | Position::AfterEnd);
        if sibling_position && self.parent(target).is_none() {
            return Err(DomError::NoParent { node: target });
        }

        // Unlink first: moving a node among its own siblings shifts indices
        self.unlink(node);

        match position {
            Position::AfterBegin => self.link(target, 0, node),
            Position::BeforeEnd => self.link(target, self.children(target).len(), node),
            Position::BeforeBegin | Position::AfterEnd => {
                let parent = self
                    .parent(target)
                    .ok_or(DomError::NoParent { node: target })?;
                let index = self
                    .children(parent)
                    .iter()
                    .position(|c| *c == target)
                    .ok_or(DomError::NotAChild {
                        parent,
                        child: target,
                    })?;
                let at = if position == Position::BeforeBegin {
                    index
                } else {
                    index + 1
                };
                self.link(parent, at, node);
            }
        }

        Ok(())
    }

    /// Unlink `node` from its parent, returning the former parent
    pub fn detach(&mut self, node: NodeId) -> Result<NodeId, DomError> {
        self.check(node)?;
        self.unlink(node).ok_or(DomError::NoParent { node })
    }

    /// Unlink `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check(parent)?;
        self.check(child)?;
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.unlink(child);
        Ok(())
    }

    /// Detach every child of `node`, returning them in former order
    pub fn clear_children(&mut self, node: NodeId) -> Result<Vec<NodeId>, DomError> {
        self.check(node)?;
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in &children {
            self.nodes[child.0].parent = None;
        }
        Ok(children)
    }

    /// First descendant of `root` (depth-first, document order) carrying `class`
    ///
    /// `root` itself is not considered.
    pub fn query_selector(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(root).into_iter().find(|id| {
            self.element(*id)
                .map(|e| e.has_class(class))
                .unwrap_or(false)
        })
    }

    /// All descendants of `root` in document order
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Text of `root` and its descendants, trimmed and joined by single spaces
    pub fn text_content(&self, root: NodeId) -> String {
        std::iter::once(root)
            .chain(self.descendants(root))
            .filter_map(|id| self.element(id).and_then(|e| e.text.as_deref()))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Activation events
    // ─────────────────────────────────────────────────────────────────────────

    /// Bind the activation handler for `node`, replacing any previous one
    pub fn on_activate(&mut self, node: NodeId, handler: ActivationHandler) -> Result<(), DomError> {
        self.check(node)?;
        self.handlers.insert(node, Some(handler));
        Ok(())
    }

    /// Drop the handler bound to `node`
    ///
    /// May be called by that handler while it runs; the handler is then
    /// dropped as soon as it returns.
    pub fn unbind(&mut self, node: NodeId) {
        self.handlers.remove(&node);
    }

    #[cfg(test)]
    pub fn has_handler(&self, node: NodeId) -> bool {
        matches!(self.handlers.get(&node), Some(Some(_)))
    }

    /// Fire the activation event of `node`
    ///
    /// A handler that re-fires its own node gets `NoHandler`.
    pub fn activate(&mut self, node: NodeId) -> Result<(), ComponentError> {
        let mut handler = self
            .handlers
            .get_mut(&node)
            .and_then(Option::take)
            .ok_or(DomError::NoHandler(node))?;
        let result = handler(self);
        // Put it back unless it was unbound or replaced meanwhile
        if let Some(slot @ None) = self.handlers.get_mut(&node) {
            *slot = Some(handler);
        }
        result
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn check(&self, id: NodeId) -> Result<(), DomError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(DomError::UnknownNode(id))
        }
    }

    fn link(&mut self, parent: NodeId, at: usize, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        let children = &mut self.nodes[parent.0].children;
        let at = at.min(children.len());
        children.insert(at, child);
    }

    fn unlink(&mut self, node: NodeId) -> Option<NodeId> {
        let parent = self.nodes[node.0].parent.take()?;
        self.nodes[parent.0].children.retain(|c| *c != node);
        Some(parent)
    }
}
