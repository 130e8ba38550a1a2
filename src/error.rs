//! Error types for the mount tree and the components built on it
//!
//! Both families are programmer-error classes: they abort the operation and
//! surface to the caller. Nothing here is transient or retryable.

use crate::dom::NodeId;
use thiserror::Error;

/// Errors raised by host mount structure operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// Handle does not belong to this tree
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// Operation needs a parent but the node is detached
    #[error("node {node} has no parent")]
    NoParent {
        /// Detached node
        node: NodeId,
    },

    /// `remove_child` called with a node that is not a child of `parent`
    #[error("node {child} is not a child of {parent}")]
    NotAChild {
        /// Expected parent
        parent: NodeId,
        /// Node that was not found under it
        child: NodeId,
    },

    /// Inserting a node into itself or one of its own descendants
    #[error("cannot insert {node} relative to {target}: target is inside the inserted subtree")]
    Cycle {
        /// Node being inserted
        node: NodeId,
        /// Insertion target
        target: NodeId,
    },

    /// Activation fired on a node with no bound handler
    #[error("node {0} has no activation handler")]
    NoHandler(NodeId),
}

/// Errors raised by page and page item operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// A page item's required container is missing from its mount
    #[error("structural error: item {item} has no `.{selector}` container")]
    Structural {
        /// Item mount handle
        item: NodeId,
        /// Class name that was looked up
        selector: &'static str,
    },

    /// Removal requested for an item with no parent mount
    #[error("removal error: item {item} is not attached to a parent")]
    Removal {
        /// Item mount handle
        item: NodeId,
    },

    /// A removed item was attached again
    #[error("item {item} was removed and cannot be reattached")]
    Reuse {
        /// Item mount handle
        item: NodeId,
    },

    /// Page slot index past the end
    #[error("slot {index} out of range (page has {len} slots)")]
    IndexOutOfRange {
        /// Requested slot
        index: usize,
        /// Current slot count
        len: usize,
    },

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Result alias for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;
