//! fOS DOM - Document Object Model
//!
//! Arena-backed DOM tree behind a cheap, clonable [`Document`] handle.
//!
//! Nodes live in a single [`DomTree`] arena and are addressed by [`NodeId`].
//! [`NodeRef`] pairs a document handle with a node id and exposes the
//! element-level API (attributes, children, text content, serialization)
//! that query and accessibility code is written against.

mod attributes;
mod document;
mod node;
mod selector;
mod serializer;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use document::{Document, NodeRef};
pub use node::{ElementData, Node, NodeData};
pub use selector::{AttrSelector, Selector};
pub use serializer::serialize_outer;
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The document node, always the first node in the arena
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for a missing link
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// DOM error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node {0:?} does not exist")]
    NotFound(NodeId),

    #[error("Cannot insert {child:?} into {parent:?}: would create a cycle")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("Node {0:?} cannot have children")]
    NotAContainer(NodeId),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("<{0}> does not support a checked state")]
    NotCheckable(String),
}
