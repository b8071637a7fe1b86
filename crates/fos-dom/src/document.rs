//! Document - High-level document API
//!
//! [`Document`] is a shared handle to one [`DomTree`]. Cloning it is cheap
//! and every clone sees the same tree. [`NodeRef`] is the element-level
//! handle handed out by lookups; it stays valid for the lifetime of the
//! document even after the node is removed from the tree.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::{serialize_outer, DomError, DomTree, Node, NodeId, Selector};

/// HTML Document
#[derive(Clone)]
pub struct Document {
    tree: Rc<RefCell<DomTree>>,
}

impl Document {
    /// Create a document with the basic `html`/`head`/`body` structure
    pub fn new() -> Self {
        let doc = Self::empty();
        {
            let mut tree = doc.tree_mut();
            let html = tree.create_element("html");
            let head = tree.create_element("head");
            let body = tree.create_element("body");
            // Fresh nodes under a container cannot fail hierarchy checks.
            let _ = tree.append_child(NodeId::ROOT, html);
            let _ = tree.append_child(html, head);
            let _ = tree.append_child(html, body);
        }
        doc
    }

    /// Create a document holding only the document node
    pub fn empty() -> Self {
        Self {
            tree: Rc::new(RefCell::new(DomTree::new())),
        }
    }

    /// Access the DOM tree
    pub fn tree(&self) -> Ref<'_, DomTree> {
        self.tree.borrow()
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&self) -> RefMut<'_, DomTree> {
        self.tree.borrow_mut()
    }

    pub fn node(&self, id: NodeId) -> NodeRef {
        NodeRef {
            doc: self.clone(),
            id,
        }
    }

    /// The document node itself (not an element)
    pub fn document_node(&self) -> NodeRef {
        self.node(NodeId::ROOT)
    }

    /// The root element, usually `<html>`
    pub fn document_element(&self) -> Option<NodeRef> {
        let id = self
            .tree()
            .children(NodeId::ROOT)
            .find(|(_, n)| n.is_element())
            .map(|(id, _)| id)?;
        Some(self.node(id))
    }

    /// Swap the root element for `element`, detaching the previous one
    pub fn replace_document_element(&self, element: &NodeRef) -> Result<(), DomError> {
        if let Some(old) = self.document_element() {
            if old == *element {
                return Ok(());
            }
            old.remove();
        }
        self.document_node().append_child(element)
    }

    /// Get `<body>` element
    pub fn body(&self) -> Option<NodeRef> {
        let html = self.document_element()?;
        html.children().into_iter().find(|c| c.has_local_name("body"))
    }

    /// Create a detached element
    pub fn create_element(&self, local_name: &str) -> NodeRef {
        let id = self.tree_mut().create_element(local_name);
        self.node(id)
    }

    /// Create a detached text node
    pub fn create_text_node(&self, content: &str) -> NodeRef {
        let id = self.tree_mut().create_text(content);
        self.node(id)
    }

    pub fn create_comment(&self, content: &str) -> NodeRef {
        let id = self.tree_mut().create_comment(content);
        self.node(id)
    }

    /// Get the first connected element with the given id
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeRef> {
        let found = {
            let tree = self.tree();
            let found = tree.descendants(NodeId::ROOT).find(|&n| {
                tree.get(n)
                    .and_then(Node::as_element)
                    .is_some_and(|e| e.id() == Some(id))
            });
            found
        };
        found.map(|n| self.node(n))
    }

    /// First connected element matching `selector`, in document order
    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeRef>, DomError> {
        let selector = Selector::parse(selector)?;
        let found = {
            let tree = self.tree();
            let found = tree.descendants(NodeId::ROOT).find(|&n| {
                tree.get(n)
                    .and_then(Node::as_element)
                    .is_some_and(|e| selector.matches(e))
            });
            found
        };
        Ok(found.map(|n| self.node(n)))
    }

    /// Whether two handles share the same tree
    pub fn ptr_eq(&self, other: &Document) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.tree().len())
            .finish()
    }
}

/// Handle to one node of a [`Document`]
#[derive(Clone)]
pub struct NodeRef {
    doc: Document,
    id: NodeId,
}

impl NodeRef {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn owner_document(&self) -> &Document {
        &self.doc
    }

    fn with_node<R>(&self, f: impl FnOnce(&Node) -> R) -> Option<R> {
        self.doc.tree().get(self.id).map(f)
    }

    pub fn is_element(&self) -> bool {
        self.with_node(Node::is_element).unwrap_or(false)
    }

    pub fn is_document(&self) -> bool {
        self.id == NodeId::ROOT
    }

    /// Uppercase tag name; empty for non-elements
    pub fn tag_name(&self) -> String {
        self.with_node(|n| n.as_element().map(|e| e.tag_name()))
            .flatten()
            .unwrap_or_default()
    }

    pub fn has_local_name(&self, name: &str) -> bool {
        self.with_node(|n| n.as_element().is_some_and(|e| e.local_name.eq_ignore_ascii_case(name)))
            .unwrap_or(false)
    }

    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.with_node(|n| n.as_element().and_then(|e| e.get_attr(name)).map(str::to_string))
            .flatten()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.with_node(|n| n.as_element().is_some_and(|e| e.attrs.contains(name)))
            .unwrap_or(false)
    }

    /// Set an attribute. Ignored on non-element nodes.
    pub fn set_attribute(&self, name: &str, value: &str) {
        let mut tree = self.doc.tree_mut();
        if let Some(elem) = tree.get_mut(self.id).and_then(Node::as_element_mut) {
            elem.attrs.set(name, value);
        }
    }

    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        let mut tree = self.doc.tree_mut();
        tree.get_mut(self.id)
            .and_then(Node::as_element_mut)
            .and_then(|e| e.attrs.remove(name))
    }

    /// Element children, in order
    pub fn children(&self) -> Vec<NodeRef> {
        let ids: Vec<NodeId> = self
            .doc
            .tree()
            .children(self.id)
            .filter(|(_, n)| n.is_element())
            .map(|(id, _)| id)
            .collect();
        ids.into_iter().map(|id| self.doc.node(id)).collect()
    }

    /// All child nodes including text and comments
    pub fn child_nodes(&self) -> Vec<NodeRef> {
        let ids: Vec<NodeId> = self.doc.tree().children(self.id).map(|(id, _)| id).collect();
        ids.into_iter().map(|id| self.doc.node(id)).collect()
    }

    pub fn parent(&self) -> Option<NodeRef> {
        let parent = self.doc.tree().parent(self.id)?;
        Some(self.doc.node(parent))
    }

    pub fn append_child(&self, child: &NodeRef) -> Result<(), DomError> {
        if !self.doc.ptr_eq(&child.doc) {
            return Err(DomError::HierarchyRequest {
                parent: self.id,
                child: child.id,
            });
        }
        self.doc.tree_mut().append_child(self.id, child.id)
    }

    /// Create an element and append it, returning the new child
    pub fn append_element(&self, local_name: &str) -> Result<NodeRef, DomError> {
        let child = self.doc.create_element(local_name);
        self.append_child(&child)?;
        Ok(child)
    }

    /// Detach this node from its parent
    pub fn remove(&self) {
        self.doc.tree_mut().detach(self.id);
    }

    pub fn is_connected(&self) -> bool {
        self.doc.tree().is_connected(self.id)
    }

    pub fn text_content(&self) -> String {
        self.doc.tree().text_content(self.id)
    }

    pub fn set_text_content(&self, content: &str) -> Result<(), DomError> {
        self.doc.tree_mut().set_text_content(self.id, content)
    }

    pub fn outer_html(&self) -> String {
        serialize_outer(&self.doc.tree(), self.id)
    }

    pub fn supports_checked(&self) -> bool {
        self.with_node(|n| n.as_element().is_some_and(|e| e.supports_checked()))
            .unwrap_or(false)
    }

    pub fn checked(&self) -> bool {
        self.with_node(|n| n.as_element().is_some_and(|e| e.checked))
            .unwrap_or(false)
    }

    /// Set checkedness of an `<input>`
    pub fn set_checked(&self, checked: bool) -> Result<(), DomError> {
        let mut tree = self.doc.tree_mut();
        match tree.get_mut(self.id).and_then(Node::as_element_mut) {
            Some(elem) if elem.supports_checked() => {
                elem.checked = checked;
                Ok(())
            }
            Some(elem) => Err(DomError::NotCheckable(elem.local_name.clone())),
            None => Err(DomError::NotCheckable("#node".to_string())),
        }
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.doc.ptr_eq(&other.doc)
    }
}

impl Eq for NodeRef {}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_document() {
            f.write_str("#document")
        } else {
            write!(f, "{:?} {}", self.id, self.outer_html())
        }
    }
}
