//! Node capability surface
//!
//! The accessibility and query layers only need a handful of read
//! operations from a document tree. [`AccessibleNode`] names them so the
//! resolvers stay independent of any particular DOM implementation.

/// A node handle the accessibility resolvers can inspect.
///
/// Handles are expected to be cheap to clone and to observe the live tree:
/// every call reads the current state, nothing is snapshotted.
pub trait AccessibleNode: Clone {
    /// Uppercase tag name for elements (`"INPUT"`), empty otherwise
    fn tag_name(&self) -> String;

    /// Whether this is an element. Document and fragment nodes are not.
    fn is_element(&self) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    /// Element children in document order
    fn children(&self) -> Vec<Self>;

    /// Whether the node is currently attached to its document
    fn is_connected(&self) -> bool;

    /// Look up an element by id in the node's owner document
    fn get_element_by_id(&self, id: &str) -> Option<Self>;

    /// First element in the owner document matching a simple selector such
    /// as `label[for='email']`. Unsupported selectors yield `None`.
    fn query_selector(&self, selector: &str) -> Option<Self>;

    /// Concatenated descendant text, in document order
    fn text_content(&self) -> String;

    /// Serialized markup, used in diagnostics
    fn outer_html(&self) -> String;

    /// Whether the node natively carries a checked state
    fn supports_checked(&self) -> bool;

    fn is_checked(&self) -> bool;

    /// Set the checked state. Callers check [`supports_checked`] first;
    /// implementations may ignore the call otherwise.
    ///
    /// [`supports_checked`]: AccessibleNode::supports_checked
    fn set_checked(&self, checked: bool);

    /// Case-insensitive tag comparison
    fn has_tag(&self, tag: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag)
    }
}

#[cfg(feature = "dom")]
mod dom {
    use super::AccessibleNode;
    use fos_dom::NodeRef;

    impl AccessibleNode for NodeRef {
        fn tag_name(&self) -> String {
            NodeRef::tag_name(self)
        }

        fn is_element(&self) -> bool {
            NodeRef::is_element(self)
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.get_attribute(name)
        }

        fn set_attribute(&self, name: &str, value: &str) {
            NodeRef::set_attribute(self, name, value)
        }

        fn children(&self) -> Vec<Self> {
            NodeRef::children(self)
        }

        fn is_connected(&self) -> bool {
            NodeRef::is_connected(self)
        }

        fn get_element_by_id(&self, id: &str) -> Option<Self> {
            self.owner_document().get_element_by_id(id)
        }

        fn query_selector(&self, selector: &str) -> Option<Self> {
            match self.owner_document().query_selector(selector) {
                Ok(found) => found,
                Err(err) => {
                    tracing::debug!("Selector lookup failed: {}", err);
                    None
                }
            }
        }

        fn text_content(&self) -> String {
            NodeRef::text_content(self)
        }

        fn outer_html(&self) -> String {
            NodeRef::outer_html(self)
        }

        fn supports_checked(&self) -> bool {
            NodeRef::supports_checked(self)
        }

        fn is_checked(&self) -> bool {
            self.checked()
        }

        fn set_checked(&self, checked: bool) {
            if let Err(err) = NodeRef::set_checked(self, checked) {
                tracing::debug!("Ignoring set_checked: {}", err);
            }
        }
    }
}
