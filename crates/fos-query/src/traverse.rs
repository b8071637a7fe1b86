//! Lazy pre-order traversal
//!
//! [`Descendants`] walks a subtree depth-first, parents before children,
//! siblings in document order. It reads a node's children only when the
//! consumer asks for the next element, so dropping the iterator early
//! stops all work. Every call to [`Scope::all`](crate::Scope::all) starts
//! a fresh walk over the live tree.

use std::vec::IntoIter;

use fos_a11y::AccessibleNode;

use crate::predicate::{AllOf, ElementPredicate};

/// Pre-order iterator over the elements under a container
pub struct Descendants<N> {
    /// Element container, yielded before anything else
    root: Option<N>,
    /// Last yielded node whose children have not been read yet
    expand: Option<N>,
    /// One child cursor per open level
    stack: Vec<IntoIter<N>>,
}

impl<N: AccessibleNode> Descendants<N> {
    /// Walk `container` and its descendants. A non-element container, such
    /// as a document node, is not yielded itself.
    pub fn new(container: N) -> Self {
        if container.is_element() {
            Self {
                root: Some(container),
                expand: None,
                stack: Vec::new(),
            }
        } else {
            Self {
                root: None,
                expand: Some(container),
                stack: Vec::new(),
            }
        }
    }
}

impl<N: AccessibleNode> Iterator for Descendants<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        if let Some(root) = self.root.take() {
            self.expand = Some(root.clone());
            return Some(root);
        }

        if let Some(parent) = self.expand.take() {
            self.stack.push(parent.children().into_iter());
        }

        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(node) => {
                    self.expand = Some(node.clone());
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<N: AccessibleNode> std::iter::FusedIterator for Descendants<N> {}

/// Elements under a container that satisfy every predicate, in pre-order
pub struct FindAll<'p, N> {
    nodes: Descendants<N>,
    predicate: AllOf<'p, N>,
}

impl<'p, N: AccessibleNode> FindAll<'p, N> {
    pub fn new(container: N, predicates: &[&'p dyn ElementPredicate<N>]) -> Self {
        Self {
            nodes: Descendants::new(container),
            predicate: AllOf::new(predicates),
        }
    }

    /// Combined description of the predicates being applied
    pub fn describe(&self) -> String {
        self.predicate.describe()
    }
}

impl<N: AccessibleNode> Iterator for FindAll<'_, N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let predicate = &self.predicate;
        self.nodes.find(|n| predicate.is_match(n))
    }
}

#[cfg(all(test, feature = "dom"))]
mod tests {
    use super::*;
    use crate::predicate::ByTag;
    use fos_dom::{Document, NodeRef};

    fn tags(nodes: impl Iterator<Item = NodeRef>) -> Vec<String> {
        nodes
            .map(|n| n.get_attribute("id").unwrap_or_else(|| n.tag_name()))
            .collect()
    }

    /// R > (A > A1), B
    fn fixture() -> (Document, NodeRef) {
        let doc = Document::empty();
        let r = doc.create_element("div");
        r.set_attribute("id", "R");
        let a = r.append_element("div").unwrap();
        a.set_attribute("id", "A");
        a.append_element("p").unwrap().set_attribute("id", "A1");
        r.append_element("div").unwrap().set_attribute("id", "B");
        doc.document_node().append_child(&r).unwrap();
        (doc, r)
    }

    #[test]
    fn test_preorder() {
        let (_doc, r) = fixture();
        assert_eq!(tags(Descendants::new(r)), ["R", "A", "A1", "B"]);
    }

    #[test]
    fn test_document_container_is_not_yielded() {
        let (doc, _) = fixture();
        assert_eq!(tags(Descendants::new(doc.document_node())), ["R", "A", "A1", "B"]);
    }

    #[test]
    fn test_leaf_container() {
        let doc = Document::empty();
        let leaf = doc.create_element("span");
        assert_eq!(Descendants::new(leaf).count(), 1);
        assert_eq!(Descendants::new(doc.document_node()).count(), 0);
    }

    #[test]
    fn test_early_stop_and_restart() {
        let (_doc, r) = fixture();
        let mut walk = Descendants::new(r.clone());
        assert_eq!(walk.next().unwrap(), r);
        drop(walk);

        assert_eq!(tags(Descendants::new(r)), ["R", "A", "A1", "B"]);
    }

    #[test]
    fn test_sees_mutations_between_pulls() {
        let (_doc, r) = fixture();
        let mut walk = Descendants::new(r.clone());
        assert_eq!(walk.next().unwrap(), r);

        // R's children have not been read yet.
        r.append_element("div").unwrap().set_attribute("id", "C");
        assert_eq!(tags(walk), ["A", "A1", "B", "C"]);
    }

    #[test]
    fn test_find_all() {
        let (_doc, r) = fixture();
        let div = ByTag::new("div");
        let found = FindAll::new(r, &[&div]);
        assert_eq!(found.describe(), "By tag: div");
        assert_eq!(tags(found), ["R", "A", "B"]);
    }
}
