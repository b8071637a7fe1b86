//! Query scope
//!
//! A [`Scope`] pairs a container node with a [`Reporter`]. Lookups walk the
//! container's subtree lazily and enforce how many elements may match:
//!
//! | lookup  | 0 matches | 1 match | 2+ matches |
//! |---------|-----------|---------|------------|
//! | `find`  | `None`    | `Some`  | fatal      |
//! | `get`   | fatal     | node    | fatal      |
//! | `query` | `None`    | `Some`  | fatal      |
//!
//! Each `try_` variant returns the same outcome as a [`QueryError`] instead
//! of reporting it.

use std::rc::Rc;

use fos_a11y::{AccessibleNode, AriaRole};

use crate::error::{QueryError, Result};
use crate::predicate::{AllOf, ByRole, ElementPredicate};
use crate::report::{PanicReporter, Reporter};
use crate::roles::{CheckboxRole, TextboxRole};
use crate::traverse::{Descendants, FindAll};

pub const DETACHED_ROOT: &str = "Scope root element not connected to document";

/// A region of a tree that queries run against
#[derive(Clone)]
pub struct Scope<N> {
    reporter: Rc<dyn Reporter>,
    container: N,
}

impl<N: AccessibleNode> Scope<N> {
    pub fn new(reporter: Rc<dyn Reporter>, container: N) -> Self {
        Self {
            reporter,
            container,
        }
    }

    /// Scope that panics on fatal failures
    pub fn panicking(container: N) -> Self {
        Self::new(Rc::new(PanicReporter), container)
    }

    pub fn container(&self) -> &N {
        &self.container
    }

    /// All elements in the scope in pre-order. An element container comes
    /// first. Every call starts a new walk over the current tree.
    pub fn all(&self) -> Descendants<N> {
        Descendants::new(self.container.clone())
    }

    /// Elements matching every predicate, in pre-order
    pub fn find_all<'p>(&self, predicates: &[&'p dyn ElementPredicate<N>]) -> FindAll<'p, N> {
        FindAll::new(self.container.clone(), predicates)
    }

    /// At most one match; stops walking after the second
    pub fn try_find(&self, predicates: &[&dyn ElementPredicate<N>]) -> Result<Option<N>> {
        let mut found = self.find_all(predicates);
        let Some(first) = found.next() else {
            return Ok(None);
        };
        match found.next() {
            None => Ok(Some(first)),
            Some(second) => Err(QueryError::Ambiguous {
                predicate: found.describe(),
                first: first.outer_html(),
                second: second.outer_html(),
            }),
        }
    }

    /// Find the single element matching `predicates`, if any. More than one
    /// match is fatal.
    pub fn find(&self, predicates: &[&dyn ElementPredicate<N>]) -> Option<N> {
        match self.try_find(predicates) {
            Ok(found) => found,
            Err(err) => self.reporter.fatal(&err.to_string()),
        }
    }

    /// Exactly one match. Warns when the container is detached from its
    /// document, since nothing added to the live document can show up.
    pub fn try_get(&self, predicates: &[&dyn ElementPredicate<N>]) -> Result<N> {
        if !self.container.is_connected() {
            self.reporter.warn(DETACHED_ROOT);
        }
        match self.try_find(predicates)? {
            Some(node) => {
                tracing::debug!("Resolved {}", node.tag_name());
                Ok(node)
            }
            None => Err(QueryError::NoMatch {
                predicate: AllOf::new(predicates).describe(),
            }),
        }
    }

    /// The element matching `predicates`. No match or several matches are
    /// fatal.
    pub fn get(&self, predicates: &[&dyn ElementPredicate<N>]) -> N {
        match self.try_get(predicates) {
            Ok(node) => node,
            Err(err) => self.reporter.fatal(&err.to_string()),
        }
    }

    /// Optional lookup for asserting presence or absence
    pub fn query(&self, predicates: &[&dyn ElementPredicate<N>]) -> Option<N> {
        self.find(predicates)
    }

    /// Narrow the scope to the element matching `predicates`
    pub fn subscope(&self, predicates: &[&dyn ElementPredicate<N>]) -> Scope<N> {
        Scope {
            reporter: Rc::clone(&self.reporter),
            container: self.get(predicates),
        }
    }

    pub fn textbox(&self, predicates: &[&dyn ElementPredicate<N>]) -> TextboxRole<N> {
        TextboxRole::new(self.get_with_role(AriaRole::TextBox, predicates))
    }

    pub fn checkbox(&self, predicates: &[&dyn ElementPredicate<N>]) -> CheckboxRole<N> {
        let node = self.get_with_role(AriaRole::Checkbox, predicates);
        CheckboxRole::new(Rc::clone(&self.reporter), node)
    }

    /// `<input type="password">` fields
    pub fn password_text(&self, predicates: &[&dyn ElementPredicate<N>]) -> TextboxRole<N> {
        TextboxRole::new(self.get_with_role(AriaRole::PasswordText, predicates))
    }

    fn get_with_role(&self, role: AriaRole, predicates: &[&dyn ElementPredicate<N>]) -> N {
        let role = ByRole(role);
        let mut all: Vec<&dyn ElementPredicate<N>> = predicates.to_vec();
        all.push(&role);
        self.get(&all)
    }
}

#[cfg(feature = "dom")]
impl Scope<fos_dom::NodeRef> {
    /// Scope over a whole document. The container is the document node,
    /// so replacing the root element is picked up by later queries.
    pub fn document(reporter: Rc<dyn Reporter>, document: &fos_dom::Document) -> Self {
        Self::new(reporter, document.document_node())
    }
}
