//! fOS Query
//!
//! Accessibility-aware element lookup for tests. Elements are located the
//! way a user perceives them, by role and accessible name, rather than by
//! markup structure:
//!
//! ```ignore
//! let scope = Scope::document(Rc::new(PanicReporter), &doc);
//! let email = scope.textbox(&[&ByName::new("Email")]);
//! email.write("jane@example.com");
//! scope.get(&[&ByRole(AriaRole::Button), &ByName::new("Sign in")]);
//! ```
//!
//! Lookups that cannot meet their cardinality contract go to the scope's
//! [`Reporter`], which stops the current test by default.

mod error;
pub mod predicate;
mod report;
mod roles;
mod scope;
mod traverse;

pub use error::{QueryError, Result};
pub use predicate::{
    AllOf, ByH1, ByName, ByRole, ByTag, ElementPredicate, PredicateFn, UNKNOWN_PREDICATE,
    predicate_fn,
};
pub use report::{PanicReporter, RecordingReporter, Reporter};
pub use roles::{CheckboxRole, TextboxRole};
pub use scope::{DETACHED_ROOT, Scope};
pub use traverse::{Descendants, FindAll};

pub use fos_a11y::{
    AccessibleNode, AriaRole, accessible_description, accessible_description_of,
    accessible_name, accessible_name_of, element_role,
};
