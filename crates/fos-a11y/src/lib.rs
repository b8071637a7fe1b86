//! fOS Accessibility
//!
//! Accessible name, description and role computation for DOM elements.
//!
//! The resolvers are generic over [`AccessibleNode`], the small read-only
//! surface they need from a document tree. With the default `dom` feature
//! it is implemented for [`fos_dom::NodeRef`].
//!
//! All functions are pure and total: every element has a role (possibly
//! [`AriaRole::None`]) and a name (possibly empty). Nothing is cached, so
//! results always reflect the current tree.

pub mod aria;
pub mod name;
mod node;

pub use aria::{element_role, AriaRole};
pub use name::{
    accessible_description, accessible_description_of, accessible_name, accessible_name_of,
};
pub use node::AccessibleNode;
