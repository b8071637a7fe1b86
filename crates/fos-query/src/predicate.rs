//! Element predicates
//!
//! A predicate decides whether one element belongs in a result set and
//! describes itself for diagnostics. Built-in predicates match on
//! accessible name, role or tag; anything else can be expressed with
//! [`predicate_fn`].

use fos_a11y::{AccessibleNode, AriaRole, accessible_name, element_role};

/// Description used by predicates that do not provide their own
pub const UNKNOWN_PREDICATE: &str = "Unknown predicate. No description";

/// Filter over elements
pub trait ElementPredicate<N> {
    fn is_match(&self, node: &N) -> bool;

    /// Human readable description, shown in failure messages
    fn describe(&self) -> String {
        UNKNOWN_PREDICATE.to_string()
    }
}

/// Matches elements whose accessible name equals the given string exactly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByName(pub String);

impl ByName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl<N: AccessibleNode> ElementPredicate<N> for ByName {
    fn is_match(&self, node: &N) -> bool {
        accessible_name(node) == self.0
    }

    fn describe(&self) -> String {
        format!("By accessibility name: {}", self.0)
    }
}

/// Matches elements with the given role, explicit or implicit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByRole(pub AriaRole);

impl ByRole {
    pub fn new(role: impl Into<AriaRole>) -> Self {
        Self(role.into())
    }
}

impl<N: AccessibleNode> ElementPredicate<N> for ByRole {
    fn is_match(&self, node: &N) -> bool {
        element_role(node) == self.0
    }

    fn describe(&self) -> String {
        format!("By role: {}", self.0)
    }
}

/// Matches elements by tag name, ignoring case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByTag(pub String);

impl ByTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }
}

impl<N: AccessibleNode> ElementPredicate<N> for ByTag {
    fn is_match(&self, node: &N) -> bool {
        node.has_tag(&self.0)
    }

    fn describe(&self) -> String {
        format!("By tag: {}", self.0.to_ascii_lowercase())
    }
}

/// Matches `<h1>` elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByH1;

impl<N: AccessibleNode> ElementPredicate<N> for ByH1 {
    fn is_match(&self, node: &N) -> bool {
        node.has_tag("H1")
    }

    fn describe(&self) -> String {
        "Main heading (<h1>)".to_string()
    }
}

/// Conjunction of predicates. The empty conjunction matches everything.
pub struct AllOf<'p, N>(pub Vec<&'p dyn ElementPredicate<N>>);

impl<'p, N> AllOf<'p, N> {
    pub fn new(predicates: &[&'p dyn ElementPredicate<N>]) -> Self {
        Self(predicates.to_vec())
    }
}

impl<N> ElementPredicate<N> for AllOf<'_, N> {
    fn is_match(&self, node: &N) -> bool {
        self.0.iter().all(|p| p.is_match(node))
    }

    fn describe(&self) -> String {
        self.0
            .iter()
            .map(|p| p.describe())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Adapts a closure into a predicate with no description
pub struct PredicateFn<F>(pub F);

impl<N, F> ElementPredicate<N> for PredicateFn<F>
where
    F: Fn(&N) -> bool,
{
    fn is_match(&self, node: &N) -> bool {
        (self.0)(node)
    }
}

/// Wrap a closure as an [`ElementPredicate`].
///
/// ```ignore
/// let has_href = predicate_fn(|n: &NodeRef| n.has_attribute("href"));
/// ```
pub fn predicate_fn<N, F>(f: F) -> PredicateFn<F>
where
    F: Fn(&N) -> bool,
{
    PredicateFn(f)
}

#[cfg(all(test, feature = "dom"))]
mod tests {
    use super::*;
    use fos_dom::{Document, NodeRef};

    #[test]
    fn test_descriptions() {
        let name = ByName::new("Email");
        let role = ByRole(AriaRole::Link);
        let tag = ByTag::new("SECTION");
        let h1 = ByH1;
        let custom = predicate_fn(|_: &NodeRef| true);

        assert_eq!(ElementPredicate::<NodeRef>::describe(&name), "By accessibility name: Email");
        assert_eq!(ElementPredicate::<NodeRef>::describe(&role), "By role: link");
        assert_eq!(ElementPredicate::<NodeRef>::describe(&tag), "By tag: section");
        assert_eq!(ElementPredicate::<NodeRef>::describe(&h1), "Main heading (<h1>)");
        assert_eq!(ElementPredicate::<NodeRef>::describe(&custom), UNKNOWN_PREDICATE);

        let all: AllOf<'_, NodeRef> = AllOf::new(&[&role, &name]);
        assert_eq!(all.describe(), "By role: link, By accessibility name: Email");
        assert_eq!(AllOf::<NodeRef>::new(&[]).describe(), "");
    }

    #[test]
    fn test_matching() {
        let doc = Document::new();
        let link = doc.create_element("a");
        link.set_attribute("href", "/");
        link.set_text_content("Home").unwrap();
        let heading = doc.create_element("h1");

        assert!(ByRole::new("link").is_match(&link));
        assert!(ByName::new("Home").is_match(&link));
        assert!(!ByName::new("home").is_match(&link));
        assert!(ByTag::new("a").is_match(&link));
        assert!(ByH1.is_match(&heading));
        assert!(!ByH1.is_match(&link));

        let has_href = predicate_fn(|n: &NodeRef| n.has_attribute("href"));
        assert!(has_href.is_match(&link));
        assert!(!has_href.is_match(&heading));
    }

    #[test]
    fn test_all_of() {
        let doc = Document::new();
        let button = doc.create_element("button");
        button.set_text_content("Save").unwrap();

        let role = ByRole(AriaRole::Button);
        let right = ByName::new("Save");
        let wrong = ByName::new("Cancel");

        assert!(AllOf::<NodeRef>::new(&[&role, &right]).is_match(&button));
        assert!(!AllOf::<NodeRef>::new(&[&role, &wrong]).is_match(&button));
        assert!(AllOf::<NodeRef>::new(&[]).is_match(&button));
    }
}
