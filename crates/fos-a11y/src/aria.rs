//! ARIA roles
//!
//! [ARIA roles] give elements semantic meaning for assistive technology.
//! Many HTML elements carry an implicit role (`<button>` is a button,
//! `<a>` is a link), and any element can declare one explicitly with the
//! `role` attribute, e.g. `<div role="alert">`.
//!
//! Only the vocabulary needed to find and name elements in tests is
//! modelled. Explicit roles outside it are preserved verbatim as
//! [`AriaRole::Custom`].
//!
//! [ARIA roles]: https://developer.mozilla.org/en-US/docs/Web/Accessibility/ARIA/Roles

use std::fmt;

use crate::AccessibleNode;

/// ARIA role
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AriaRole {
    /// The element has no role
    #[default]
    None,
    Alert,
    Banner,
    Button,
    Checkbox,
    Form,
    Link,
    Main,
    /// Not an official ARIA role. Firefox's accessibility tools report
    /// `<input type="password">` this way; without it password fields have
    /// no role at all and cannot be told apart from other inputs.
    PasswordText,
    TextBox,
    /// Any explicit role outside the known vocabulary, kept as written
    Custom(String),
}

impl AriaRole {
    /// Parse a role token. Unknown values become [`AriaRole::Custom`]; the
    /// empty string is [`AriaRole::None`]. Matching is exact, no case folding.
    pub fn parse(s: &str) -> Self {
        match s {
            "" => Self::None,
            "alert" => Self::Alert,
            "banner" => Self::Banner,
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "form" => Self::Form,
            "link" => Self::Link,
            "main" => Self::Main,
            "password text" => Self::PasswordText,
            "textbox" => Self::TextBox,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "",
            Self::Alert => "alert",
            Self::Banner => "banner",
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Form => "form",
            Self::Link => "link",
            Self::Main => "main",
            Self::PasswordText => "password text",
            Self::TextBox => "textbox",
            Self::Custom(s) => s,
        }
    }
}

impl fmt::Display for AriaRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for AriaRole {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Implicit roles by tag name
const ELEMENT_ROLES: &[(&str, AriaRole)] = &[
    ("MAIN", AriaRole::Main),
    ("BUTTON", AriaRole::Button),
    ("A", AriaRole::Link),
    ("FORM", AriaRole::Form),
    ("HEADER", AriaRole::Banner),
];

/// Determine the role of an element.
///
/// An explicit `role` attribute always wins and is not validated. `<input>`
/// derives its role from `type`. Everything else falls back to the implicit
/// role of its tag, or [`AriaRole::None`].
pub fn element_role<N: AccessibleNode>(node: &N) -> AriaRole {
    if let Some(role) = node.attribute("role") {
        // TODO: validate against the WAI-ARIA role list once the vocabulary is complete
        return AriaRole::parse(&role);
    }

    if node.has_tag("INPUT") {
        return match node.attribute("type").as_deref() {
            Some("password") => AriaRole::PasswordText,
            Some("checkbox") => AriaRole::Checkbox,
            Some("button" | "submit" | "reset") => AriaRole::Button,
            _ => AriaRole::TextBox,
        };
    }

    let tag = node.tag_name();
    ELEMENT_ROLES
        .iter()
        .find(|(name, _)| tag.eq_ignore_ascii_case(name))
        .map(|(_, role)| role.clone())
        .unwrap_or_default()
}
