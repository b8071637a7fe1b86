//! Accessible name and description
//!
//! A simplified take on the [accname] algorithm: sources are tried in a
//! fixed priority order and the first one present wins. Referenced
//! elements contribute their raw text content; names are not computed
//! recursively.
//!
//! [accname]: https://w3c.github.io/accname/

use crate::AccessibleNode;

/// Tags whose name comes from their own text content
const NAME_FROM_CONTENT: &[&str] = &["A", "BUTTON", "LI"];

/// Returns the [accessible name] of an element.
///
/// Sources, in order:
/// 1. `aria-labelledby`: text of each referenced element, joined by a space
/// 2. `aria-label`, verbatim, even when empty
/// 3. for `<input>`, the text of the `<label for=...>` pointing at its id
/// 4. for `<a>`, `<button>` and `<li>`, the element's own text
///
/// Otherwise the name is empty.
///
/// [accessible name]: https://w3c.github.io/accname/#dfn-accessible-name
pub fn accessible_name<N: AccessibleNode>(node: &N) -> String {
    if let Some(ids) = node.attribute("aria-labelledby") {
        return referenced_text(node, &ids, " ");
    }
    if let Some(label) = node.attribute("aria-label") {
        return label;
    }

    if node.has_tag("INPUT") {
        if let Some(id) = node.attribute("id") {
            let selector = format!("label[for='{}']", escape_quoted(&id));
            if let Some(label) = node.query_selector(&selector) {
                return label.text_content();
            }
        }
    } else if NAME_FROM_CONTENT.iter().any(|tag| node.has_tag(tag)) {
        return node.text_content();
    }

    String::new()
}

/// [`accessible_name`] for an optional node; `None` has an empty name.
pub fn accessible_name_of<N: AccessibleNode>(node: Option<&N>) -> String {
    node.map(accessible_name).unwrap_or_default()
}

/// Returns the [accessible description] of an element: the text of the
/// elements referenced by `aria-describedby` joined by newlines, else the
/// `aria-description` attribute, else empty.
///
/// [accessible description]: https://w3c.github.io/accname/#dfn-accessible-description
pub fn accessible_description<N: AccessibleNode>(node: &N) -> String {
    if let Some(ids) = node.attribute("aria-describedby") {
        return referenced_text(node, &ids, "\n");
    }
    node.attribute("aria-description").unwrap_or_default()
}

pub fn accessible_description_of<N: AccessibleNode>(node: Option<&N>) -> String {
    node.map(accessible_description).unwrap_or_default()
}

/// Escape a value for a single-quoted selector string
fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Resolve a space-separated id list. Ids that match nothing are skipped.
fn referenced_text<N: AccessibleNode>(node: &N, ids: &str, separator: &str) -> String {
    ids.split(' ')
        .filter_map(|id| node.get_element_by_id(id))
        .map(|target| target.text_content())
        .collect::<Vec<_>>()
        .join(separator)
}
