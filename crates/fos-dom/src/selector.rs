//! Simple selectors
//!
//! Enough of the selector grammar for test lookups: a single compound
//! selector made of an optional type selector followed by any number of
//! `#id`, `.class` and `[attr]` / `[attr=value]` parts. Combinators and
//! pseudo-classes are not supported.

use crate::{DomError, ElementData};

/// Attribute selector `[name]` or `[name=value]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrSelector {
    pub name: String,
    pub value: Option<String>,
}

/// Parsed compound selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// Lowercase tag name, `None` for `*` or no type selector
    pub tag: Option<String>,
    pub ids: Vec<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<AttrSelector>,
}

impl Selector {
    /// Parse a compound selector such as `label[for='email']`
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(invalid(input));
        }

        let mut selector = Selector::default();
        let mut rest = s;

        let tag_end = rest.find(['#', '.', '[']).unwrap_or(rest.len());
        let tag = &rest[..tag_end];
        if !tag.is_empty() && tag != "*" {
            if !is_ident(tag) {
                return Err(invalid(input));
            }
            selector.tag = Some(tag.to_ascii_lowercase());
        }
        rest = &rest[tag_end..];

        while let Some(first) = rest.chars().next() {
            match first {
                '#' | '.' => {
                    let body = &rest[1..];
                    let end = body.find(['#', '.', '[']).unwrap_or(body.len());
                    let name = &body[..end];
                    if !is_ident(name) {
                        return Err(invalid(input));
                    }
                    if first == '#' {
                        selector.ids.push(name.to_string());
                    } else {
                        selector.classes.push(name.to_string());
                    }
                    rest = &body[end..];
                }
                '[' => {
                    let (attr, consumed) = parse_attr(&rest[1..]).ok_or_else(|| invalid(input))?;
                    selector.attrs.push(attr);
                    rest = &rest[1 + consumed..];
                }
                _ => return Err(invalid(input)),
            }
        }

        Ok(selector)
    }

    /// Check an element against every part of the selector
    pub fn matches(&self, elem: &ElementData) -> bool {
        if let Some(tag) = &self.tag {
            if !elem.local_name.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if !self.ids.iter().all(|id| elem.id() == Some(id.as_str())) {
            return false;
        }
        if !self.classes.iter().all(|c| elem.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|attr| match (&attr.value, elem.get_attr(&attr.name)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(want), Some(got)) => want == got,
        })
    }
}

fn invalid(input: &str) -> DomError {
    DomError::InvalidSelector(input.to_string())
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Parse the inside of `[...]`. Returns the selector and the number of bytes
/// consumed including the closing bracket.
fn parse_attr(body: &str) -> Option<(AttrSelector, usize)> {
    let name_end = body.find(['=', ']'])?;
    let name = body[..name_end].trim();
    if !is_ident(name) {
        return None;
    }

    if body[name_end..].starts_with(']') {
        let attr = AttrSelector {
            name: name.to_string(),
            value: None,
        };
        return Some((attr, name_end + 1));
    }

    let after_eq = &body[name_end + 1..];
    let trimmed = after_eq.trim_start();
    let lead = after_eq.len() - trimmed.len();

    let (value, value_len) = match trimmed.chars().next()? {
        quote @ ('\'' | '"') => unquote(trimmed, quote)?,
        _ => {
            let close = trimmed.find(']')?;
            (trimmed[..close].trim_end().to_string(), close)
        }
    };

    let tail = &trimmed[value_len..];
    let tail_trimmed = tail.trim_start();
    if !tail_trimmed.starts_with(']') {
        return None;
    }
    let consumed = name_end + 1 + lead + value_len + (tail.len() - tail_trimmed.len()) + 1;

    let attr = AttrSelector {
        name: name.to_string(),
        value: Some(value),
    };
    Some((attr, consumed))
}

/// Read a quoted string starting at its opening quote. A backslash escapes
/// the next character. Returns the unescaped value and the bytes consumed
/// including both quotes.
fn unquote(s: &str, quote: char) -> Option<(String, usize)> {
    let mut value = String::new();
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if escaped {
            value.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some((value, i + c.len_utf8()));
        } else {
            value.push(c);
        }
    }
    None
}
