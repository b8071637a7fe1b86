//! Role wrappers
//!
//! Thin handles around an element that expose the interactions a test
//! performs on that kind of control.

use std::ops::Deref;
use std::rc::Rc;

use fos_a11y::{AccessibleNode, accessible_description, accessible_name};

use crate::error::{QueryError, Result};
use crate::report::Reporter;

/// Text input
#[derive(Debug, Clone)]
pub struct TextboxRole<N> {
    element: N,
}

impl<N: AccessibleNode> TextboxRole<N> {
    pub fn new(element: N) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &N {
        &self.element
    }

    /// Current value, empty when unset
    pub fn value(&self) -> String {
        self.element.attribute("value").unwrap_or_default()
    }

    /// Simulate typing `text`. Only the `value` content attribute is
    /// updated; no input events are dispatched.
    pub fn write(&self, text: &str) {
        self.element.set_attribute("value", text);
    }

    pub fn clear(&self) {
        self.element.set_attribute("value", "");
    }

    pub fn name(&self) -> String {
        accessible_name(&self.element)
    }

    pub fn description(&self) -> String {
        accessible_description(&self.element)
    }
}

impl<N> Deref for TextboxRole<N> {
    type Target = N;

    fn deref(&self) -> &N {
        &self.element
    }
}

/// Checkbox
///
/// Only elements with a native checked state (`<input>`) can be toggled.
/// Anything else, such as `<div role="checkbox">`, is reported as fatal.
#[derive(Clone)]
pub struct CheckboxRole<N> {
    reporter: Rc<dyn Reporter>,
    element: N,
}

impl<N: AccessibleNode> CheckboxRole<N> {
    pub fn new(reporter: Rc<dyn Reporter>, element: N) -> Self {
        Self { reporter, element }
    }

    pub fn element(&self) -> &N {
        &self.element
    }

    pub fn is_checked(&self) -> bool {
        self.element.is_checked()
    }

    pub fn check(&self) {
        if let Err(err) = self.try_check() {
            self.reporter.fatal(&err.to_string());
        }
    }

    pub fn uncheck(&self) {
        if let Err(err) = self.try_uncheck() {
            self.reporter.fatal(&err.to_string());
        }
    }

    pub fn try_check(&self) -> Result<()> {
        self.set_checked("CheckboxRole::check", true)
    }

    pub fn try_uncheck(&self) -> Result<()> {
        self.set_checked("CheckboxRole::uncheck", false)
    }

    fn set_checked(&self, operation: &'static str, checked: bool) -> Result<()> {
        if !self.element.supports_checked() {
            return Err(QueryError::Unsupported {
                operation,
                reason: format!(
                    "only input elements are supported, got <{}>",
                    self.element.tag_name().to_ascii_lowercase()
                ),
            });
        }
        self.element.set_checked(checked);
        Ok(())
    }
}

impl<N> Deref for CheckboxRole<N> {
    type Target = N;

    fn deref(&self) -> &N {
        &self.element
    }
}

#[cfg(all(test, feature = "dom"))]
mod tests {
    use super::*;
    use crate::report::PanicReporter;
    use fos_dom::Document;

    #[test]
    fn test_textbox_value() {
        let doc = Document::new();
        let input = doc.create_element("input");
        input.set_attribute("aria-description", "Your work address");
        let textbox = TextboxRole::new(input);

        assert_eq!(textbox.value(), "");
        textbox.write("jane@example.com");
        assert_eq!(textbox.value(), "jane@example.com");
        assert_eq!(textbox.get_attribute("value").as_deref(), Some("jane@example.com"));
        textbox.clear();
        assert_eq!(textbox.value(), "");
        assert_eq!(textbox.description(), "Your work address");
    }

    #[test]
    fn test_checkbox_toggles() {
        let doc = Document::new();
        let input = doc.create_element("input");
        input.set_attribute("type", "checkbox");
        let checkbox = CheckboxRole::new(Rc::new(PanicReporter), input);

        assert!(!checkbox.is_checked());
        checkbox.check();
        assert!(checkbox.is_checked());
        checkbox.uncheck();
        assert!(!checkbox.is_checked());
    }

    #[test]
    fn test_try_check_unsupported() {
        let doc = Document::new();
        let div = doc.create_element("div");
        div.set_attribute("role", "checkbox");
        let checkbox = CheckboxRole::new(Rc::new(PanicReporter), div);

        let err = checkbox.try_check().unwrap_err();
        assert_eq!(
            err.to_string(),
            "CheckboxRole::check: only input elements are supported, got <div>"
        );
        assert!(!checkbox.is_checked());
    }

    #[test]
    #[should_panic(expected = "CheckboxRole::uncheck")]
    fn test_uncheck_unsupported_is_fatal() {
        let doc = Document::new();
        let span = doc.create_element("span");
        CheckboxRole::new(Rc::new(PanicReporter), span).uncheck();
    }
}
