//! Failure reporting
//!
//! Lookups that cannot satisfy their cardinality contract report through a
//! [`Reporter`] instead of returning an error. The reporter decides what
//! "stop this test" means; the default panics, which fails the current
//! `#[test]` without touching other tests.

use std::cell::RefCell;

/// Sink for query failures and diagnostics
pub trait Reporter {
    /// Report a failure and stop the current test
    fn fatal(&self, message: &str) -> !;

    /// Report a diagnostic without stopping
    fn warn(&self, message: &str);
}

/// Logs through `tracing` and panics on fatal failures
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    fn fatal(&self, message: &str) -> ! {
        tracing::error!("{}", message);
        panic!("{message}")
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Keeps warnings for later inspection; panics on fatal failures
#[derive(Debug, Default)]
pub struct RecordingReporter {
    warnings: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings reported so far, oldest first
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }
}

impl Reporter for RecordingReporter {
    fn fatal(&self, message: &str) -> ! {
        panic!("{message}")
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
        self.warnings.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_reporter_keeps_warnings() {
        let reporter = RecordingReporter::new();
        reporter.warn("first");
        reporter.warn("second");
        assert_eq!(reporter.warnings(), ["first", "second"]);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_panic_reporter_fatal() {
        PanicReporter.fatal("boom");
    }
}
