#[cfg(any(test, feature = "test-support"))]
use std::cell::RefCell;

#[cfg(any(test, feature = "test-support"))]
use super::DiagnosticSink;

/// Keeps every warning in memory so tests can assert on them.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct RecordedDiagnostics {
    messages: RefCell<Vec<String>>,
}

#[cfg(any(test, feature = "test-support"))]
impl RecordedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

#[cfg(any(test, feature = "test-support"))]
impl DiagnosticSink for RecordedDiagnostics {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
