//! Diagnostic sinks
//!
//! Soft failures such as writing to an unlinked parameter are reported to a
//! [`DiagnosticSink`] instead of being printed. Hosts pick the sink: log it,
//! record it, or ignore it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::warn;

/// A soft failure noticed while handling a parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A value changed but no node was linked to receive the signal
    Unlinked { parameter: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Unlinked { parameter } => {
                write!(f, "live parameter '{parameter}' not linked to node")
            }
        }
    }
}

/// Receiver of [`Diagnostic`]s
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Default sink: forwards every diagnostic to `log::warn!`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
    }
}

/// Sink that drops every diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreDiagnostics;

impl DiagnosticSink for IgnoreDiagnostics {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Sink that keeps every diagnostic for later inspection
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    recorded: RefCell<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Diagnostics reported so far, oldest first
    pub fn recorded(&self) -> Vec<Diagnostic> {
        self.recorded.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.recorded.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.recorded.borrow_mut().clear();
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        self.recorded.borrow_mut().push(diagnostic);
    }
}

/// The sink new parameters start with
pub(crate) fn default_sink() -> Rc<dyn DiagnosticSink> {
    Rc::new(LogDiagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink() {
        let sink = RecordingDiagnostics::new();
        assert!(sink.is_empty());

        sink.report(Diagnostic::Unlinked {
            parameter: "Blur Radius".to_string(),
        });
        assert_eq!(sink.len(), 1);
        assert_eq!(
            sink.recorded()[0].to_string(),
            "live parameter 'Blur Radius' not linked to node"
        );

        sink.clear();
        assert!(sink.is_empty());
    }
}
