use super::{Diagnostic, DiagnosticKind};
use crate::core::{Callable, SourceLocation};
use serde::Serialize;
use tracing::error;

/// Receives failures against the callable they belong to.
///
/// Every call surfaces independently; sinks do not deduplicate.
pub trait DiagnosticSink {
    fn report_error(&mut self, callable: &Callable, diagnostic: &Diagnostic);
}

/// A rendered diagnostic attached to its callable's declaration site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedError {
    pub callable: String,
    pub location: Option<SourceLocation>,
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Sink that keeps every report in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    reports: Vec<ReportedError>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[ReportedError] {
        &self.reports
    }

    pub fn messages(&self) -> Vec<&str> {
        self.reports.iter().map(|r| r.message.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.reports)
    }
}

impl DiagnosticSink for CollectingSink {
    fn report_error(&mut self, callable: &Callable, diagnostic: &Diagnostic) {
        self.reports.push(ReportedError {
            callable: callable.name.clone(),
            location: callable.location.clone(),
            kind: diagnostic.kind,
            message: diagnostic.render(&callable.name),
        });
    }
}

/// Sink that emits each report as a `tracing` error event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report_error(&mut self, callable: &Callable, diagnostic: &Diagnostic) {
        let location = callable
            .location
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        error!(
            callable = %callable.name,
            location = %location,
            kind = %diagnostic.kind,
            "{}",
            diagnostic.render(&callable.name)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Parameter;
    use crate::diagnostics::Outcome;

    #[test]
    fn test_collecting_sink_renders_and_keeps_location() {
        let callable = Callable::new("onClick", vec![Parameter::of_type("a", "int")])
            .at(SourceLocation::new("Main.java", 10, 4));
        let mut sink = CollectingSink::new();
        let mut outcome = Outcome::valid();
        outcome.invalidate(DiagnosticKind::ArityMismatch, "%s cannot have any parameters");
        outcome.invalidate(DiagnosticKind::ArityMismatch, "%s cannot have any parameters");

        outcome.report(&callable, &mut sink);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.reports()[0].message, "onClick cannot have any parameters");
        assert_eq!(
            sink.reports()[0].location,
            Some(SourceLocation::new("Main.java", 10, 4))
        );
    }

    #[test]
    fn test_collecting_sink_json() {
        let callable = Callable::new("onClick", vec![]);
        let mut sink = CollectingSink::new();
        sink.report_error(
            &callable,
            &Diagnostic::new(DiagnosticKind::MissingRequired, "%s needs a view"),
        );
        let json = sink.to_json().unwrap();
        assert!(json.contains("\"missing_required\""));
        assert!(json.contains("onClick needs a view"));
    }

    #[test]
    fn test_tracing_sink_accepts_reports() {
        let callable = Callable::new("onClick", vec![]);
        let mut sink = TracingSink;
        sink.report_error(
            &callable,
            &Diagnostic::new(DiagnosticKind::MissingRequired, "%s needs a view"),
        );
    }
}
