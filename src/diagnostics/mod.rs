//! Validation outcomes and their reporting.
//!
//! Every rule and shape check returns an [`Outcome`]: the diagnostics it
//! produced, valid when there are none. Outcomes merge, so a caller runs any
//! number of checks over one callable and keeps scanning after the first
//! failure. At the edge of the pipeline the accumulated diagnostics are handed
//! to a [`DiagnosticSink`] and, when the caller tracks one, folded into an
//! [`IsValid`] flag.
//!
//! ```rust
//! use paramshape::checks::arity;
//! use paramshape::core::{Callable, Parameter};
//! use paramshape::diagnostics::{CollectingSink, IsValid};
//!
//! let callable = Callable::new("onCreate", vec![Parameter::of_type("a", "int")]);
//! let mut valid = IsValid::new();
//! let mut sink = CollectingSink::new();
//!
//! let outcome = arity::zero_parameters(&callable);
//! outcome.report(&callable, &mut sink);
//! valid.record(&outcome);
//!
//! assert!(!valid.is_valid());
//! assert_eq!(sink.len(), 1);
//! ```

mod outcome;
mod sink;

pub use outcome::{IsValid, Outcome};
pub use sink::{CollectingSink, DiagnosticSink, ReportedError, TracingSink};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder substituted with the callable's display name.
pub const CALLABLE_PLACEHOLDER: &str = "%s";

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Too many or too few parameters.
    ArityMismatch,
    /// A parameter at a fixed position has the wrong type.
    PositionalMismatch,
    /// No remaining expected slot accepts the parameter.
    UnrecognizedParameter,
    /// A required slot has no parameter.
    MissingRequired,
    /// A second parameter of a type that may appear at most once.
    DuplicateSingleton,
    /// A parameter outside the allowed type/annotation set.
    DisallowedParameter,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiagnosticKind::ArityMismatch => "arity mismatch",
            DiagnosticKind::PositionalMismatch => "positional type mismatch",
            DiagnosticKind::UnrecognizedParameter => "unrecognized parameter",
            DiagnosticKind::MissingRequired => "missing required parameter",
            DiagnosticKind::DuplicateSingleton => "duplicate parameter",
            DiagnosticKind::DisallowedParameter => "disallowed parameter",
        };
        f.write_str(label)
    }
}

/// One failure, carrying a message template.
///
/// Templates may contain [`CALLABLE_PLACEHOLDER`], replaced by the callable's
/// name when the diagnostic is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub template: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, template: impl Into<String>) -> Self {
        Self {
            kind,
            template: template.into(),
        }
    }

    /// Substitute the callable's name into the template.
    pub fn render(&self, callable_name: &str) -> String {
        self.template.replacen(CALLABLE_PLACEHOLDER, callable_name, 1)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_callable_name() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::ArityMismatch,
            "%s can only be used on a method with exactly one parameter, instead of 2",
        );
        assert_eq!(
            diagnostic.render("onResult"),
            "onResult can only be used on a method with exactly one parameter, instead of 2"
        );
    }

    #[test]
    fn test_render_without_placeholder_is_verbatim() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::DuplicateSingleton,
            "You can declare only one parameter of type android.view.View",
        );
        assert_eq!(diagnostic.render("onClick"), diagnostic.template);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&DiagnosticKind::MissingRequired).unwrap();
        assert_eq!(json, "\"missing_required\"");
    }
}
