use super::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::core::Callable;
use serde::Serialize;
use stillwater::{NonEmptyVec, Validation};

/// Accumulated result of one or more checks over a callable.
///
/// Valid exactly when no diagnostic was recorded. Checks that flag every
/// offending parameter push one diagnostic each; checks that flag the
/// callable as a whole push one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outcome {
    diagnostics: Vec<Diagnostic>,
}

impl Outcome {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn failure(kind: DiagnosticKind, template: impl Into<String>) -> Self {
        Self {
            diagnostics: vec![Diagnostic::new(kind, template)],
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn invalidate(&mut self, kind: DiagnosticKind, template: impl Into<String>) {
        self.push(Diagnostic::new(kind, template));
    }

    /// Append another outcome's diagnostics, keeping their order.
    pub fn absorb(&mut self, other: Outcome) {
        self.diagnostics.extend(other.diagnostics);
    }

    #[must_use]
    pub fn merge(mut self, other: Outcome) -> Self {
        self.absorb(other);
        self
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    /// Messages with the callable's name substituted.
    pub fn messages(&self, callable: &Callable) -> Vec<String> {
        self.diagnostics
            .iter()
            .map(|d| d.render(&callable.name))
            .collect()
    }

    /// Send every diagnostic to `sink`, one report each, in order.
    pub fn report(&self, callable: &Callable, sink: &mut dyn DiagnosticSink) {
        for diagnostic in &self.diagnostics {
            sink.report_error(callable, diagnostic);
        }
    }

    /// View the outcome as a stillwater validation for combinator use.
    pub fn into_validation(self) -> Validation<(), NonEmptyVec<Diagnostic>> {
        match NonEmptyVec::from_vec(self.diagnostics) {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(()),
        }
    }
}

impl From<Diagnostic> for Outcome {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl Extend<Diagnostic> for Outcome {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.diagnostics.extend(iter);
    }
}

impl FromIterator<Outcome> for Outcome {
    fn from_iter<T: IntoIterator<Item = Outcome>>(iter: T) -> Self {
        iter.into_iter().fold(Outcome::valid(), Outcome::merge)
    }
}

/// Monotonic validity flag shared across a sequence of checks.
///
/// Starts valid; once invalidated it stays invalid. Invalidating again is a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsValid(bool);

impl Default for IsValid {
    fn default() -> Self {
        Self(true)
    }
}

impl IsValid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.0 = false;
    }

    pub fn is_valid(&self) -> bool {
        self.0
    }

    /// Invalidate when `outcome` carries any diagnostic.
    pub fn record(&mut self, outcome: &Outcome) {
        if !outcome.is_valid() {
            self.invalidate();
        }
    }
}
