//! Assertion macros for validation outcomes.
//!
//! - [`crate::assert_valid!`] - Assert an outcome carries no diagnostic
//! - [`crate::assert_invalid!`] - Assert an outcome carries at least one
//! - [`crate::assert_diagnostic_count!`] - Assert an exact number of diagnostics,
//!   optionally of one kind
//!
//! # Example
//!
//! ```rust
//! use paramshape::{assert_invalid, assert_valid};
//! use paramshape::checks::arity;
//! use paramshape::testkit::{callable, param};
//!
//! assert_valid!(arity::zero_or_one_parameter(&callable("m", vec![])));
//! assert_invalid!(arity::exactly_one_parameter(&callable("m", vec![])));
//! # let _ = param("a", "int");
//! ```

/// Assert that an Outcome is valid.
///
/// On failure the panic message lists every diagnostic.
#[macro_export]
macro_rules! assert_valid {
    ($outcome:expr) => {
        match &$outcome {
            outcome if outcome.is_valid() => {}
            outcome => panic!(
                "Expected valid outcome, got {} diagnostic(s): {:#?}\n  at {}:{}:{}",
                outcome.len(),
                outcome.diagnostics(),
                file!(),
                line!(),
                column!()
            ),
        }
    };
    ($outcome:expr, $($msg:tt)+) => {
        match &$outcome {
            outcome if outcome.is_valid() => {}
            outcome => panic!(
                "{}: Expected valid outcome, got {} diagnostic(s): {:#?}\n  at {}:{}:{}",
                format!($($msg)+),
                outcome.len(),
                outcome.diagnostics(),
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

/// Assert that an Outcome is invalid.
#[macro_export]
macro_rules! assert_invalid {
    ($outcome:expr) => {
        if $outcome.is_valid() {
            panic!(
                "Expected invalid outcome, got valid\n  at {}:{}:{}",
                file!(),
                line!(),
                column!()
            );
        }
    };
    ($outcome:expr, $($msg:tt)+) => {
        if $outcome.is_valid() {
            panic!(
                "{}: Expected invalid outcome, got valid\n  at {}:{}:{}",
                format!($($msg)+),
                file!(),
                line!(),
                column!()
            );
        }
    };
}

/// Assert that an Outcome has exactly N diagnostics, optionally of one kind.
///
/// ```rust,ignore
/// assert_diagnostic_count!(outcome, 2);
/// assert_diagnostic_count!(outcome, DiagnosticKind::MissingRequired, 1);
/// ```
#[macro_export]
macro_rules! assert_diagnostic_count {
    ($outcome:expr, $expected:expr) => {
        let actual = $outcome.len();
        if actual != $expected {
            panic!(
                "Expected {} diagnostic(s), got {}: {:#?}\n  at {}:{}:{}",
                $expected,
                actual,
                $outcome.diagnostics(),
                file!(),
                line!(),
                column!()
            );
        }
    };
    ($outcome:expr, $kind:expr, $expected:expr) => {
        let actual = $outcome.count_of($kind);
        if actual != $expected {
            panic!(
                "Expected {} {:?} diagnostic(s), got {}: {:#?}\n  at {}:{}:{}",
                $expected,
                $kind,
                actual,
                $outcome.diagnostics(),
                file!(),
                line!(),
                column!()
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::{DiagnosticKind, Outcome};

    #[test]
    fn test_assert_valid_passes() {
        assert_valid!(Outcome::valid());
    }

    #[test]
    #[should_panic(expected = "Expected valid outcome")]
    fn test_assert_valid_panics() {
        assert_valid!(Outcome::failure(DiagnosticKind::ArityMismatch, "x"));
    }

    #[test]
    fn test_assert_invalid_passes() {
        assert_invalid!(Outcome::failure(DiagnosticKind::ArityMismatch, "x"));
    }

    #[test]
    #[should_panic(expected = "Expected invalid outcome")]
    fn test_assert_invalid_panics() {
        assert_invalid!(Outcome::valid(), "context {}", 1);
    }

    #[test]
    fn test_assert_diagnostic_count_by_kind() {
        let outcome = Outcome::failure(DiagnosticKind::MissingRequired, "x")
            .merge(Outcome::failure(DiagnosticKind::ArityMismatch, "y"));
        assert_diagnostic_count!(outcome, 2);
        assert_diagnostic_count!(outcome, DiagnosticKind::MissingRequired, 1);
    }
}
