//! First-parameter checks.

use super::arity;
use crate::core::{Callable, PrimitiveKind};
use crate::diagnostics::{DiagnosticKind, Outcome};

/// The first parameter, if any, is the primitive `kind` or `boxed_name`.
///
/// The primitive classification is tried first, the textual type name is the
/// fallback. An empty parameter list passes; pair with an arity check.
pub fn first_parameter_is_primitive(
    callable: &Callable,
    kind: PrimitiveKind,
    boxed_name: &str,
) -> Outcome {
    match callable.first_parameter() {
        Some(first) if first.primitive_kind() != Some(kind) && !first.type_name().is(boxed_name) => {
            Outcome::failure(
                DiagnosticKind::PositionalMismatch,
                format!("the first parameter should be a {}", kind.keyword()),
            )
        }
        _ => Outcome::valid(),
    }
}

/// One or two parameters, the first being `kind` or `boxed_name`.
///
/// Reports the arity problem alone when the count is off.
pub fn one_or_two_with_first_primitive(
    callable: &Callable,
    kind: PrimitiveKind,
    boxed_name: &str,
) -> Outcome {
    let outcome = arity::parameter_count_between(callable, 1, 2);
    if outcome.is_valid() {
        first_parameter_is_primitive(callable, kind, boxed_name)
    } else {
        outcome
    }
}

/// At least one parameter, the first being exactly `type_name`.
pub fn first_parameter_is_type(callable: &Callable, type_name: &str) -> Outcome {
    match callable.first_parameter() {
        None => Outcome::failure(
            DiagnosticKind::ArityMismatch,
            format!("There should be at least 1 parameter: a {}", type_name),
        ),
        Some(first) if !first.type_name().is(type_name) => Outcome::failure(
            DiagnosticKind::PositionalMismatch,
            format!(
                "the first parameter must be a {}, not a {}",
                type_name,
                first.type_name()
            ),
        ),
        Some(_) => Outcome::valid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Parameter;

    const BOXED: &str = "java.lang.Boolean";
    const DB: &str = "android.database.sqlite.SQLiteDatabase";

    fn callable(types: &[&str]) -> Callable {
        Callable::new(
            "onChecked",
            types
                .iter()
                .enumerate()
                .map(|(i, t)| Parameter::of_type(format!("p{i}"), t))
                .collect(),
        )
    }

    #[test]
    fn test_primitive_or_boxed_first_parameter() {
        let kind = PrimitiveKind::Boolean;
        assert!(one_or_two_with_first_primitive(&callable(&["boolean"]), kind, BOXED).is_valid());
        assert!(one_or_two_with_first_primitive(
            &callable(&[BOXED, "android.widget.CompoundButton"]),
            kind,
            BOXED
        )
        .is_valid());

        let outcome = one_or_two_with_first_primitive(&callable(&["int"]), kind, BOXED);
        assert_eq!(outcome.count_of(DiagnosticKind::PositionalMismatch), 1);
        assert_eq!(
            outcome.diagnostics()[0].template,
            "the first parameter should be a boolean"
        );
    }

    #[test]
    fn test_arity_reported_without_kind_check() {
        let outcome = one_or_two_with_first_primitive(
            &callable(&["int", "int", "int"]),
            PrimitiveKind::Boolean,
            BOXED,
        );
        assert_eq!(outcome.len(), 1);
        assert_eq!(outcome.count_of(DiagnosticKind::ArityMismatch), 1);
        assert!(!one_or_two_with_first_primitive(&callable(&[]), PrimitiveKind::Boolean, BOXED)
            .is_valid());
    }

    #[test]
    fn test_empty_list_passes_kind_check() {
        assert!(first_parameter_is_primitive(&callable(&[]), PrimitiveKind::Boolean, BOXED)
            .is_valid());
    }

    #[test]
    fn test_first_parameter_is_type() {
        assert!(first_parameter_is_type(&callable(&[DB, "int"]), DB).is_valid());
        assert_eq!(
            first_parameter_is_type(&callable(&[]), DB).diagnostics()[0].template,
            "There should be at least 1 parameter: a android.database.sqlite.SQLiteDatabase"
        );
        assert_eq!(
            first_parameter_is_type(&callable(&["int", DB]), DB).diagnostics()[0].template,
            "the first parameter must be a android.database.sqlite.SQLiteDatabase, not a int"
        );
    }
}
