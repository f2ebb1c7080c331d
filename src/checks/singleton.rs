//! "At most one parameter of type T" checks.
//!
//! The first qualifying parameter is accepted; every later one is reported,
//! one diagnostic per extra occurrence.

use super::contains_type;
use crate::core::{Callable, Parameter, PrimitiveKind};
use crate::diagnostics::{DiagnosticKind, Outcome};

fn flag_repeats<P, M>(callable: &Callable, qualifies: P, message: M) -> Outcome
where
    P: Fn(&Parameter) -> bool,
    M: Fn(&Parameter) -> String,
{
    let mut outcome = Outcome::valid();
    let mut seen = false;
    for parameter in callable.parameters().iter().filter(|p| qualifies(*p)) {
        if seen {
            outcome.invalidate(DiagnosticKind::DuplicateSingleton, message(parameter));
        }
        seen = true;
    }
    outcome
}

/// At most one parameter whose type is any of `types`; the set counts as one.
pub fn at_most_one_of<S: AsRef<str>>(callable: &Callable, types: &[S]) -> Outcome {
    flag_repeats(
        callable,
        |p| contains_type(types, p.type_name().as_str()),
        |p| format!("%s can't have more than one parameter of type {}", p.type_name()),
    )
}

/// At most one parameter of exactly `type_name`.
pub fn zero_or_one_of_type(callable: &Callable, type_name: &str) -> Outcome {
    flag_repeats(
        callable,
        |p| p.type_name().is(type_name),
        |_| format!("You can declare only one parameter of type {}", type_name),
    )
}

/// At most one parameter that is either the primitive `kind` or its boxed
/// counterpart `boxed_name`.
pub fn zero_or_one_of_primitive(callable: &Callable, kind: PrimitiveKind, boxed_name: &str) -> Outcome {
    flag_repeats(
        callable,
        |p| p.primitive_kind() == Some(kind) || p.type_name().is(boxed_name),
        |_| format!("You can declare only one parameter of type {} or {}", kind, boxed_name),
    )
}
