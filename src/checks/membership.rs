//! Allowed-set checks.
//!
//! The exhaustive checks scan every parameter and report once per offender.

use super::{arity, contains_type, format_types};
use crate::core::{Callable, Parameter};
use crate::diagnostics::{DiagnosticKind, Outcome};

fn flag_outsiders<F>(callable: &Callable, allowed: F, template: &str) -> Outcome
where
    F: Fn(&Parameter) -> bool,
{
    let mut outcome = Outcome::valid();
    for _ in callable.parameters().iter().filter(|p| !allowed(*p)) {
        outcome.invalidate(DiagnosticKind::DisallowedParameter, template);
    }
    outcome
}

/// Every parameter's type must be one of `types`.
pub fn only_types<S: AsRef<str>>(callable: &Callable, types: &[S]) -> Outcome {
    let template = format!("You can declare only parameters of type {}", format_types(types));
    flag_outsiders(
        callable,
        |p| contains_type(types, p.type_name().as_str()),
        &template,
    )
}

/// Every parameter's type must be one of `types`, or the parameter must
/// carry the `marker` annotation.
pub fn only_types_or_annotated<S: AsRef<str>>(
    callable: &Callable,
    types: &[S],
    marker: &str,
) -> Outcome {
    let template = format!(
        "You can declare only parameters of type {} or parameters annotated with @{}",
        format_types(types),
        marker
    );
    flag_outsiders(
        callable,
        |p| contains_type(types, p.type_name().as_str()) || p.has_annotation(marker),
        &template,
    )
}

/// Like [`only_types`], with the allowed set described in prose:
/// `%s can only have <description> parameters`.
pub fn only_types_described<S: AsRef<str>>(
    callable: &Callable,
    types: &[S],
    description: &str,
) -> Outcome {
    let template = format!("%s can only have {} parameters", description);
    flag_outsiders(
        callable,
        |p| contains_type(types, p.type_name().as_str()),
        &template,
    )
}

/// No parameter, or a single parameter whose type is one of `types`.
pub fn zero_or_one_specific_parameter<S: AsRef<str>>(callable: &Callable, types: &[S]) -> Outcome {
    let mut outcome = arity::zero_or_one_parameter(callable);
    if let [parameter] = callable.parameters() {
        if !contains_type(types, parameter.type_name().as_str()) {
            outcome.invalidate(
                DiagnosticKind::DisallowedParameter,
                format!(
                    "%s can only be used on a method with no parameter or a parameter of type {}, not {}",
                    format_types(types),
                    parameter.type_name()
                ),
            );
        }
    }
    outcome
}
