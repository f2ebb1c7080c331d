//! Parameter count bounds. Each check reports at most once per callable.

use crate::core::Callable;
use crate::diagnostics::{DiagnosticKind, Outcome};

fn count_outside(callable: &Callable, allowed: bool, description: &str) -> Outcome {
    if allowed {
        Outcome::valid()
    } else {
        Outcome::failure(
            DiagnosticKind::ArityMismatch,
            format!(
                "%s can only be used on a method with {}, instead of {}",
                description,
                callable.arity()
            ),
        )
    }
}

pub fn zero_parameters(callable: &Callable) -> Outcome {
    count_outside(callable, callable.arity() == 0, "zero parameter")
}

pub fn zero_or_one_parameter(callable: &Callable) -> Outcome {
    count_outside(callable, callable.arity() <= 1, "zero or one parameter")
}

pub fn exactly_one_parameter(callable: &Callable) -> Outcome {
    count_outside(callable, callable.arity() == 1, "exactly one parameter")
}

/// Between `min` and `max` parameters, both inclusive.
///
/// An empty range (`min > max`) rejects every callable.
pub fn parameter_count_between(callable: &Callable, min: usize, max: usize) -> Outcome {
    let arity = callable.arity();
    let description = if min == max {
        format!("{} parameter", min)
    } else if max.checked_sub(min) == Some(1) {
        format!("{} or {} parameter", min, max)
    } else {
        format!("{} to {} parameters", min, max)
    };
    count_outside(callable, (min..=max).contains(&arity), &description)
}
