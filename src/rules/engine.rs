//! Matching engines.
//!
//! Both engines borrow the rule's [`RequirementSet`] and never modify it, so
//! one rule can be validated against any number of callables.

use super::descriptor::{ParameterDescriptor, RequirementSet};
use crate::core::Parameter;
use crate::diagnostics::DiagnosticKind;
use crate::oracle::TypeOracle;
use tracing::debug;

/// Why an actual parameter list failed to match a requirement set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchFailure {
    /// More actual parameters than declared slots.
    TooManyParameters { expected: usize, actual: usize },
    /// The parameter at `position` does not satisfy the slot at that position.
    Mismatch { position: usize },
    /// No remaining slot accepts the parameter at `position`.
    Unrecognized { position: usize },
    /// The required slot declared at index `slot` has no parameter.
    MissingRequired { slot: usize },
}

impl MatchFailure {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            MatchFailure::TooManyParameters { .. } => DiagnosticKind::ArityMismatch,
            MatchFailure::Mismatch { .. } => DiagnosticKind::PositionalMismatch,
            MatchFailure::Unrecognized { .. } => DiagnosticKind::UnrecognizedParameter,
            MatchFailure::MissingRequired { .. } => DiagnosticKind::MissingRequired,
        }
    }
}

/// Positional matching.
///
/// Too many parameters fails at once. Otherwise slots are walked in order: a
/// type mismatch stops the walk, while a missing required slot is recorded
/// and the walk continues, so every missing required trailing slot yields
/// its own failure. Optional slots without a parameter are accepted.
pub fn match_in_order(
    expected: &RequirementSet,
    parameters: &[Parameter],
    oracle: &dyn TypeOracle,
) -> Vec<MatchFailure> {
    if parameters.len() > expected.len() {
        debug!(
            expected = expected.len(),
            actual = parameters.len(),
            "too many parameters"
        );
        return vec![MatchFailure::TooManyParameters {
            expected: expected.len(),
            actual: parameters.len(),
        }];
    }

    let mut failures = Vec::new();
    for (position, slot) in expected.iter().enumerate() {
        match parameters.get(position) {
            Some(parameter) => {
                if !slot.accepts(parameter, oracle) {
                    debug!(
                        position,
                        expected = %slot.expected_type,
                        actual = %parameter.type_name(),
                        "positional type mismatch"
                    );
                    failures.push(MatchFailure::Mismatch { position });
                    return failures;
                }
            }
            None if slot.required => {
                debug!(slot = position, expected = %slot.expected_type, "missing required parameter");
                failures.push(MatchFailure::MissingRequired { slot: position });
            }
            None => {}
        }
    }
    failures
}

/// Multiset matching, order irrelevant.
///
/// Each parameter consumes the earliest-declared remaining slot it satisfies
/// (first fit, not best fit). A parameter no remaining slot accepts fails at
/// once. Once every parameter is placed, the first required slot left over is
/// reported as missing.
pub fn match_any_order(
    expected: &RequirementSet,
    parameters: &[Parameter],
    oracle: &dyn TypeOracle,
) -> Vec<MatchFailure> {
    let mut remaining: Vec<(usize, &ParameterDescriptor)> = expected.iter().enumerate().collect();

    for (position, parameter) in parameters.iter().enumerate() {
        let found = remaining
            .iter()
            .position(|(_, slot)| slot.accepts(parameter, oracle));
        match found {
            Some(index) => {
                remaining.remove(index);
            }
            None => {
                debug!(
                    position,
                    actual = %parameter.type_name(),
                    "no remaining slot accepts parameter"
                );
                return vec![MatchFailure::Unrecognized { position }];
            }
        }
    }

    remaining
        .iter()
        .find(|(_, slot)| slot.required)
        .map(|(slot, descriptor)| {
            debug!(slot, expected = %descriptor.expected_type, "missing required parameter");
            vec![MatchFailure::MissingRequired { slot: *slot }]
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Parameter;
    use crate::oracle::HierarchyOracle;

    fn oracle() -> HierarchyOracle {
        HierarchyOracle::default()
            .declare("a.Base", Vec::<&str>::new())
            .declare("a.Derived", ["a.Base"])
            .declare_type("a.Other")
    }

    fn set(slots: Vec<ParameterDescriptor>) -> RequirementSet {
        slots.into_iter().collect()
    }

    fn params(types: &[&str]) -> Vec<Parameter> {
        types
            .iter()
            .enumerate()
            .map(|(i, t)| Parameter::of_type(format!("p{i}"), t))
            .collect()
    }

    #[test]
    fn test_in_order_too_many_stops_immediately() {
        let expected = set(vec![ParameterDescriptor::extending("a.Base")]);
        let failures = match_in_order(&expected, &params(&["a.Other", "a.Other"]), &oracle());
        assert_eq!(
            failures,
            vec![MatchFailure::TooManyParameters {
                expected: 1,
                actual: 2
            }]
        );
    }

    #[test]
    fn test_in_order_mismatch_stops_walk() {
        let expected = set(vec![
            ParameterDescriptor::exact("a.Base"),
            ParameterDescriptor::exact("a.Other"),
            ParameterDescriptor::exact("a.Other"),
        ]);
        let failures = match_in_order(&expected, &params(&["a.Derived"]), &oracle());
        assert_eq!(failures, vec![MatchFailure::Mismatch { position: 0 }]);
    }

    #[test]
    fn test_in_order_reports_every_missing_required_slot() {
        let expected = set(vec![
            ParameterDescriptor::extending("a.Base"),
            ParameterDescriptor::extending("a.Other"),
            ParameterDescriptor::extending("a.Other").optional(),
            ParameterDescriptor::extending("a.Base"),
        ]);
        let failures = match_in_order(&expected, &params(&["a.Derived"]), &oracle());
        assert_eq!(
            failures,
            vec![
                MatchFailure::MissingRequired { slot: 1 },
                MatchFailure::MissingRequired { slot: 3 },
            ]
        );
    }

    #[test]
    fn test_in_order_missing_then_nothing_else_to_compare() {
        let expected = set(vec![
            ParameterDescriptor::extending("a.Base"),
            ParameterDescriptor::extending("a.Other").optional(),
        ]);
        assert!(match_in_order(&expected, &params(&["a.Derived"]), &oracle()).is_empty());
    }

    #[test]
    fn test_any_order_first_fit_not_best_fit() {
        // a.Derived satisfies both slots; the subtype slot is declared first
        // and gets consumed, leaving the exact slot for the second parameter.
        let expected = set(vec![
            ParameterDescriptor::extending("a.Base"),
            ParameterDescriptor::exact("a.Derived"),
        ]);
        let ok = match_any_order(&expected, &params(&["a.Derived", "a.Derived"]), &oracle());
        assert!(ok.is_empty());

        let failures = match_any_order(&expected, &params(&["a.Derived", "a.Base"]), &oracle());
        assert_eq!(failures, vec![MatchFailure::Unrecognized { position: 1 }]);
    }

    #[test]
    fn test_any_order_reports_first_missing_required_once() {
        let expected = set(vec![
            ParameterDescriptor::exact("a.Base"),
            ParameterDescriptor::exact("a.Other"),
            ParameterDescriptor::exact("a.Derived"),
        ]);
        let failures = match_any_order(&expected, &params(&["a.Base"]), &oracle());
        assert_eq!(failures, vec![MatchFailure::MissingRequired { slot: 1 }]);
    }

    #[test]
    fn test_any_order_leaves_set_untouched() {
        let expected = set(vec![ParameterDescriptor::exact("a.Base")]);
        let before = expected.clone();
        match_any_order(&expected, &params(&["a.Base"]), &oracle());
        assert_eq!(expected, before);
    }
}
