use super::descriptor::{ParameterDescriptor, RequirementSet};
use super::engine::{match_any_order, match_in_order, MatchFailure};
use super::Validator;
use crate::core::{Callable, TypeName, UNIVERSAL_TYPE};
use crate::diagnostics::{Diagnostic, DiagnosticKind, Outcome};
use crate::oracle::TypeOracle;

mod sealed {
    use super::RequirementSet;

    pub trait Sealed {
        fn requirements_mut(&mut self) -> &mut RequirementSet;
    }
}

/// A rule built from declared parameter slots.
pub trait SlotRule: sealed::Sealed + Validator {
    fn requirements(&self) -> &RequirementSet;
}

/// A slot rule that accepts any number of declared slots.
pub trait ChainableRule: SlotRule {}

fn declare<R: ChainableRule>(mut rule: R, descriptor: ParameterDescriptor) -> ChainableRequirement<R> {
    let slot = rule.requirements_mut().push(descriptor);
    ChainableRequirement {
        inner: ParameterRequirement { rule, slot },
    }
}

fn shape_outcome(failures: Vec<MatchFailure>, requirements: &RequirementSet, suffix: &str) -> Outcome {
    let template = format!(
        "%s can only have the following parameters: {}{}",
        requirements, suffix
    );
    failures
        .iter()
        .map(|failure| Diagnostic::new(failure.kind(), template.clone()))
        .map(Outcome::from)
        .collect()
}

/// Rejects any parameter at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParamRule;

impl Validator for NoParamRule {
    fn validate(&self, callable: &Callable, _oracle: &dyn TypeOracle) -> Outcome {
        if callable.parameters().is_empty() {
            Outcome::valid()
        } else {
            Outcome::failure(
                DiagnosticKind::ArityMismatch,
                "%s cannot have any parameters, no parameters expected",
            )
        }
    }
}

/// Entry point of a one-slot rule. Until its slot is declared it only
/// accepts an empty parameter list.
#[derive(Debug, Clone, Default)]
pub struct OneParamBuilder {
    requirements: RequirementSet,
}

impl OneParamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn declare(mut self, descriptor: ParameterDescriptor) -> ParameterRequirement<OneParamRule> {
        let slot = self.requirements.push(descriptor);
        ParameterRequirement {
            rule: OneParamRule {
                requirements: self.requirements,
            },
            slot,
        }
    }

    pub fn extends_type(self, name: impl Into<TypeName>) -> ParameterRequirement<OneParamRule> {
        self.declare(ParameterDescriptor::extending(name))
    }

    pub fn exact_type(self, name: impl Into<TypeName>) -> ParameterRequirement<OneParamRule> {
        self.declare(ParameterDescriptor::exact(name))
    }

    pub fn any_type(self) -> ParameterRequirement<OneParamRule> {
        self.extends_type(UNIVERSAL_TYPE)
    }
}

impl Validator for OneParamBuilder {
    fn validate(&self, callable: &Callable, oracle: &dyn TypeOracle) -> Outcome {
        let failures = match_in_order(&self.requirements, callable.parameters(), oracle);
        shape_outcome(failures, &self.requirements, "")
    }
}

/// A rule with exactly one declared slot, matched positionally.
#[derive(Debug, Clone)]
pub struct OneParamRule {
    requirements: RequirementSet,
}

impl sealed::Sealed for OneParamRule {
    fn requirements_mut(&mut self) -> &mut RequirementSet {
        &mut self.requirements
    }
}

impl SlotRule for OneParamRule {
    fn requirements(&self) -> &RequirementSet {
        &self.requirements
    }
}

impl Validator for OneParamRule {
    fn validate(&self, callable: &Callable, oracle: &dyn TypeOracle) -> Outcome {
        let failures = match_in_order(&self.requirements, callable.parameters(), oracle);
        shape_outcome(failures, &self.requirements, "")
    }
}

/// Slots matched positionally; required slots must precede optional ones.
#[derive(Debug, Clone, Default)]
pub struct InOrderRule {
    requirements: RequirementSet,
}

impl InOrderRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extends_type(self, name: impl Into<TypeName>) -> ChainableRequirement<Self> {
        declare(self, ParameterDescriptor::extending(name))
    }

    pub fn exact_type(self, name: impl Into<TypeName>) -> ChainableRequirement<Self> {
        declare(self, ParameterDescriptor::exact(name))
    }

    pub fn any_type(self) -> ChainableRequirement<Self> {
        self.extends_type(UNIVERSAL_TYPE)
    }
}

impl sealed::Sealed for InOrderRule {
    fn requirements_mut(&mut self) -> &mut RequirementSet {
        &mut self.requirements
    }
}

impl SlotRule for InOrderRule {
    fn requirements(&self) -> &RequirementSet {
        &self.requirements
    }
}

impl ChainableRule for InOrderRule {}

impl Validator for InOrderRule {
    fn validate(&self, callable: &Callable, oracle: &dyn TypeOracle) -> Outcome {
        let failures = match_in_order(&self.requirements, callable.parameters(), oracle);
        shape_outcome(failures, &self.requirements, " in the order above")
    }
}

/// Slots matched as a multiset, parameter order irrelevant.
#[derive(Debug, Clone, Default)]
pub struct AnyOrderRule {
    requirements: RequirementSet,
}

impl AnyOrderRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extends_type(self, name: impl Into<TypeName>) -> ChainableRequirement<Self> {
        declare(self, ParameterDescriptor::extending(name))
    }

    pub fn exact_type(self, name: impl Into<TypeName>) -> ChainableRequirement<Self> {
        declare(self, ParameterDescriptor::exact(name))
    }

    pub fn any_type(self) -> ChainableRequirement<Self> {
        self.extends_type(UNIVERSAL_TYPE)
    }
}

impl sealed::Sealed for AnyOrderRule {
    fn requirements_mut(&mut self) -> &mut RequirementSet {
        &mut self.requirements
    }
}

impl SlotRule for AnyOrderRule {
    fn requirements(&self) -> &RequirementSet {
        &self.requirements
    }
}

impl ChainableRule for AnyOrderRule {}

impl Validator for AnyOrderRule {
    fn validate(&self, callable: &Callable, oracle: &dyn TypeOracle) -> Outcome {
        let failures = match_any_order(&self.requirements, callable.parameters(), oracle);
        shape_outcome(failures, &self.requirements, " in any order")
    }
}

/// Handle on the most recently declared slot of a rule.
///
/// `optional()` and `required()` settle the slot's presence and hand the rule
/// back. The handle validates like its rule, leaving the slot required.
#[must_use]
#[derive(Debug, Clone)]
pub struct ParameterRequirement<R> {
    rule: R,
    slot: usize,
}

impl<R: SlotRule> ParameterRequirement<R> {
    pub fn optional(mut self) -> R {
        self.rule.requirements_mut().set_required(self.slot, false);
        self.rule
    }

    pub fn required(mut self) -> R {
        self.rule.requirements_mut().set_required(self.slot, true);
        self.rule
    }

    pub fn descriptor(&self) -> &ParameterDescriptor {
        &self.rule.requirements()[self.slot]
    }

    pub fn into_rule(self) -> R {
        self.rule
    }
}

impl<R: SlotRule> Validator for ParameterRequirement<R> {
    fn validate(&self, callable: &Callable, oracle: &dyn TypeOracle) -> Outcome {
        self.rule.validate(callable, oracle)
    }
}

/// Slot handle of a multi-slot rule: can also declare the next slot,
/// leaving the current one required.
#[must_use]
#[derive(Debug, Clone)]
pub struct ChainableRequirement<R> {
    inner: ParameterRequirement<R>,
}

impl<R: ChainableRule> ChainableRequirement<R> {
    pub fn optional(self) -> R {
        self.inner.optional()
    }

    pub fn required(self) -> R {
        self.inner.required()
    }

    pub fn descriptor(&self) -> &ParameterDescriptor {
        self.inner.descriptor()
    }

    pub fn into_rule(self) -> R {
        self.inner.into_rule()
    }

    pub fn extends_type(self, name: impl Into<TypeName>) -> ChainableRequirement<R> {
        declare(self.into_rule(), ParameterDescriptor::extending(name))
    }

    pub fn exact_type(self, name: impl Into<TypeName>) -> ChainableRequirement<R> {
        declare(self.into_rule(), ParameterDescriptor::exact(name))
    }

    pub fn any_type(self) -> ChainableRequirement<R> {
        self.extends_type(UNIVERSAL_TYPE)
    }
}

impl<R: ChainableRule> Validator for ChainableRequirement<R> {
    fn validate(&self, callable: &Callable, oracle: &dyn TypeOracle) -> Outcome {
        self.inner.validate(callable, oracle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Parameter;
    use crate::oracle::HierarchyOracle;

    #[test]
    fn test_optional_only_touches_last_slot() {
        let rule = InOrderRule::new()
            .extends_type("a.A")
            .extends_type("a.B")
            .optional();
        let slots: Vec<bool> = rule.requirements().iter().map(|d| d.required).collect();
        assert_eq!(slots, vec![true, false]);
    }

    #[test]
    fn test_required_restores_presence() {
        let rule = AnyOrderRule::new().exact_type("int").required();
        assert!(rule.requirements()[0].required);
        assert!(!rule.requirements()[0].is_extending());
    }

    #[test]
    fn test_any_type_extends_universal_type() {
        let handle = InOrderRule::new().any_type();
        assert_eq!(handle.descriptor().expected_type.as_str(), UNIVERSAL_TYPE);
        assert!(handle.descriptor().is_extending());
    }

    #[test]
    fn test_one_param_declares_single_slot() {
        let rule = OneParamBuilder::new().exact_type("android.os.Bundle").optional();
        assert_eq!(rule.requirements().len(), 1);
        assert!(!rule.requirements()[0].required);
    }

    #[test]
    fn test_shape_message_lists_slots() {
        let oracle = HierarchyOracle::default();
        let rule = InOrderRule::new()
            .exact_type("int")
            .exact_type("long")
            .optional();
        let callable = Callable::new("m", vec![Parameter::of_type("a", "long")]);
        let outcome = rule.validate(&callable, &oracle);
        assert_eq!(
            outcome.messages(&callable),
            vec!["m can only have the following parameters: [ int (required), long (optional) ] in the order above"]
        );
    }

    #[test]
    fn test_unused_one_param_builder_accepts_only_empty_list() {
        let oracle = HierarchyOracle::default();
        let builder = OneParamBuilder::new();
        assert!(builder.validate(&Callable::new("m", vec![]), &oracle).is_valid());
        assert!(!builder
            .validate(&Callable::new("m", vec![Parameter::of_type("a", "int")]), &oracle)
            .is_valid());
    }
}
