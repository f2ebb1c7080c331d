//! Declarative parameter-list rules.
//!
//! A rule is built by declaring expected slots one at a time. Each
//! declaration hands back a handle on that slot, which can mark it optional
//! and, for multi-slot rules, declare the next one:
//!
//! ```rust
//! use paramshape::core::{Callable, Parameter};
//! use paramshape::oracle::HierarchyOracle;
//! use paramshape::rules::{self, Validator};
//!
//! let oracle = HierarchyOracle::default()
//!     .declare("android.view.View", Vec::<&str>::new())
//!     .declare("android.widget.Button", ["android.view.View"]);
//!
//! let rule = rules::in_order()
//!     .extends_type("android.view.View")
//!     .optional()
//!     .exact_type("boolean")
//!     .optional();
//!
//! let callable = Callable::new(
//!     "onToggle",
//!     vec![
//!         Parameter::of_type("button", "android.widget.Button"),
//!         Parameter::of_type("checked", "boolean"),
//!     ],
//! );
//! assert!(rule.validate(&callable, &oracle).is_valid());
//! ```
//!
//! Rules are plain values: validation only reads the declared slots, so the
//! same rule (or a clone of it) can check any number of callables.

mod builder;
pub mod descriptor;
pub mod engine;

pub use builder::{
    AnyOrderRule, ChainableRequirement, ChainableRule, InOrderRule, NoParamRule, OneParamBuilder,
    OneParamRule, ParameterRequirement, SlotRule,
};
pub use descriptor::{MatchMode, ParameterDescriptor, RequirementSet};
pub use engine::MatchFailure;

use crate::core::Callable;
use crate::diagnostics::Outcome;
use crate::oracle::TypeOracle;

/// Validates one callable's parameter list.
pub trait Validator {
    fn validate(&self, callable: &Callable, oracle: &dyn TypeOracle) -> Outcome;
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, callable: &Callable, oracle: &dyn TypeOracle) -> Outcome {
        (**self).validate(callable, oracle)
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    fn validate(&self, callable: &Callable, oracle: &dyn TypeOracle) -> Outcome {
        (**self).validate(callable, oracle)
    }
}

/// Run several validators over one callable, keeping every diagnostic.
pub fn validate_all(
    validators: &[&dyn Validator],
    callable: &Callable,
    oracle: &dyn TypeOracle,
) -> Outcome {
    validators
        .iter()
        .map(|validator| validator.validate(callable, oracle))
        .collect()
}

/// A rule accepting only an empty parameter list.
pub fn no_param() -> NoParamRule {
    NoParamRule
}

/// A rule with at most one declared slot.
pub fn one_param() -> OneParamBuilder {
    OneParamBuilder::new()
}

/// A positional rule with any number of slots.
pub fn in_order() -> InOrderRule {
    InOrderRule::new()
}

/// An order-insensitive rule with any number of slots.
pub fn any_order() -> AnyOrderRule {
    AnyOrderRule::new()
}
