//! Type resolution and subtype testing.
//!
//! Rules never decide type compatibility themselves; they ask a
//! [`TypeOracle`]. An annotation processor backs the trait with its compiler's
//! type utilities, while [`HierarchyOracle`] answers from an in-memory table
//! of declared supertypes (used by tests, benches and config-driven setups).

mod hierarchy;

pub use hierarchy::HierarchyOracle;

use crate::core::{Parameter, TypeEntity};
use tracing::debug;

/// External type-resolution and subtype-testing service.
pub trait TypeOracle {
    /// Resolve a qualified type name, `None` when the name is unknown.
    fn resolve(&self, qualified_name: &str) -> Option<TypeEntity>;

    /// Whether `actual` is `expected` or one of its subtypes.
    fn is_subtype(&self, actual: &TypeEntity, expected: &TypeEntity) -> bool;

    /// Subtype test against a textual expected name.
    ///
    /// An expected name that does not resolve never matches; that case is
    /// logged and otherwise swallowed.
    fn extends(&self, actual: &TypeEntity, expected: &str) -> bool {
        match self.resolve(expected) {
            Some(expected_type) => self.is_subtype(actual, &expected_type),
            None => {
                debug!(
                    expected,
                    actual = %actual.name,
                    "expected type does not resolve, treating as no match"
                );
                false
            }
        }
    }
}

impl<T: TypeOracle + ?Sized> TypeOracle for &T {
    fn resolve(&self, qualified_name: &str) -> Option<TypeEntity> {
        (**self).resolve(qualified_name)
    }

    fn is_subtype(&self, actual: &TypeEntity, expected: &TypeEntity) -> bool {
        (**self).is_subtype(actual, expected)
    }
}

/// Exact match: the parameter's type name equals `expected` literally.
pub fn is_exact_type(parameter: &Parameter, expected: &str) -> bool {
    parameter.type_name().is(expected)
}

/// Subtype-inclusive match of a parameter against `expected`, per `oracle`.
pub fn extends_type(oracle: &dyn TypeOracle, parameter: &Parameter, expected: &str) -> bool {
    oracle.extends(&parameter.ty, expected)
}
