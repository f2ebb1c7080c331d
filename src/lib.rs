//! Method-signature shape validation.
//!
//! paramshape decides whether a callable's parameter list has the shape an
//! annotation expects: how many parameters, in which order, of which types,
//! and which of them may be left out. Two kinds of checks are offered:
//!
//! - [`rules`]: declaratively built slot rules, matched positionally
//!   ([`rules::in_order`], [`rules::one_param`]) or as a multiset
//!   ([`rules::any_order`]).
//! - [`checks`]: standalone predicates for arity bounds, singleton types,
//!   allowed-type sets and first-parameter kinds.
//!
//! Type compatibility is delegated to a [`TypeOracle`]; failures come back as
//! an [`Outcome`] that callers merge, report to a
//! [`DiagnosticSink`](diagnostics::DiagnosticSink) and fold into an
//! [`IsValid`] flag.

pub mod checks;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod errors;
pub mod observability;
pub mod oracle;
pub mod rules;
pub mod testkit;

// Re-export commonly used types
pub use crate::core::{
    Callable, Parameter, PrimitiveKind, SourceLocation, TypeEntity, TypeName, UNIVERSAL_TYPE,
};

pub use crate::diagnostics::{
    CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, IsValid, Outcome, TracingSink,
};

pub use crate::rules::{
    any_order, in_order, no_param, one_param, validate_all, AnyOrderRule, InOrderRule, MatchMode,
    NoParamRule, OneParamRule, ParameterDescriptor, RequirementSet, Validator,
};

pub use crate::checks::ShapeChecks;
pub use crate::config::{ParamShapeConfig, TypeCatalog};
pub use crate::errors::{ParamShapeError, Result};
pub use crate::oracle::{HierarchyOracle, TypeOracle};
