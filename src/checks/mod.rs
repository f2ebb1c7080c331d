//! Standalone shape checks.
//!
//! These predicates cover constraints the slot rules cannot express: arity
//! bounds, "at most one parameter of type T", membership in an allowed set
//! (optionally relaxed by a marker annotation) and positional kind tests.
//! Each takes the callable and returns an [`Outcome`](crate::diagnostics::Outcome);
//! none of them needs a type oracle, comparisons are by literal type name or
//! primitive kind.
//!
//! Some checks report once per callable, others once per offending
//! parameter; each function documents which.
//!
//! [`ShapeChecks`] binds the generic checks to the framework type names of a
//! [`TypeCatalog`](crate::config::TypeCatalog).

pub mod arity;
pub mod membership;
pub mod positional;
mod presets;
pub mod singleton;

pub use presets::ShapeChecks;

/// Render a type list the way diagnostics show it: `[a, b, c]`.
pub(crate) fn format_types<S: AsRef<str>>(types: &[S]) -> String {
    let names: Vec<&str> = types.iter().map(AsRef::as_ref).collect();
    format!("[{}]", names.join(", "))
}

pub(crate) fn contains_type<S: AsRef<str>>(types: &[S], name: &str) -> bool {
    types.iter().any(|t| t.as_ref() == name)
}
