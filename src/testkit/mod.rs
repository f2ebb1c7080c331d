//! Testing infrastructure for paramshape.
//!
//! - **Fixture builders**: [`param`], [`primitive`], [`annotated`],
//!   [`callable`], [`callable_of`] for signatures, [`android_oracle`] for a
//!   ready-made type hierarchy
//! - **Assertion macros**: [`assert_valid!`](crate::assert_valid),
//!   [`assert_invalid!`](crate::assert_invalid) and
//!   [`assert_diagnostic_count!`](crate::assert_diagnostic_count) for outcomes
//!
//! # Quick Start
//!
//! ```rust
//! use paramshape::assert_valid;
//! use paramshape::rules::{self, Validator};
//! use paramshape::testkit::{android_oracle, callable_of};
//!
//! let oracle = android_oracle();
//! let rule = rules::one_param().extends_type("android.view.View").optional();
//!
//! assert_valid!(rule.validate(&callable_of("onClick", &["android.widget.Button"]), &oracle));
//! ```

pub mod assertions;
pub mod helpers;

pub use helpers::{android_oracle, annotated, callable, callable_of, param, primitive};
