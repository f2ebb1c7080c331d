//! Logging infrastructure.
//!
//! paramshape emits `tracing` events while matching: a `debug` event for
//! every failed match and for expected type names the oracle cannot resolve,
//! and `trace` events for individual subtype tests. [`TracingSink`] reports
//! diagnostics as `error` events. Library users normally install their own
//! subscriber; tools and tests can call [`init_tracing`].
//!
//! ```ignore
//! use paramshape::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing("paramshape=info");
//!     // ... run validations
//! }
//! ```
//!
//! [`TracingSink`]: crate::diagnostics::TracingSink

pub mod tracing;

pub use self::tracing::{env_filter, init_tracing, LOG_ENV_VAR};
