//! # solo-core
//!
//! Core building blocks shared by the solo crates.
//!
//! This crate provides the error type, the once-initialised
//! [`Singleton`] container used to hold process-wide instances, and the
//! [`Handle`] wrapper used to pass such an instance explicitly through call
//! sites.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Copyable reference to a `'static` shared instance (`Handle<T>`).
pub mod handle;

/// Design patterns: singleton.
pub mod patterns;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use handle::Handle;
pub use patterns::singleton::{InitOutcome, Singleton};
