//! # solo
//!
//! A process-wide logger that keeps its messages in one shared, ordered
//! buffer, built on a generic once-initialised singleton container.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than the individual `solo-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use solo::Logger;
//!
//! let logger1 = Logger::get_instance();
//! let logger2 = Logger::get_instance();
//! logger1.log("hello from one");
//!
//! assert!(Logger::same_instance(logger1, logger2));
//! assert_eq!(logger2.messages(), ["hello from one"]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, `Singleton<T>` container, and `Handle<T>`.
pub use solo_core as core;

/// The shared logger and its message buffer.
pub use solo_logger as logger;

pub use solo_core::{define_singleton, ensure, Error, Handle, InitOutcome, Result, Singleton};
pub use solo_logger::{Logger, MessageLog};
