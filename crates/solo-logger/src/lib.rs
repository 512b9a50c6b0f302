//! # solo-logger
//!
//! A process-wide logger that keeps every message in an ordered, in-memory
//! buffer.
//!
//! All access goes through [`Logger::get_instance`], which builds the logger
//! on first use and hands back the same instance afterwards. Any two call
//! sites that ask for the logger therefore see each other's messages.
//!
//! ```
//! use solo_logger::Logger;
//!
//! let logger1 = Logger::get_instance();
//! logger1.log("doc: first");
//! let logger2 = Logger::get_instance();
//! logger2.log("doc: second");
//!
//! assert!(Logger::same_instance(logger1, logger2));
//! let mine: Vec<_> = logger1
//!     .messages()
//!     .into_iter()
//!     .filter(|m| m.starts_with("doc: "))
//!     .collect();
//! assert_eq!(mine, ["doc: first", "doc: second"]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The shared logger instance and its registry entry points.
pub mod logger;

/// Ordered, append-only message buffer.
pub mod message_log;

pub use logger::Logger;
pub use message_log::MessageLog;
pub use solo_core::{Handle, InitOutcome};
