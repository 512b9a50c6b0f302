//! The shared logger.
//!
//! [`Logger`] holds the process-wide [`MessageLog`]. It cannot be built
//! directly: [`Logger::get_instance`] constructs it on the first call and
//! returns the same `&'static Logger` on every later call, so a message
//! logged through one reference is visible through all of them.
//!
//! Thread safety: first-use construction is guarded by `OnceLock` (via
//! [`Singleton`](solo_core::Singleton)) and the buffer sits behind a `Mutex`,
//! so the logger may be shared freely between threads. Every append is
//! atomic with respect to other appends and reads.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use solo_core::{define_singleton, errors::Result, Handle, InitOutcome};

use crate::message_log::MessageLog;

/// The process-wide logger.
pub struct Logger {
    messages: Mutex<MessageLog>,
}

define_singleton!(INSTANCE, Logger, Logger::new());

impl Logger {
    fn new() -> Self {
        Self {
            messages: Mutex::new(MessageLog::new()),
        }
    }

    // ── Registry ─────────────────────────────────────────────────────────

    /// Return the shared logger, constructing it on the first call.
    ///
    /// Later calls return the same reference and leave the stored messages
    /// untouched.
    pub fn get_instance() -> &'static Logger {
        INSTANCE.get()
    }

    /// Like [`get_instance`](Self::get_instance), also reporting whether this
    /// call constructed the logger.
    ///
    /// Exactly one call per process observes [`InitOutcome::Created`], even
    /// when several threads race on first use.
    pub fn get_instance_with_outcome() -> (&'static Logger, InitOutcome) {
        INSTANCE.get_with_outcome()
    }

    /// Return `true` once the shared logger has been constructed.
    pub fn is_initialized() -> bool {
        INSTANCE.is_initialized()
    }

    /// Return `true` if `a` and `b` are the same logger.
    pub fn same_instance(a: &Logger, b: &Logger) -> bool {
        std::ptr::eq(a, b)
    }

    /// A copyable handle for passing this logger to code that should not
    /// reach for the global itself.
    pub fn handle(&'static self) -> Handle<Logger> {
        Handle::new(self)
    }

    // ── Messages ─────────────────────────────────────────────────────────

    /// Append `message` to the shared buffer.
    ///
    /// Empty messages are stored as-is.
    pub fn log(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::trace!(len = message.len(), "appending message");
        self.lock().push(message);
    }

    /// A snapshot of the stored messages, in the order they were logged.
    pub fn messages(&self) -> Vec<String> {
        self.lock().as_slice().to_vec()
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no messages are stored.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove and return every stored message, in logged order.
    ///
    /// This is the only operation that shrinks the buffer.
    pub fn drain(&self) -> Vec<String> {
        let drained = self.lock().take();
        tracing::trace!(count = drained.len(), "drained messages");
        drained
    }

    // ── Output ───────────────────────────────────────────────────────────

    /// Write one line per stored message to `writer`, in logged order.
    ///
    /// The buffer is snapshotted first, so the lock is not held while
    /// writing.
    pub fn write_messages<W: Write>(&self, writer: W) -> Result<()> {
        let snapshot = self.lock().clone();
        snapshot.write_to(writer)?;
        Ok(())
    }

    /// Print one line per stored message to standard output.
    pub fn print_messages(&self) -> Result<()> {
        self.write_messages(io::stdout().lock())
    }

    fn lock(&self) -> MutexGuard<'_, MessageLog> {
        // A panic elsewhere cannot leave a push half-done, so the data is
        // still consistent after poisoning.
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("messages", &self.lock().len())
            .finish()
    }
}
