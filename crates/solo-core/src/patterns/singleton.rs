//! Singleton pattern.
//!
//! A [`Singleton<T>`] owns at most one value of `T` for the lifetime of the
//! process. The value is built on first access and every later access returns
//! the same reference. Construction goes through `std::sync::OnceLock`, so
//! callers racing on first use from several threads still produce exactly one
//! value, and exactly one of them is told it did the constructing.
//!
//! The container is meant to live in a `static`; [`define_singleton!`]
//! declares one.
//!
//! [`define_singleton!`]: crate::define_singleton

use std::fmt;
use std::ops::Deref;
use std::sync::OnceLock;

/// Whether a particular access constructed the singleton value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitOutcome {
    /// This access ran the initialiser.
    Created,
    /// The value already existed; the initialiser did not run.
    AlreadyCreated,
}

impl InitOutcome {
    /// Return `true` for [`InitOutcome::Created`].
    pub fn is_created(&self) -> bool {
        matches!(self, InitOutcome::Created)
    }
}

/// A lazily-initialised, process-wide value.
///
/// # Example
/// ```
/// use solo_core::Singleton;
///
/// static COUNTER_NAMES: Singleton<Vec<&'static str>> = Singleton::new(|| vec!["a", "b"]);
///
/// assert!(!COUNTER_NAMES.is_initialized());
/// let first = COUNTER_NAMES.get();
/// let second = COUNTER_NAMES.get();
/// assert!(std::ptr::eq(first, second));
/// assert_eq!(first.len(), 2);
/// ```
pub struct Singleton<T> {
    cell: OnceLock<T>,
    init: fn() -> T,
}

impl<T> Singleton<T> {
    /// Create an empty container that will build its value with `init`.
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    /// Return the shared value, constructing it on the first call.
    pub fn get(&self) -> &T {
        self.get_with_outcome().0
    }

    /// Return the shared value together with whether this call built it.
    ///
    /// Across all threads, exactly one call per container ever observes
    /// [`InitOutcome::Created`].
    pub fn get_with_outcome(&self) -> (&T, InitOutcome) {
        let mut outcome = InitOutcome::AlreadyCreated;
        let value = self.cell.get_or_init(|| {
            outcome = InitOutcome::Created;
            tracing::debug!(
                singleton = std::any::type_name::<T>(),
                "constructing singleton instance"
            );
            (self.init)()
        });
        (value, outcome)
    }

    /// Return the value if it has been constructed, without constructing it.
    pub fn try_get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Return `true` once some call has constructed the value.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Deref for Singleton<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(v) => write!(f, "Singleton({:?})", v),
            None => write!(f, "Singleton(<uninit>)"),
        }
    }
}

/// Declare a `static` [`Singleton`] of type `$ty` built from `$init`.
///
/// The instance is lazily initialised on first access. An optional
/// visibility qualifier may precede the name.
///
/// # Example
/// ```
/// use solo_core::define_singleton;
///
/// struct Registry { data: Vec<String> }
/// define_singleton!(pub REGISTRY, Registry, Registry { data: Vec::new() });
///
/// assert!(REGISTRY.data.is_empty());
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($vis:vis $name:ident, $ty:ty, $init:expr) => {
        /// Lazily-initialised global singleton.
        $vis static $name: $crate::patterns::singleton::Singleton<$ty> =
            $crate::patterns::singleton::Singleton::new(|| $init);
    };
}
