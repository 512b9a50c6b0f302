//! `Handle<T>`: a copyable reference to a process-wide shared instance.
//!
//! Code that needs the shared instance can either reach for the global
//! accessor or accept a `Handle<T>` from its caller. The second form keeps the
//! dependency visible in function signatures and lets tests pass in a
//! different instance.
//!
//! Two handles are equal when they point at the same instance. Equality is by
//! address, not by value.

use std::fmt;
use std::ops::Deref;

/// A copyable, non-null reference to a `'static` instance of `T`.
pub struct Handle<T: 'static> {
    inner: &'static T,
}

impl<T: 'static> Handle<T> {
    /// Wrap a `'static` reference.
    pub fn new(inner: &'static T) -> Self {
        Self { inner }
    }

    /// Borrow the referenced instance.
    pub fn get(&self) -> &'static T {
        self.inner
    }

    /// Return `true` if both handles refer to the same instance.
    pub fn same_instance(a: &Self, b: &Self) -> bool {
        std::ptr::eq(a.inner, b.inner)
    }

    /// Return `true` if this handle refers to `other`.
    pub fn points_to(&self, other: &T) -> bool {
        std::ptr::eq(self.inner, other)
    }
}

impl<T: 'static> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Handle<T> {}

impl<T: 'static> Deref for Handle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.inner
    }
}

impl<T: 'static> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::same_instance(self, other)
    }
}

impl<T: 'static> Eq for Handle<T> {}

impl<T: fmt::Debug + 'static> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:p}: {:?})", self.inner, self.inner)
    }
}
