//! Shared handle for heap-allocated value payloads.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Reference-counted payload of a [`Value`](super::Value).
///
/// The constructor is private to the value module: heap values are built
/// through the factory methods on `Value`. Cloning shares the allocation;
/// [`Heap::ptr_eq`] is the identity test used by `==` on arrays and
/// functions.
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        Rc::as_ptr(&self.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
