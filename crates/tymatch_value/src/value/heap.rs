//! Shared heap storage for container and object values.
//!
//! `Heap<T>` wraps `Arc<T>`. Its constructors are `pub(super)`, so heap
//! values can only be built through `Value`'s factory methods, which is
//! where set deduplication and dict key collapsing happen.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted storage behind heap-backed [`Value`](super::Value)s.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Wrap an existing allocation, keeping its identity.
    #[inline]
    pub(super) fn shared(inner: Arc<T>) -> Self {
        Heap(inner)
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deref_reaches_contents() {
        let h = Heap::new(vec![1, 2, 3]);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn clones_share_the_allocation() {
        let h1 = Heap::new(String::from("shared"));
        let h2 = h1.clone();
        assert!(h1.ptr_eq(&h2));
    }

    #[test]
    fn equality_compares_contents() {
        let h1 = Heap::new(String::from("same"));
        let h2 = Heap::new(String::from("same"));
        assert_eq!(h1, h2);
        assert!(!h1.ptr_eq(&h2));
    }
}
