//! Owning iteration.

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use ferrovec_raw::RawStorage;

use crate::vector::Vector;

/// An iterator that moves elements out of a [`Vector`].
///
/// Owns the vector's block. Slots `[front, back)` are still live;
/// elements not yielded are dropped with the iterator.
pub struct IntoIter<T> {
    storage: RawStorage<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(vector: Vector<T>) -> Self {
        let (storage, len) = vector.into_raw_parts();
        Self {
            storage,
            front: 0,
            back: len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is live and `back <= capacity`.
        unsafe {
            let first = self.storage.address_at(self.front);
            slice::from_raw_parts(first, self.back - self.front)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: `front < back`, so the slot is live; advancing `front`
        // stops it from being read or dropped again.
        let value = unsafe { self.storage.address_at(self.front).read() };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: the slot was live and is now outside `[front, back)`.
        Some(unsafe { self.storage.address_at(self.back).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.back - self.front;
        // SAFETY: `[front, back)` is live and nothing else will drop it.
        unsafe {
            let start = self.storage.address_at(self.front);
            // Empty the range first so a panicking destructor cannot double drop.
            self.front = self.back;
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(start, remaining));
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}
