//! Rollback guard for bulk construction.
//!
//! A [`PartialFill`] writes values into consecutive uninitialised slots
//! and remembers how many it has written. If it is dropped before
//! [`commit`](PartialFill::commit), because an element constructor
//! panicked or returned `Err`, it destroys exactly those values. The
//! slots it did not reach were never initialised and are left alone.

use std::marker::PhantomData;
use std::mem;
use std::ptr;

pub(crate) struct PartialFill<T> {
    start: *mut T,
    filled: usize,
    _owns: PhantomData<T>,
}

impl<T> PartialFill<T> {
    /// Begin filling at `start`.
    ///
    /// # Safety
    ///
    /// Every slot the guard will write (`start` up to the number of
    /// [`push`](Self::push) calls) must be uninitialised and lie inside
    /// a block that outlives the guard.
    pub(crate) unsafe fn new(start: *mut T) -> Self {
        Self {
            start,
            filled: 0,
            _owns: PhantomData,
        }
    }

    /// Write `value` into the next slot.
    ///
    /// # Safety
    ///
    /// The next slot must be within the region promised to [`new`](Self::new).
    pub(crate) unsafe fn push(&mut self, value: T) {
        // SAFETY: upheld by the caller.
        unsafe { self.start.add(self.filled).write(value) };
        self.filled += 1;
    }

    /// Keep the written values and return how many there are.
    pub(crate) fn commit(self) -> usize {
        let filled = self.filled;
        mem::forget(self);
        filled
    }
}

impl<T> Drop for PartialFill<T> {
    fn drop(&mut self) {
        // SAFETY: exactly `filled` slots from `start` were initialised by `push`.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.filled)) }
    }
}
