//! The growable array.
//!
//! A [`Vector`] owns a [`RawStorage`] block and a count of live elements
//! at its front. Slots `[0, len)` hold constructed values, slots
//! `[len, capacity)` are uninitialised, and `len <= capacity` holds
//! between every two calls, including after a panic.
//!
//! # Failure model
//!
//! Element constructors (`Default`, `Clone`, caller closures) may panic,
//! and the `try_` constructors may return `Err`. Unless noted otherwise an
//! operation that fails this way leaves the vector exactly as it was:
//! values built during the call are destroyed and any block acquired
//! during the call is released. The exception is [`Vector::clone_from`]
//! when the source fits the current capacity; see its docs.
//!
//! Moving an element in Rust is a bitwise copy that cannot fail, so
//! migrating elements into a larger block always relocates them and
//! never needs a clone fallback.

use std::convert::Infallible;
use std::mem;
use std::ptr;
use std::slice;

use ferrovec_raw::{RawStorage, StorageError};

use crate::guard::PartialFill;

/// A contiguous growable array that manages its own storage.
pub struct Vector<T> {
    storage: RawStorage<T>,
    /// Number of live elements at the front of `storage`.
    len: usize,
}

impl<T> Vector<T> {
    /// Capacity of the first block acquired by growth.
    pub const MIN_NON_ZERO_CAPACITY: usize = 1;

    /// Capacity multiplier applied when a full vector grows.
    pub const GROWTH_FACTOR: usize = 2;

    /// An empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::new(),
            len: 0,
        }
    }

    /// An empty vector with capacity for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: RawStorage::with_capacity(capacity),
            len: 0,
        }
    }

    /// Fallible [`with_capacity`](Self::with_capacity).
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] from acquiring the block.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        Ok(Self {
            storage: RawStorage::try_with_capacity(capacity)?,
            len: 0,
        })
    }

    /// `len` default-constructed elements in a block of exactly `len` slots.
    ///
    /// If a `T::default()` call panics, the elements already built are
    /// dropped and the block is released before the panic continues.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// `len` elements where element `i` is `f(i)`.
    pub fn from_fn<F>(len: usize, mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        match Self::try_from_fn(len, |i| Ok::<T, Infallible>(f(i))) {
            Ok(vector) => vector,
            Err(never) => match never {},
        }
    }

    /// `len` elements where element `i` is `f(i)`, stopping at the first `Err`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`, after dropping every
    /// element built so far and releasing the block.
    pub fn try_from_fn<E, F>(len: usize, mut f: F) -> Result<Self, E>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let storage = RawStorage::with_capacity(len);
        // SAFETY: the block is fresh and has `len` slots; the loop writes at most `len`.
        let mut fill = unsafe { PartialFill::new(storage.address_at(0)) };
        for i in 0..len {
            let value = f(i)?;
            // SAFETY: `i < len`.
            unsafe { fill.push(value) };
        }
        let len = fill.commit();
        Ok(Self { storage, len })
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the current block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// The live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialised and the base is aligned and non-null.
        unsafe { slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }

    /// The live elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` gives unique access.
        unsafe { slice::from_raw_parts_mut(self.storage.as_mut_ptr(), self.len) }
    }

    /// Base address of the block.
    ///
    /// Invalidated by any call that reallocates.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Mutable base address of the block.
    ///
    /// Invalidated by any call that reallocates.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    /// Move the contents out in O(1), leaving `self` empty and reusable.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Drop the current contents and adopt `source`'s block in O(1).
    ///
    /// `source` is left empty and reusable.
    pub fn assign_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    /// Exchange contents with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Make the capacity at least `new_capacity`.
    ///
    /// Unlike `Vec::reserve` the argument is the total capacity, not an
    /// increment. Does nothing when the current capacity suffices;
    /// otherwise acquires a block of exactly `new_capacity` slots and
    /// relocates the live elements into it.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow.
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            err.raise();
        }
    }

    /// Fallible [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] from acquiring the new block. The
    /// vector is untouched in that case.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), StorageError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let fresh = RawStorage::try_with_capacity(new_capacity)?;
        self.adopt(fresh);
        Ok(())
    }

    /// Shrink the block to exactly `len` slots.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            let fresh = RawStorage::with_capacity(self.len);
            self.adopt(fresh);
        }
    }

    /// Resize to `new_len`, default-constructing any new elements.
    ///
    /// Shrinking drops the trailing elements. Growing reserves exactly
    /// `new_len` slots first; if a `T::default()` call then panics, the
    /// new elements built so far are dropped and `len` is unchanged.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resize to `new_len`, filling growth with values from `f`.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        match self.try_resize_with(new_len, || Ok::<T, Infallible>(f())) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Resize to `new_len`, filling growth with values from a fallible `f`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`. The elements built for
    /// this call are dropped and `len` is unchanged; capacity acquired by
    /// the preceding reserve is kept.
    pub fn try_resize_with<E, F>(&mut self, new_len: usize, mut f: F) -> Result<(), E>
    where
        F: FnMut() -> Result<T, E>,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.reserve(new_len);
        // SAFETY: `[len, new_len)` is uninitialised and inside the block.
        let mut fill = unsafe { PartialFill::new(self.storage.address_at(self.len)) };
        for _ in self.len..new_len {
            let value = f()?;
            // SAFETY: at most `new_len - len` slots are written.
            unsafe { fill.push(value) };
        }
        self.len += fill.commit();
        Ok(())
    }

    /// Drop every element past `len`. No effect if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        // SAFETY: `len < self.len <= capacity`.
        let first = unsafe { self.storage.address_at(len) };
        let tail = ptr::slice_from_raw_parts_mut(first, self.len - len);
        // Lower `len` first so a panicking destructor cannot cause a double drop.
        self.len = len;
        // SAFETY: the tail was live and is no longer counted.
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drop every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Append `value` and return a reference to it.
    ///
    /// A full vector grows to `max(1, 2 * capacity)`. Amortised O(1).
    pub fn push(&mut self, value: T) -> &mut T {
        self.emplace_back_with(|| value)
    }

    /// Append the value returned by `make` and return a reference to it.
    ///
    /// When the vector is full the new block is acquired first and the
    /// value is built straight into its final slot there, before any
    /// existing element moves. If `make` panics the new block is released
    /// and the vector is untouched.
    pub fn emplace_back_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.len == self.capacity() {
            let fresh: RawStorage<T> = RawStorage::with_capacity(self.grown_capacity());
            // SAFETY: the grown capacity exceeds `len`.
            unsafe { fresh.address_at(self.len).write(make()) };
            self.adopt(fresh);
        } else {
            // SAFETY: `len < capacity`, so the slot is free and in bounds.
            unsafe { self.storage.address_at(self.len).write(make()) };
        }
        self.len += 1;
        // SAFETY: the slot was just initialised.
        unsafe { &mut *self.storage.address_at(self.len - 1) }
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot was live and is no longer counted.
        Some(unsafe { self.storage.address_at(self.len).read() })
    }

    /// Insert `value` at `index`, shifting later elements back by one.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.emplace_with(index, || value)
    }

    /// Insert the value returned by `make` at `index`.
    ///
    /// `make` runs before any element is shifted or relocated, so a panic
    /// in it leaves the vector untouched. With spare capacity the tail is
    /// shifted in place; otherwise a block of `max(1, 2 * capacity)` slots
    /// is acquired, the value is built at its final offset, and the
    /// prefix and suffix are relocated around it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn emplace_with<F>(&mut self, index: usize, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        assert!(index <= len, "insertion index (is {index}) should be <= len (is {len})");

        if len < self.capacity() {
            let value = make();
            // SAFETY: `index <= len < capacity`, so `[index, len]` is in bounds
            // and slot `len` is free for the shifted tail.
            unsafe {
                let slot = self.storage.address_at(index);
                ptr::copy(slot, slot.add(1), len - index);
                slot.write(value);
            }
        } else {
            let mut fresh: RawStorage<T> = RawStorage::with_capacity(self.grown_capacity());
            // SAFETY: the fresh block has more than `len` slots; source and
            // destination blocks are distinct.
            unsafe {
                fresh.address_at(index).write(make());
                let src = self.storage.as_ptr();
                ptr::copy_nonoverlapping(src, fresh.address_at(0), index);
                ptr::copy_nonoverlapping(src.add(index), fresh.address_at(index + 1), len - index);
            }
            // The old block's slots were all relocated; releasing it drops nothing.
            self.storage.swap(&mut fresh);
        }

        self.len = len + 1;
        // SAFETY: the slot was just initialised.
        unsafe { &mut *self.storage.address_at(index) }
    }

    /// Remove and return the element at `index`, shifting later elements
    /// forward. Afterwards `index` addresses the element that followed
    /// the removed one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(index < len, "removal index (is {index}) should be < len (is {len})");
        // SAFETY: `index < len`, so the element is live and `[index + 1, len)`
        // is in bounds.
        unsafe {
            let slot = self.storage.address_at(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Append clones of every element of `other`.
    ///
    /// If a clone panics, the clones made by this call are dropped and
    /// `len` is unchanged.
    pub fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        self.reserve_additional(other.len());
        // SAFETY: `[len, len + other.len())` is uninitialised and inside the block.
        let mut fill = unsafe { PartialFill::new(self.storage.address_at(self.len)) };
        for item in other {
            let value = item.clone();
            // SAFETY: at most `other.len()` slots are written.
            unsafe { fill.push(value) };
        }
        self.len += fill.commit();
    }

    /// Iterator over references to the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterator over mutable references to the live elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Hand the block and length over to an owning iterator.
    pub(crate) fn into_raw_parts(mut self) -> (RawStorage<T>, usize) {
        let len = mem::replace(&mut self.len, 0);
        (self.storage.take(), len)
    }

    /// Make room for `additional` more elements, growing geometrically.
    pub(crate) fn reserve_additional(&mut self, additional: usize) {
        let required = match self.len.checked_add(additional) {
            Some(required) => required,
            None => StorageError::CapacityOverflow {
                requested: usize::MAX,
            }
            .raise(),
        };
        if required > self.capacity() {
            self.reserve(required.max(self.grown_capacity()));
        }
    }

    fn grown_capacity(&self) -> usize {
        match self.capacity().checked_mul(Self::GROWTH_FACTOR) {
            Some(grown) => grown.max(Self::MIN_NON_ZERO_CAPACITY),
            None => StorageError::CapacityOverflow {
                requested: self.capacity(),
            }
            .raise(),
        }
    }

    /// Relocate the live elements into `fresh` and release the old block.
    fn adopt(&mut self, mut fresh: RawStorage<T>) {
        debug_assert!(fresh.capacity() >= self.len);
        // SAFETY: `[0, len)` is live in the old block, `fresh` has room for
        // it, and the two blocks are distinct.
        unsafe { ptr::copy_nonoverlapping(self.storage.as_ptr(), fresh.as_mut_ptr(), self.len) };
        self.storage.swap(&mut fresh);
        // `fresh` now holds the old block; its slots were moved out, and
        // releasing it runs no destructor.
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is live; the block is released afterwards by `storage`.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Copy into a block of exactly `len` slots.
    ///
    /// If a clone panics the copies made so far are dropped and the block
    /// is released.
    fn clone(&self) -> Self {
        let source = self.as_slice();
        Self::from_fn(source.len(), |i| source[i].clone())
    }

    /// Make `self` a copy of `source`, reusing the block when it fits.
    ///
    /// When `source` is longer than the current capacity a full copy is
    /// built first and swapped in, so a panicking clone leaves `self`
    /// untouched. Otherwise the shared prefix is overwritten with
    /// `clone_from`, then either the excess elements are dropped or the
    /// remaining elements are cloned into free slots. A panic in that
    /// branch leaves `self` valid, with the already overwritten prefix
    /// kept and the partially cloned tail dropped, but not identical to
    /// its prior state.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity() {
            let mut replacement = source.clone();
            self.swap(&mut replacement);
            return;
        }

        let shared = self.len.min(source.len);
        self.as_mut_slice()[..shared].clone_from_slice(&source.as_slice()[..shared]);

        if source.len < self.len {
            self.truncate(source.len);
        } else {
            // SAFETY: `[len, source.len)` is uninitialised and within capacity.
            let mut fill = unsafe { PartialFill::new(self.storage.address_at(self.len)) };
            for item in &source.as_slice()[self.len..] {
                let value = item.clone();
                // SAFETY: at most `source.len - len` slots are written.
                unsafe { fill.push(value) };
            }
            self.len += fill.commit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_allocate() {
        let v = Vector::<u64>::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn push_pop_and_index() {
        let mut v = Vector::new();
        v.push(1);
        v.push(2);
        v.push(3);
        assert_eq!(v.len(), 3);
        assert_eq!(v[0], 1);
        assert_eq!(v[2], 3);
        assert_eq!(v.pop(), Some(3));
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut v = Vector::<String>::new();
        assert_eq!(v.pop(), None);
    }

    #[test]
    fn growth_doubles_from_one() {
        let mut v = Vector::new();
        let mut seen = Vec::new();
        for i in 0..9 {
            v.push(i);
            seen.push(v.capacity());
        }
        assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn push_returns_new_element() {
        let mut v = Vector::new();
        *v.push(5) += 1;
        assert_eq!(v[0], 6);
    }

    #[test]
    fn insert_remove_pop_scenario() {
        let mut v = Vector::new();
        v.push(1);
        v.push(2);
        v.push(3);
        v.insert(1, 9);
        assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
        assert_eq!(v.remove(0), 1);
        assert_eq!(v.as_slice(), &[9, 2, 3]);
        v.pop();
        assert_eq!(v.as_slice(), &[9, 2]);
        assert_eq!(v.len(), 2);
        assert!(v.capacity() >= 4);
    }

    #[test]
    fn emplace_into_full_vector_grows() {
        let mut v = Vector::from_fn(2, |i| i.to_string());
        assert_eq!(v.len(), v.capacity());
        v.emplace_back_with(|| String::from("2"));
        assert_eq!(v.capacity(), 4);
        v.push(String::from("3"));
        assert_eq!(v.len(), v.capacity());
        v.emplace_with(4, || String::from("4"));
        v.emplace_with(0, || String::from("-1"));
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.as_slice(), &["-1", "0", "1", "2", "3", "4"]);
    }

    #[test]
    fn insert_at_end_and_into_empty() {
        let mut v = Vector::new();
        v.insert(0, 'b');
        v.insert(1, 'c');
        v.insert(0, 'a');
        assert_eq!(v.as_slice(), &['a', 'b', 'c']);
    }

    #[test]
    fn insert_with_spare_capacity_keeps_block() {
        let mut v = Vector::with_capacity(8);
        v.push(1);
        v.push(3);
        let before = v.as_ptr();
        v.insert(1, 2);
        assert_eq!(v.as_ptr(), before);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 3) should be <= len (is 2)")]
    fn insert_past_end_panics() {
        let mut v = Vector::from_fn(2, |i| i);
        v.insert(3, 0);
    }

    #[test]
    #[should_panic(expected = "removal index (is 2) should be < len (is 2)")]
    fn remove_past_end_panics() {
        let mut v = Vector::from_fn(2, |i| i);
        v.remove(2);
    }

    #[test]
    fn with_len_then_resize() {
        let mut v = Vector::<i32>::with_len(5);
        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|&x| x == 0));
        v[0] = 7;
        v[1] = 8;
        v.resize(2);
        assert_eq!(v.as_slice(), &[7, 8]);
        v.resize(4);
        assert_eq!(v.as_slice(), &[7, 8, 0, 0]);
    }

    #[test]
    fn reserve_is_exact_and_noop_when_smaller() {
        let mut v = Vector::<u8>::new();
        v.reserve(10);
        assert_eq!(v.capacity(), 10);
        v.reserve(3);
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn reserve_then_push_never_reallocates() {
        let mut v = Vector::new();
        v.reserve(64);
        let base = v.as_ptr();
        for i in 0..64 {
            v.push(i);
        }
        assert_eq!(v.as_ptr(), base);
        assert_eq!(v.capacity(), 64);
    }

    #[test]
    fn try_reserve_reports_overflow_and_keeps_contents() {
        let mut v = Vector::from_fn(3, |i| i as u64);
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert!(matches!(err, StorageError::CapacityOverflow { .. }));
        assert_eq!(v.as_slice(), &[0, 1, 2]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn try_from_fn_stops_at_first_error() {
        let result = Vector::try_from_fn(10, |i| if i == 4 { Err(i) } else { Ok(i.to_string()) });
        assert_eq!(result.unwrap_err(), 4);
    }

    #[test]
    fn try_resize_with_error_keeps_len() {
        let mut v = Vector::from_fn(2, |i| i);
        let mut calls = 0;
        let result = v.try_resize_with(6, || {
            calls += 1;
            if calls == 3 {
                Err("third")
            } else {
                Ok(100)
            }
        });
        assert_eq!(result, Err("third"));
        assert_eq!(v.as_slice(), &[0, 1]);
        assert!(v.capacity() >= 6);
    }

    #[test]
    fn clone_has_exact_capacity_and_independent_storage() {
        let mut a = Vector::with_capacity(16);
        a.push(String::from("x"));
        a.push(String::from("y"));
        let mut b = a.clone();
        assert_eq!(b.capacity(), 2);
        assert_eq!(a, b);
        b[0].push('!');
        assert_eq!(a[0], "x");
        assert_eq!(b[0], "x!");
    }

    #[test]
    fn clone_from_reuses_block_when_it_fits() {
        let source = Vector::from_fn(3, |i| i * 10);
        let mut target = Vector::with_capacity(8);
        target.push(1);
        let block = target.as_ptr();
        target.clone_from(&source);
        assert_eq!(target.as_slice(), &[0, 10, 20]);
        assert_eq!(target.as_ptr(), block);
    }

    #[test]
    fn clone_from_shrinks() {
        let source = Vector::from_fn(1, |_| String::from("a"));
        let mut target = Vector::from_fn(4, |i| i.to_string());
        target.clone_from(&source);
        assert_eq!(target.as_slice(), &[String::from("a")]);
        assert_eq!(target.capacity(), 4);
    }

    #[test]
    fn clone_from_swaps_when_too_big() {
        let source = Vector::from_fn(10, |i| i);
        let mut target = Vector::from_fn(2, |i| i + 100);
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.capacity(), 10);
    }

    #[test]
    fn take_leaves_source_reusable() {
        let mut a = Vector::from_fn(4, |i| i);
        let base = a.as_ptr();
        let b = a.take();
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.as_ptr(), base);
        assert_eq!(b.as_slice(), &[0, 1, 2, 3]);
        a.push(9);
        assert_eq!(a.as_slice(), &[9]);
    }

    #[test]
    fn assign_from_moves_block() {
        let mut a = Vector::from_fn(2, |i| i.to_string());
        let mut b = Vector::from_fn(3, |i| (i * 2).to_string());
        a.assign_from(&mut b);
        assert_eq!(a.as_slice(), &["0", "2", "4"]);
        assert!(b.is_empty());
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a = Vector::from_fn(1, |_| 'a');
        let mut b = Vector::from_fn(2, |_| 'b');
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &['b', 'b']);
        assert_eq!(b.as_slice(), &['a']);
    }

    #[test]
    fn shrink_to_fit_matches_len() {
        let mut v = Vector::with_capacity(32);
        v.push(1u32);
        v.push(2);
        v.shrink_to_fit();
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn truncate_and_clear_keep_capacity() {
        let mut v = Vector::from_fn(5, |i| i);
        v.truncate(7);
        assert_eq!(v.len(), 5);
        v.truncate(2);
        assert_eq!(v.as_slice(), &[0, 1]);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn extend_from_slice_appends_clones() {
        let mut v = Vector::from_fn(1, |_| String::from("a"));
        v.extend_from_slice(&[String::from("b"), String::from("c")]);
        assert_eq!(v.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn zero_sized_elements() {
        let mut v = Vector::new();
        for _ in 0..100 {
            v.push(());
        }
        v.insert(50, ());
        assert_eq!(v.len(), 101);
        v.remove(0);
        assert_eq!(v.len(), 100);
    }

    #[test]
    fn drop_runs_every_destructor_once() {
        use std::rc::Rc;
        let marker = Rc::new(());
        {
            let mut v = Vector::new();
            for _ in 0..10 {
                v.push(Rc::clone(&marker));
            }
            v.remove(3);
            v.insert(0, Rc::clone(&marker));
            v.pop();
            assert_eq!(Rc::strong_count(&marker), 10);
        }
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Step {
            Push(i32),
            Pop,
            Insert(usize, i32),
            Remove(usize),
            Resize(usize),
            Reserve(usize),
        }

        fn step() -> impl Strategy<Value = Step> {
            prop_oneof![
                4 => any::<i32>().prop_map(Step::Push),
                2 => Just(Step::Pop),
                2 => (any::<usize>(), any::<i32>()).prop_map(|(at, v)| Step::Insert(at, v)),
                2 => any::<usize>().prop_map(Step::Remove),
                1 => (0usize..64).prop_map(Step::Resize),
                1 => (0usize..128).prop_map(Step::Reserve),
            ]
        }

        proptest! {
            #[test]
            fn matches_std_vec(steps in proptest::collection::vec(step(), 0..200)) {
                let mut model: Vec<i32> = Vec::new();
                let mut v: Vector<i32> = Vector::new();
                for s in steps {
                    match s {
                        Step::Push(x) => {
                            model.push(x);
                            v.push(x);
                        }
                        Step::Pop => {
                            prop_assert_eq!(v.pop(), model.pop());
                        }
                        Step::Insert(at, x) => {
                            let at = at % (model.len() + 1);
                            model.insert(at, x);
                            v.insert(at, x);
                        }
                        Step::Remove(at) => {
                            if !model.is_empty() {
                                let at = at % model.len();
                                prop_assert_eq!(v.remove(at), model.remove(at));
                            }
                        }
                        Step::Resize(n) => {
                            model.resize(n, 0);
                            v.resize(n);
                        }
                        Step::Reserve(n) => {
                            let before = v.capacity();
                            v.reserve(n);
                            prop_assert_eq!(v.capacity(), before.max(n));
                        }
                    }
                    prop_assert!(v.len() <= v.capacity());
                    prop_assert_eq!(v.as_slice(), model.as_slice());
                }
            }

            #[test]
            fn push_pop_count(pushes in 0usize..300, pops in 0usize..300) {
                let mut v = Vector::new();
                for i in 0..pushes {
                    v.push(i);
                }
                let mut popped = 0;
                for _ in 0..pops {
                    if v.pop().is_some() {
                        popped += 1;
                    }
                }
                prop_assert_eq!(v.len(), pushes - popped);
                for (i, x) in v.iter().enumerate() {
                    prop_assert_eq!(*x, i);
                }
            }

            #[test]
            fn insert_shifts_tail(len in 0usize..50, at in any::<usize>(), x in any::<i64>()) {
                let original: Vec<i64> = (0..len as i64).collect();
                let at = at % (len + 1);
                let mut v = Vector::from_fn(len, |i| i as i64);
                v.insert(at, x);
                prop_assert_eq!(v.len(), len + 1);
                prop_assert_eq!(&v[..at], &original[..at]);
                prop_assert_eq!(v[at], x);
                prop_assert_eq!(&v[at + 1..], &original[at..]);
            }

            #[test]
            fn remove_shifts_tail(len in 1usize..50, at in any::<usize>()) {
                let original: Vec<i64> = (0..len as i64).collect();
                let at = at % len;
                let mut v = Vector::from_fn(len, |i| i as i64);
                prop_assert_eq!(v.remove(at), original[at]);
                prop_assert_eq!(v.len(), len - 1);
                prop_assert_eq!(&v[..at], &original[..at]);
                prop_assert_eq!(&v[at..], &original[at + 1..]);
            }
        }
    }
}
