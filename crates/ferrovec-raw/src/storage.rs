//! Fixed-capacity blocks of uninitialised element slots.
//!
//! A [`RawStorage`] is acquired with a capacity and released when it is
//! dropped. It never constructs or destroys a `T`: the owner decides
//! which slots are live and is responsible for dropping them before
//! the block goes away.

use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::StorageError;

/// An owned block of memory with room for `capacity` values of `T`.
///
/// The block is never zeroed or otherwise initialised. When `capacity`
/// is zero, or `T` is zero-sized, no memory is requested from the
/// allocator and the address is dangling: it is well aligned and may be
/// used for zero-length accesses, but it must never be read through.
///
/// `RawStorage` is deliberately not `Clone`. Moving it (or using
/// [`take`](Self::take) / [`swap`](Self::swap)) is the only way a block
/// changes owner.
pub struct RawStorage<T> {
    /// Base of the block. Dangling when nothing is allocated.
    ptr: NonNull<T>,
    /// Number of `T`-sized slots in the block.
    capacity: usize,
    /// Marks the block as holding `T`s for auto-trait and variance purposes.
    _owns: PhantomData<T>,
}

// SAFETY: a `RawStorage` is a uniquely owned allocation. Sending or sharing
// it is exactly as safe as sending or sharing the `T`s stored in it.
unsafe impl<T: Send> Send for RawStorage<T> {}
// SAFETY: see above.
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
    /// An empty block: capacity zero, nothing allocated.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Acquire a block with room for exactly `capacity` values.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow. Allocator failure is reported through
    /// [`std::alloc::handle_alloc_error`].
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(storage) => storage,
            Err(err) => err.raise(),
        }
    }

    /// Acquire a block with room for exactly `capacity` values.
    ///
    /// Nothing is constructed. A zero capacity yields an empty block and
    /// is not an error.
    ///
    /// # Errors
    ///
    /// [`StorageError::CapacityOverflow`] if the block would exceed
    /// `isize::MAX` bytes, [`StorageError::AllocationFailed`] if the
    /// allocator returns null.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        let layout = Self::layout_for(capacity)?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _owns: PhantomData,
            });
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(StorageError::AllocationFailed { layout })?;
        Ok(Self {
            ptr,
            capacity,
            _owns: PhantomData,
        })
    }

    /// Layout of a block holding `capacity` values of `T`.
    ///
    /// # Errors
    ///
    /// [`StorageError::CapacityOverflow`] if the size overflows.
    pub fn layout_for(capacity: usize) -> Result<Layout, StorageError> {
        Layout::array::<T>(capacity).map_err(|_| StorageError::CapacityOverflow {
            requested: capacity,
        })
    }

    /// Number of slots in the block, live or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the block is backed by an actual allocation.
    ///
    /// False for empty blocks and for zero-sized `T`.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.allocated_layout().is_some()
    }

    /// Base address of the block.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable base address of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Address of slot `index`.
    ///
    /// `index == capacity` is allowed and yields the one-past-the-end
    /// address. The returned pointer may be written through by the owner
    /// of the block; reading it is only valid for slots the owner has
    /// initialised.
    ///
    /// # Safety
    ///
    /// `index` must be at most [`capacity`](Self::capacity).
    #[inline]
    pub unsafe fn address_at(&self, index: usize) -> *mut T {
        debug_assert!(
            index <= self.capacity,
            "slot {index} is past capacity {}",
            self.capacity
        );
        // SAFETY: `index <= capacity`, so the offset stays inside the block
        // or lands one past its end.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Exchange blocks with `other`. Never allocates, never fails.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Move the block out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    fn allocated_layout(&self) -> Option<Layout> {
        if self.capacity == 0 || mem::size_of::<T>() == 0 {
            return None;
        }
        // SAFETY: the same size and alignment were validated by
        // `Layout::array` when this block was acquired.
        Some(unsafe {
            Layout::from_size_align_unchecked(
                mem::size_of::<T>() * self.capacity,
                mem::align_of::<T>(),
            )
        })
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.allocated_layout() {
            // SAFETY: `ptr` came from `alloc::alloc` with this exact layout
            // and has not been freed; ownership is unique.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
        }
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("capacity", &self.capacity)
            .field("allocated", &self.is_allocated())
            .finish()
    }
}
