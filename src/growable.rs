use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use num_traits::Zero;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::search;
use crate::slots;

/// A contiguous, resizable buffer of elements that doubles its capacity whenever an append finds
/// it full. Capacity never shrinks.
///
/// All `capacity()` slots are allocated and zero-filled up front; only `0..len()` hold live
/// elements.
///
/// ## Summary of supported operations
///
/// - Append at the end (amortized `O(1)`, `O(n)` on a growth step).
///
/// - Get and set element at index, with bounds checking.
///
/// - Remove at index, shifting every later element one slot towards the front.
///
/// - Explicit [`Self::release`]; dropping the buffer releases it as well.
///
/// Example:
/// ```
/// use growvec::GrowableBuffer;
/// let mut v = GrowableBuffer::with_capacity(2)?;
/// for i in 0..8 {
///     v.append(i * 10)?;
/// }
/// assert_eq!(v.capacity(), 8);
/// v.set(3, 1234)?;
/// assert_eq!(v.remove_at(5)?, 50);
/// assert_eq!(v.as_slice(), &[0, 10, 20, 1234, 40, 60, 70]);
/// # Ok::<(), growvec::Error>(())
/// ```
///
#[derive(Clone)]
pub struct GrowableBuffer<T> {
    slots: Vec<T>,
    len: usize,
}

impl<T: Copy + Zero>
GrowableBuffer<T> {
    /// Creates an empty buffer with `max(1, requested)` zero-filled slots.
    pub fn with_capacity(requested: usize) -> Result<Self> {
        Ok(Self {
            slots: slots::zeroed(slots::clamp_capacity(requested))?,
            len: 0,
        })
    }

    /// Returns how many live elements are in the buffer.
    pub fn len(&self) -> usize { self.len }

    /// Returns whether the buffer holds no live elements.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of allocated slots; `0` once released.
    pub fn capacity(&self) -> usize { self.slots.len() }

    /// Returns whether [`Self::release`] has been called.
    pub fn is_released(&self) -> bool { self.slots.is_empty() }

    /// Returns the live elements.
    pub fn as_slice(&self) -> &[T] { &self.slots[..self.len] }

    ////////////////////////////////////////////////////////////////////
    // append / remove

    /// Appends an element to the end, doubling the capacity first if the buffer is full.
    /// On error nothing has changed.
    pub fn append(&mut self, elem: T) -> Result<()> {
        self.ensure_live()?;
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.slots[self.len] = elem;
        self.len += 1;
        Ok(())
    }

    /// Removes the element at `i` and returns it. Later elements move one slot to the front,
    /// keeping their order. Capacity is kept.
    pub fn remove_at(&mut self, i: usize) -> Result<T> {
        self.ensure_live()?;
        self.check_index(i)?;
        let elem = self.slots[i];
        self.slots.copy_within(i + 1..self.len, i);
        self.len -= 1;
        Ok(elem)
    }

    ////////////////////////////////////////////////////////////////////
    // index

    /// Returns the `i`-th element.
    pub fn get(&self, i: usize) -> Result<T> {
        self.check_index(i)?;
        Ok(self.slots[i])
    }

    /// Overwrites the `i`-th element.
    pub fn set(&mut self, i: usize, elem: T) -> Result<()> {
        self.ensure_live()?;
        self.check_index(i)?;
        self.slots[i] = elem;
        Ok(())
    }

    /// Searches the live elements, which must be sorted ascending, for `target`.
    /// See [`search::binary_search`].
    pub fn binary_search(&self, target: &T) -> Option<usize>
        where
            T: Ord {
        search::binary_search(self.as_slice(), target)
    }

    ////////////////////////////////////////////////////////////////////
    // lifecycle

    /// Frees the backing buffer; length and capacity become `0`.
    /// Calling it again is a no-op. Any later mutation fails with [`Error::Released`].
    pub fn release(&mut self) {
        if self.is_released() { return; }
        debug!(capacity = self.capacity(), len = self.len, "releasing buffer");
        self.slots = Vec::new();
        self.len = 0;
    }

    fn ensure_live(&self) -> Result<()> {
        if self.is_released() { Err(Error::Released) } else { Ok(()) }
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i < self.len { Ok(()) } else { Err(Error::OutOfRange { index: i, len: self.len }) }
    }

    /// Doubles the capacity, keeping every live element at its position.
    fn grow(&mut self) -> Result<()> {
        let from = self.capacity();
        let to = slots::grown(from)?;
        let mut grown = slots::zeroed(to)?;
        grown[..self.len].copy_from_slice(self.as_slice());
        self.slots = grown;
        trace!(from, to, "grew buffer");
        Ok(())
    }
}

// Only live elements take part in the comparison.
impl<T: Copy + Zero + PartialEq>
PartialEq for GrowableBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Zero + Eq>
Eq for GrowableBuffer<T> {}

impl<T: Copy + Zero + Debug>
Debug for GrowableBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
