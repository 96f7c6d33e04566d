use core::fmt::{Debug, Formatter};

use num_traits::Zero;

use crate::error::{Error, Result};
use crate::growable::GrowableBuffer;

/// A LIFO stack backed by a [`GrowableBuffer`], pushing and popping at the end of the buffer.
/// Capacity doubles when a push finds the stack full and never shrinks.
///
/// ## Summary of supported operations
///
/// - Push onto the top.
///
/// - Pop or peek at the top; both fail with [`Error::EmptyCollection`] when the stack is empty,
///   instead of terminating the process.
///
/// Example:
/// ```
/// use growvec::{Error, Stack};
/// let mut s = Stack::with_capacity(4)?;
/// for i in 1..=8 {
///     s.push(i)?;
/// }
/// assert_eq!(s.peek(), Ok(8));
/// assert_eq!(s.pop(), Ok(8));
/// assert_eq!(s.pop(), Ok(7));
/// assert_eq!(s.len(), 6);
/// # Ok::<(), Error>(())
/// ```
///
#[derive(Clone)]
pub struct Stack<T>(GrowableBuffer<T>);

impl<T: Copy + Zero>
Stack<T> {
    /// Creates an empty stack with `max(1, requested)` slots.
    pub fn with_capacity(requested: usize) -> Result<Self> {
        Ok(Self(GrowableBuffer::with_capacity(requested)?))
    }

    /// Creates a stack from its buffer; the last live element is the top.
    pub fn from_buffer(buffer: GrowableBuffer<T>) -> Self { Self(buffer) }

    /// Returns the inner [`GrowableBuffer`].
    pub fn buffer(self) -> GrowableBuffer<T> { self.0 }

    /// Returns whether this stack is empty.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns the number of elements currently in the stack.
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns the number of allocated slots.
    pub fn capacity(&self) -> usize { self.0.capacity() }

    /// Returns whether [`Self::release`] has been called.
    pub fn is_released(&self) -> bool { self.0.is_released() }

    /// Pushes an element onto the top of this stack.
    pub fn push(&mut self, elem: T) -> Result<()> { self.0.append(elem) }

    /// Removes the element on top and returns it.
    pub fn pop(&mut self) -> Result<T> {
        if self.is_released() { return Err(Error::Released); }
        let top = self.top_index()?;
        self.0.remove_at(top)
    }

    /// Returns the element on top without removing it.
    pub fn peek(&self) -> Result<T> {
        let top = self.top_index()?;
        self.0.get(top)
    }

    /// Frees the backing buffer. See [`GrowableBuffer::release`].
    pub fn release(&mut self) { self.0.release() }

    fn top_index(&self) -> Result<usize> {
        self.len().checked_sub(1).ok_or(Error::EmptyCollection)
    }
}

impl<T: Copy + Zero>
From<GrowableBuffer<T>> for Stack<T> {
    fn from(buffer: GrowableBuffer<T>) -> Self { Self(buffer) }
}

impl<T: Copy + Zero + PartialEq>
PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}

impl<T: Copy + Zero + Eq>
Eq for Stack<T> {}

impl<T: Copy + Zero + Debug>
Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        // bottom to top
        self.0.fmt(f)
    }
}
