//! Errors reported by the containers in this crate.

use thiserror::Error;

/// Everything that can go wrong when operating on a [`crate::GrowableBuffer`],
/// [`crate::Stack`] or [`crate::CircularQueue`].
///
/// Every failing operation leaves the container exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The backing buffer could not be (re)allocated to `capacity` slots.
    /// Also reported when the requested capacity overflows `usize`.
    #[error("failed to allocate a buffer of {capacity} slots")]
    AllocationFailure { capacity: usize },

    /// Pop, peek or dequeue on a container with no live elements.
    #[error("collection is empty")]
    EmptyCollection,

    /// Indexed access outside of the live elements `0..len`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Mutation of a container after [`release`](crate::GrowableBuffer::release).
    #[error("container has been released")]
    Released,
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
