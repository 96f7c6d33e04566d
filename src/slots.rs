//! Slot allocation and capacity arithmetic shared by the containers.

use alloc::vec::Vec;

use num_traits::Zero;
use tracing::warn;

use crate::error::{Error, Result};

/// Smallest capacity any live container holds. Requests below it are coerced up.
pub const MIN_CAPACITY: usize = 1;

/// `max(MIN_CAPACITY, requested)`.
/// Reason for the hand-written `if`: `Ord::max` is not const fn.
pub const fn clamp_capacity(requested: usize) -> usize {
    if requested < MIN_CAPACITY { MIN_CAPACITY } else { requested }
}

/// Capacity after one growth step: `capacity * 2`.
/// Overflow is reported the same way as a failed allocation.
pub fn grown(capacity: usize) -> Result<usize> {
    capacity
        .checked_mul(2)
        .ok_or(Error::AllocationFailure { capacity: usize::MAX })
}

/// Capacity after one shrink step: `capacity / 2`, never below [`MIN_CAPACITY`].
pub const fn shrunk(capacity: usize) -> usize {
    clamp_capacity(capacity / 2)
}

/// Whether a queue holding `count` live elements in `capacity` slots is sparse enough to halve.
/// The threshold is exactly `count == capacity / 4`, which can never fire for capacities `1..=3`.
pub const fn is_sparse(count: usize, capacity: usize) -> bool {
    count > 0 && count == capacity / 4
}

/// `(index + addend) % capacity`.
#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

/// Allocates exactly `capacity` zero-filled slots.
/// Nothing is touched on failure; the caller still owns whatever buffer it had.
pub fn zeroed<T: Copy + Zero>(capacity: usize) -> Result<Vec<T>> {
    let mut slots = Vec::new();
    if let Err(err) = slots.try_reserve_exact(capacity) {
        warn!(capacity, %err, "slot allocation failed");
        return Err(Error::AllocationFailure { capacity });
    }
    slots.resize(capacity, T::zero());
    Ok(slots)
}
