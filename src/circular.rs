use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use num_traits::Zero;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::slots::{self, wrap_add};

/// A FIFO queue stored in a circular buffer that resizes itself: capacity doubles when an enqueue
/// finds the queue full, and halves when a dequeue leaves exactly `capacity / 4` elements.
///
/// Live elements occupy the `len()` slots starting at `head`, wrapping around the end of the
/// buffer. Every resize copies them to the start of the new buffer in FIFO order, so `head` is
/// `0` right after a resize.
///
/// ## Summary of supported operations
///
/// - Enqueue at the tail, dequeue and peek at the head.
///
/// - Get element at index, counted from the head.
///
/// - Explicit [`Self::release`]; dropping the queue releases it as well.
///
/// Example:
/// ```
/// use growvec::CircularQueue;
/// let mut q = CircularQueue::with_capacity(2)?;
/// for i in 0..5 {
///     q.enqueue(i)?;
/// }
/// assert_eq!(q.capacity(), 8);
/// assert_eq!(q.peek(), Ok(0));
/// assert_eq!(q.dequeue(), Ok(0));
/// assert_eq!(q.dequeue(), Ok(1));
/// assert_eq!(q.len(), 3);
/// # Ok::<(), growvec::Error>(())
/// ```
///
#[derive(Clone)]
pub struct CircularQueue<T> {
    slots: Vec<T>,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T: Copy + Zero>
CircularQueue<T> {
    /// Creates an empty queue with `max(1, requested)` zero-filled slots.
    pub fn with_capacity(requested: usize) -> Result<Self> {
        Ok(Self {
            slots: slots::zeroed(slots::clamp_capacity(requested))?,
            head: 0,
            tail: 0,
            count: 0,
        })
    }

    /// Returns how many elements are queued.
    pub fn len(&self) -> usize { self.count }

    /// Returns whether the queue is empty.
    pub fn is_empty(&self) -> bool { self.count == 0 }

    /// Returns the number of allocated slots; `0` once released.
    pub fn capacity(&self) -> usize { self.slots.len() }

    /// Returns whether [`Self::release`] has been called.
    pub fn is_released(&self) -> bool { self.slots.is_empty() }

    /// Appends an element at the tail, doubling the capacity first if the queue is full.
    /// On error nothing has changed.
    pub fn enqueue(&mut self, elem: T) -> Result<()> {
        self.ensure_live()?;
        if self.count == self.capacity() {
            self.resize(slots::grown(self.capacity())?)?;
        }
        self.slots[self.tail] = elem;
        self.tail = wrap_add(self.tail, 1, self.capacity());
        self.count += 1;
        Ok(())
    }

    /// Removes the element at the head and returns it.
    ///
    /// If exactly `capacity / 4` elements remain afterwards (and at least one), the capacity is
    /// halved. A failed shrink allocation is not an error: the element is still dequeued and the
    /// queue keeps its current buffer.
    pub fn dequeue(&mut self) -> Result<T> {
        self.ensure_live()?;
        let elem = self.peek()?;
        self.head = wrap_add(self.head, 1, self.capacity());
        self.count -= 1;
        if slots::is_sparse(self.count, self.capacity()) {
            let to = slots::shrunk(self.capacity());
            if self.resize(to).is_err() {
                warn!(from = self.capacity(), to, "shrink skipped, keeping current buffer");
            }
        }
        Ok(elem)
    }

    /// Returns the element at the head without removing it.
    pub fn peek(&self) -> Result<T> {
        if self.count == 0 { return Err(Error::EmptyCollection); }
        Ok(self.slots[self.head])
    }

    /// Returns the `i`-th element counted from the head.
    pub fn get(&self, i: usize) -> Result<T> {
        if i < self.count {
            Ok(self.slots[wrap_add(self.head, i, self.capacity())])
        } else {
            Err(Error::OutOfRange { index: i, len: self.count })
        }
    }

    /// Frees the backing buffer; length and capacity become `0`.
    /// Calling it again is a no-op. Any later mutation fails with [`Error::Released`].
    pub fn release(&mut self) {
        if self.is_released() { return; }
        debug!(capacity = self.capacity(), len = self.count, "releasing queue");
        self.slots = Vec::new();
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    fn ensure_live(&self) -> Result<()> {
        if self.is_released() { Err(Error::Released) } else { Ok(()) }
    }

    fn live(&self) -> impl Iterator<Item=T> + '_ {
        (0..self.count).map(move |i| self.slots[wrap_add(self.head, i, self.capacity())])
    }

    /// Moves the live elements, in FIFO order, to the front of a fresh buffer of `to` slots.
    /// Leaves the queue untouched if the allocation fails.
    fn resize(&mut self, to: usize) -> Result<()> {
        debug_assert!(self.count < to);
        let from = self.capacity();
        let mut resized = slots::zeroed(to)?;
        for (slot, elem) in resized.iter_mut().zip(self.live()) {
            *slot = elem;
        }
        self.slots = resized;
        self.head = 0;
        self.tail = self.count;
        trace!(from, to, "resized queue");
        Ok(())
    }
}

// Only live elements, in FIFO order, take part in the comparison.
impl<T: Copy + Zero + PartialEq>
PartialEq for CircularQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.live().eq(other.live())
    }
}

impl<T: Copy + Zero + Eq>
Eq for CircularQueue<T> {}

impl<T: Copy + Zero + Debug>
Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.live()).finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::collections::VecDeque;
    use std::format;
    use std::vec::Vec;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn queue_walkthrough() {
        let mut q = CircularQueue::with_capacity(2).unwrap();
        let mut capacities = Vec::new();
        for i in 0..5 {
            q.enqueue(i).unwrap();
            capacities.push(q.capacity());
        }
        assert_eq!(capacities, [2, 2, 4, 4, 8]);
        assert_eq!(q.len(), 5);
        assert_eq!(q.peek(), Ok(0));

        let mut dequeued = Vec::new();
        while !q.is_empty() {
            dequeued.push(q.dequeue().unwrap());
        }
        assert_eq!(dequeued, [0, 1, 2, 3, 4]);
        assert_eq!(q.capacity(), 2);
    }

    #[test]
    fn shrink_threshold() {
        let mut q = CircularQueue::with_capacity(16).unwrap();
        for i in 0..5 {
            q.enqueue(i).unwrap();
        }
        assert_eq!(q.capacity(), 16);

        // 5 -> 4 == 16 / 4
        assert_eq!(q.dequeue(), Ok(0));
        assert_eq!(q.capacity(), 8);
        // 4 -> 3, and 3 != 8 / 4
        assert_eq!(q.dequeue(), Ok(1));
        assert_eq!(q.capacity(), 8);
        // 3 -> 2 == 8 / 4
        assert_eq!(q.dequeue(), Ok(2));
        assert_eq!(q.capacity(), 4);
        // 2 -> 1 == 4 / 4
        assert_eq!(q.dequeue(), Ok(3));
        assert_eq!(q.capacity(), 2);
        // an empty queue never shrinks
        assert_eq!(q.dequeue(), Ok(4));
        assert_eq!(q.capacity(), 2);
    }

    #[test]
    fn small_capacities_never_shrink() {
        for capacity in 1..=3 {
            let mut q = CircularQueue::with_capacity(capacity).unwrap();
            for i in 0..capacity {
                q.enqueue(i).unwrap();
            }
            while !q.is_empty() {
                q.dequeue().unwrap();
                assert_eq!(q.capacity(), capacity);
            }
        }
    }

    #[test]
    fn grows_across_wraparound() {
        let mut q = CircularQueue::with_capacity(4).unwrap();
        for i in 0..4 {
            q.enqueue(i).unwrap();
        }
        assert_eq!(q.dequeue(), Ok(0));
        assert_eq!(q.dequeue(), Ok(1));
        // head is 2; these wrap past the end of the buffer
        for i in 4..6 {
            q.enqueue(i).unwrap();
        }
        assert_eq!(q.capacity(), 4);
        assert_eq!(q.len(), 4);
        assert_eq!((q.head, q.tail), (2, 2));

        q.enqueue(6).unwrap();
        assert_eq!(q.capacity(), 8);
        assert_eq!((q.head, q.tail), (0, 5));
        for i in 0..5 {
            assert_eq!(q.get(i), Ok(i as i32 + 2));
        }
        assert_eq!(q.get(5), Err(Error::OutOfRange { index: 5, len: 5 }));
    }

    #[test]
    fn fifo_under_interleaving() {
        let mut q = CircularQueue::with_capacity(1).unwrap();
        let mut model = VecDeque::new();
        let mut seed = 0x2545_F491_u32;
        let mut next = 0u32;
        for _ in 0..10_000 {
            // xorshift32
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            // enqueue slightly more often than dequeue so the queue grows and drains repeatedly
            if seed % 7 < 4 {
                q.enqueue(next).unwrap();
                model.push_back(next);
                next += 1;
            } else {
                match model.pop_front() {
                    Some(expected) => assert_eq!(q.dequeue(), Ok(expected)),
                    None => assert_eq!(q.dequeue(), Err(Error::EmptyCollection)),
                }
            }
            assert_eq!(q.len(), model.len());
            assert!(q.capacity() >= q.len());
            assert!(q.head < q.capacity());
            assert!(q.tail < q.capacity());
            assert_eq!(q.peek().ok(), model.front().copied());
        }
        while let Some(expected) = model.pop_front() {
            assert_eq!(q.dequeue(), Ok(expected));
        }
        assert!(q.is_empty());
    }

    #[test]
    fn empty_queue() {
        let mut q = CircularQueue::<i32>::with_capacity(0).unwrap();
        assert_eq!(q.capacity(), 1);
        assert_eq!(q.peek(), Err(Error::EmptyCollection));
        assert_eq!(q.dequeue(), Err(Error::EmptyCollection));
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), 1);
    }

    #[test]
    fn release_is_terminal() {
        let mut q = CircularQueue::with_capacity(2).unwrap();
        q.enqueue(1).unwrap();
        q.release();
        assert!(q.is_released());
        assert_eq!((q.capacity(), q.len()), (0, 0));
        assert_eq!(q.enqueue(2), Err(Error::Released));
        assert_eq!(q.dequeue(), Err(Error::Released));
        assert_eq!(q.peek(), Err(Error::EmptyCollection));
        q.release();
        assert!(q.is_released());
    }

    #[test]
    fn equality_ignores_layout() {
        let mut a = CircularQueue::with_capacity(4).unwrap();
        for i in 0..4 {
            a.enqueue(i).unwrap();
        }
        a.dequeue().unwrap();
        a.enqueue(4).unwrap();

        let mut b = CircularQueue::with_capacity(32).unwrap();
        for i in 1..5 {
            b.enqueue(i).unwrap();
        }
        assert_eq!(a, b);
        b.enqueue(5).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn print_it() {
        let mut q = CircularQueue::with_capacity(2).unwrap();
        for i in 0..3 {
            q.enqueue(i).unwrap();
        }
        q.dequeue().unwrap();
        assert_eq!(format!("{:?}", q), "[1, 2]");
    }
}
