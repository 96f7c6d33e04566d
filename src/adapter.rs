//! Defines adapters of [`crate::GrowableBuffer`]: data structures that restrict the buffer to a
//! narrower access pattern.

mod stack;

pub use self::stack::*;
