#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod adapter;
mod circular;
mod error;
mod growable;
pub mod search;
mod slots;

pub use self::{
    adapter::Stack,
    circular::CircularQueue,
    error::{Error, Result},
    growable::GrowableBuffer,
    slots::MIN_CAPACITY,
};
