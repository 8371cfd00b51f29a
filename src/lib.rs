//! Unsigned integers of variable width, stored as an explicit sequence of
//! bits and computed on bit by bit.
//!
//! A [`UInt`] is a plain owned value: it is `Send` and `Sync`, but it has no
//! internal synchronization. Sharing one value mutably between threads
//! requires an external lock.

pub mod core;
pub mod error;
pub mod from;
pub mod conversion;
pub mod display;
pub mod index;
pub mod iter_bits;
pub mod width;
pub mod logic;
pub mod arith;
pub mod booth;

#[cfg(test)]
pub mod proptest;

pub use crate::core::UInt;
pub use crate::error::Error;
