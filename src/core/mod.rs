//! Arithmetic and byte-level building blocks.
//!
//! - `field`: GF(2^127 - 1) element type and modular operations.
//! - `bytes`: big-endian conversion between byte strings and integers.

pub mod bytes;
pub mod field;
