//! Shamir (m, n) threshold secret sharing for short text secrets.
//!
//! A UTF-8 message is read as a big-endian integer, used as the constant term
//! of a random polynomial of degree m - 1 over GF(2^127 - 1), and handed out as
//! n evaluations. Any m of the resulting `x:y:len` tokens recover the message by
//! Lagrange interpolation at zero; fewer reveal nothing about it.
//!
//! # Modules
//! - `api`: `split` / `reconstruct` on text and tokens.
//! - `mpc`: shares, polynomial generation, interpolation, refresh.
//! - `core`: field arithmetic and byte/integer conversion.
//! - `entropy`: CSPRNG sources for polynomial coefficients.
//! - `config`: limits applied to untrusted input.
//!
//! The engine is stateless: every call works on its own inputs, so it can be
//! used from many threads at once.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod api;
pub mod config;
pub mod core;
pub mod entropy;
pub mod mpc;

pub use api::{reconstruct, split, SecretShare};
pub use config::ShareConfig;
pub use mpc::{ErrorKind, MpcError};
