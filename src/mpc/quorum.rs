//! Quorum logic for Shamir's Secret Sharing over GF(2^127 - 1).
//!
//! This module implements the threshold validation and random polynomial
//! generation required to split a secret into shares.
//!
//! # Security
//! - **Uniform Coefficients**: Rejection sampling from 127-bit draws, so every
//!   coefficient is uniform in `[0, P)`.
//! - **Zeroization**: Polynomial coefficients and raw random bytes are zeroized.
//! - **Validation**: Checks threshold parameters ($2 \le m \le n$) before any
//!   arithmetic happens.

extern crate alloc;
use alloc::vec::Vec;
use num_bigint::BigUint;
use zeroize::Zeroizing;

use super::polynomial::evaluate;
use crate::core::field::{Fp, MODULUS};
use crate::entropy::EntropySource;
use crate::mpc::{share::Share, MpcError};

/// Draws per coefficient before giving up on a source.
///
/// A healthy source is rejected with probability 2^-127 per draw; hitting this
/// bound means the source is stuck.
const MAX_DRAWS: usize = 8;

/// Checks `2 <= m <= n`.
///
/// The checks run in a fixed order, so `(n, m) = (1, 1)` reports the threshold
/// before the share count.
pub fn validate_params(n: u32, m: u32) -> Result<(), MpcError> {
    if m > n {
        return Err(MpcError::ThresholdExceedsShares);
    }
    if m < 2 {
        return Err(MpcError::InvalidThreshold);
    }
    if n < 2 {
        return Err(MpcError::TooFewShares);
    }
    Ok(())
}

/// Samples a uniformly random field element.
pub fn random_element<R: EntropySource + ?Sized>(rng: &mut R) -> Result<Fp, MpcError> {
    let mut buf = Zeroizing::new([0u8; 16]);
    for _ in 0..MAX_DRAWS {
        rng.fill(&mut buf[..])?;
        let candidate = u128::from_be_bytes(*buf) & MODULUS;
        if candidate < MODULUS {
            return Ok(Fp::new(candidate));
        }
        log::warn!("{}: rejected out-of-field draw", rng.name());
    }
    Err(MpcError::RngFailure)
}

/// Builds `[secret, r_1, ..., r_{m-1}]` with each `r_i` uniform in `[0, P)`.
///
/// # Failure Modes
/// - `secret >= P`: `MpcError::SecretTooLarge`, before any randomness is drawn.
/// - Entropy failure: propagated.
pub fn build_polynomial<R: EntropySource + ?Sized>(
    secret: &BigUint,
    m: u32,
    rng: &mut R,
) -> Result<Zeroizing<Vec<Fp>>, MpcError> {
    let constant = Fp::try_from(secret)?;

    let mut coeffs = Zeroizing::new(Vec::with_capacity(m as usize));
    coeffs.push(constant);
    for _ in 1..m {
        coeffs.push(random_element(rng)?);
    }
    Ok(coeffs)
}

/// Splits a secret into `n` shares, requiring `m` shares to reconstruct.
///
/// # Arguments
/// * `secret` - The message as a big-endian integer.
/// * `length` - Byte length of the message, carried in every share.
/// * `n` - The total number of shares to generate.
/// * `m` - The threshold number of shares required for reconstruction.
/// * `rng` - A mutable reference to an entropy source.
///
/// # Returns
/// * `Ok(Vec<Share>)` containing `n` shares with identifiers `1..=n`.
/// * `Err(MpcError)` on failure (invalid params, secret too large, rng failure).
///
/// # Limits
/// `n` shares are allocated up front and `n` is only checked against `m`. Callers
/// taking `n` from untrusted input bound it first, as `SecretShare` and
/// `ShamirPrime` do with `ShareConfig::check_share_count`.
pub fn split_secret<R: EntropySource + ?Sized>(
    secret: &BigUint,
    length: usize,
    n: u32,
    m: u32,
    rng: &mut R,
) -> Result<Vec<Share>, MpcError> {
    validate_params(n, m)?;

    let coeffs = build_polynomial(secret, m, rng)?;

    let mut shares = Vec::with_capacity(n as usize);
    for identifier in 1..=n {
        let y = evaluate(&coeffs, Fp::from(identifier));
        shares.push(Share::new(identifier, y, length)?);
    }

    log::debug!("split {}-byte secret into {} shares, threshold {}", length, n, m);
    Ok(shares)
}
