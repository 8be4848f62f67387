//! Operations on shares.
//!
//! This module implements operations on existing shares, such as proactive
//! refresh and homomorphic addition.
//!
//! # Features
//! - **Proactive Refresh**: Updates shares without changing the secret.
//! - **Homomorphic Addition**: Adds two secrets (mod P) by adding their shares.
//!
//! # Security
//! - **Zeroization**: Temporary polynomials are zeroized.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;

use super::polynomial::evaluate;
use super::quorum::random_element;
use crate::core::field::Fp;
use crate::entropy::EntropySource;
use crate::mpc::{share::Share, MpcError};

/// Refreshes a set of shares by adding a random polynomial with zero intercept.
///
/// Every share value changes while the shared secret stays the same, so shares
/// leaked before the refresh cannot be combined with shares issued after it.
///
/// # Arguments
/// * `shares` - Mutable slice of shares to refresh.
/// * `m` - The threshold used for the original sharing (degree of poly is m-1).
/// * `rng` - Entropy source.
pub fn refresh_shares<R: EntropySource + ?Sized>(
    shares: &mut [Share],
    m: u32,
    rng: &mut R,
) -> Result<(), MpcError> {
    if shares.is_empty() {
        return Err(MpcError::InsufficientShares);
    }
    if m < 2 {
        return Err(MpcError::InvalidThreshold);
    }
    // Refreshing a subset is allowed: the update polynomial only depends on m.

    let length = shares[0].length;
    if shares.iter().any(|s| s.length != length) {
        return Err(MpcError::ShareLengthMismatch);
    }

    // g(x) = 0 + c1*x + ... + c(m-1)*x^(m-1)
    let mut coeffs: Zeroizing<Vec<Fp>> = Zeroizing::new(Vec::with_capacity(m as usize));
    coeffs.push(Fp::ZERO);
    for _ in 1..m {
        coeffs.push(random_element(rng)?);
    }

    for share in shares.iter_mut() {
        let delta = evaluate(&coeffs, share.x());
        share.value += delta;
    }

    log::debug!("refreshed {} shares, threshold {}", shares.len(), m);
    Ok(())
}

/// Adds two shares homomorphically.
///
/// If share1 is a share of S1 and share2 is a share of S2 (with same index and
/// the same declared length), the result is a share of (S1 + S2) mod P.
pub fn add_shares(share1: &Share, share2: &Share) -> Result<Share, MpcError> {
    if share1.identifier != share2.identifier {
        return Err(MpcError::InvalidShareIndex);
    }
    if share1.length != share2.length {
        return Err(MpcError::ShareLengthMismatch);
    }

    Share::new(share1.identifier, share1.value + share2.value, share1.length)
}
