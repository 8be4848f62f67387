//! Secret reconstruction from shares.
//!
//! This module implements Lagrange interpolation over GF(2^127 - 1) to recover
//! the constant term of the sharing polynomial:
//!
//! ```text
//! secret = Σ_i y_i · L_i(0)
//! L_i(0) = Π_{j≠i} (0 - x_j) / (x_i - x_j)
//! ```
//!
//! # Negative Differences
//! `0 - x_j` and `x_i - x_j` are negative as integers for most pairs. They are
//! computed with `Fp` subtraction, which lands in `[0, P)` (e.g. `1 - 2 = P - 1`),
//! never with signed or wrapping integer arithmetic.
//!
//! # Under-Threshold Sets
//! The threshold m is not part of a share, so interpolating fewer than m shares
//! is indistinguishable from interpolating a lower-degree polynomial. The result
//! is a well-defined but wrong field element and no error is raised here.
//!
//! # Security
//! - **Validation**: Checks share count, length agreement and duplicate indices.

extern crate alloc;
use alloc::vec::Vec;

use crate::core::field::Fp;
use crate::mpc::{share::Share, MpcError};

/// Evaluates at x = 0 the unique polynomial through `points`.
///
/// # Failure Modes
/// - Two points share an x-coordinate: the denominator is zero and the set is
///   degenerate (`MpcError::DuplicateShareIndex`).
pub fn interpolate_at_zero(points: &[(Fp, Fp)]) -> Result<Fp, MpcError> {
    let mut secret = Fp::ZERO;

    for (i, &(xi, yi)) in points.iter().enumerate() {
        let mut numerator = Fp::ONE;
        let mut denominator = Fp::ONE;

        for (j, &(xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= Fp::ZERO - xj;
            denominator *= xi - xj;
        }

        let inv = denominator
            .inverse()
            .map_err(|_| MpcError::DuplicateShareIndex)?;
        secret += yi * numerator * inv;
    }

    Ok(secret)
}

/// Reconstructs the secret field element from a list of shares.
///
/// # Arguments
/// * `shares` - At least two shares, in any order.
///
/// # Returns
/// * `Ok(Fp)` - The interpolated constant term.
/// * `Err(MpcError)` - If inputs are invalid (too few, duplicates, length mismatch).
pub fn reconstruct_secret(shares: &[Share]) -> Result<Fp, MpcError> {
    if shares.len() < 2 {
        return Err(MpcError::InsufficientShares);
    }

    // A repeated x makes the set degenerate whatever lengths it declares.
    // O(N^2) is fine: N is bounded by the configured share limit.
    for (i, a) in shares.iter().enumerate() {
        if shares[i + 1..].iter().any(|b| b.identifier == a.identifier) {
            log::warn!("rejecting share set with duplicate index {}", a.identifier);
            return Err(MpcError::DuplicateShareIndex);
        }
    }

    let length = shares[0].length;
    if shares.iter().any(|s| s.length != length) {
        log::warn!("rejecting share set with mismatched lengths");
        return Err(MpcError::ShareLengthMismatch);
    }

    let points: Vec<(Fp, Fp)> = shares.iter().map(|s| (s.x(), s.value)).collect();
    let secret = interpolate_at_zero(&points)?;

    log::debug!("reconstructed {}-byte secret from {} shares", length, shares.len());
    Ok(secret)
}
