//! Polynomial evaluation over GF(2^127 - 1).
//!
//! Shared by share generation (`quorum`) and proactive refresh (`aggregate`).

use crate::core::field::Fp;

/// Evaluates a polynomial at a given point x using Horner's method.
///
/// f(x) = c[0] + c[1]*x + ... + c[k-1]*x^(k-1)
///
/// Coefficients are consumed highest degree first; every step is reduced mod P.
/// An empty slice is the zero polynomial.
///
/// # Arguments
/// * `coeffs` - Coefficients [c0, c1, ..., ck-1]
/// * `x` - The point to evaluate at
#[inline]
pub fn evaluate(coeffs: &[Fp], x: Fp) -> Fp {
    let mut result = Fp::ZERO;
    for &coeff in coeffs.iter().rev() {
        result = result * x + coeff;
    }
    result
}
