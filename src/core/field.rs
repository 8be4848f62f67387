//! Prime field arithmetic modulo the Mersenne prime P = 2^127 - 1.
//!
//! Every secret and share value lives in this field. Elements are stored as a
//! canonical `u128` in `[0, P)`; all constructors reduce, so no operation ever
//! observes an unreduced value.
//!
//! # Design Choices
//! - **Mersenne Reduction**: since 2^127 ≡ 1 (mod P), reduction is a fold of the
//!   high bits onto the low bits instead of a division.
//! - **No Signed Intermediates**: subtraction adds P before subtracting when the
//!   result would go negative, so `x_i - x_j` in Lagrange interpolation is always
//!   a proper field element.
//! - **Fermat Inverse**: `a^-1 = a^(P-2)`; zero is rejected with an error instead
//!   of the GF(256) convention of mapping it to zero.
//!
//! # Usage
//! ```
//! use shamir_textshare::core::field::Fp;
//! let a = Fp::new(3);
//! let b = Fp::new(5);
//! assert_eq!((a * b).value(), 15);
//! assert_eq!((a - b) + b, a);
//! assert_eq!(a * a.inverse().unwrap(), Fp::ONE);
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use zeroize::Zeroize;

use crate::mpc::MpcError;

/// The field modulus P = 2^127 - 1.
pub const MODULUS: u128 = (1u128 << 127) - 1;

const LOW_64: u128 = u64::MAX as u128;

/// An element of GF(P).
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Zeroize)]
#[repr(transparent)]
pub struct Fp(u128);

impl Fp {
    /// The additive identity.
    pub const ZERO: Fp = Fp(0);

    /// The multiplicative identity.
    pub const ONE: Fp = Fp(1);

    /// Reduces an arbitrary `u128` into the field.
    #[inline]
    pub const fn new(value: u128) -> Self {
        Fp(reduce(value))
    }

    /// Wraps a value that is already canonical, rejecting anything `>= P`.
    pub fn from_canonical(value: u128) -> Result<Self, MpcError> {
        if value >= MODULUS {
            return Err(MpcError::ValueOutOfField);
        }
        Ok(Fp(value))
    }

    /// Returns the canonical representative in `[0, P)`.
    #[inline]
    pub const fn value(self) -> u128 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Square-and-multiply exponentiation.
    pub fn pow(self, mut exp: u128) -> Self {
        let mut result = Fp::ONE;
        let mut base = self;
        while exp != 0 {
            if exp & 1 == 1 {
                result *= base;
            }
            base *= base;
            exp >>= 1;
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem.
    ///
    /// # Failure Modes
    /// - `self == 0`: returns `MpcError::NonInvertible`.
    pub fn inverse(self) -> Result<Self, MpcError> {
        if self.is_zero() {
            return Err(MpcError::NonInvertible);
        }
        Ok(self.pow(MODULUS - 2))
    }
}

/// Folds a `u128` once around 2^127 and conditionally subtracts P.
///
/// Correct for every `u128` input: the fold leaves at most `2^127`, which one
/// conditional subtraction brings below P.
#[inline]
const fn reduce(value: u128) -> u128 {
    let folded = (value & MODULUS) + (value >> 127);
    if folded >= MODULUS {
        folded - MODULUS
    } else {
        folded
    }
}

/// Full 254-bit product of two canonical elements as `(high, low)` 128-bit halves.
#[inline]
fn widening_mul(a: u128, b: u128) -> (u128, u128) {
    let (a_hi, a_lo) = (a >> 64, a & LOW_64);
    let (b_hi, b_lo) = (b >> 64, b & LOW_64);

    let lo_lo = a_lo * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_lo = a_hi * b_lo;
    let hi_hi = a_hi * b_hi;

    // Inputs are below 2^127 so none of these sums can overflow.
    let middle = (lo_lo >> 64) + (lo_hi & LOW_64) + (hi_lo & LOW_64);
    let low = (lo_lo & LOW_64) | ((middle & LOW_64) << 64);
    let high = hi_hi + (lo_hi >> 64) + (hi_lo >> 64) + (middle >> 64);
    (high, low)
}

impl Add for Fp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fp(reduce(self.0 + rhs.0))
    }
}

impl AddAssign for Fp {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fp {
    type Output = Self;

    /// Field subtraction. Never wraps: a negative difference becomes `a + P - b`.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        if self.0 >= rhs.0 {
            Fp(self.0 - rhs.0)
        } else {
            Fp(self.0 + MODULUS - rhs.0)
        }
    }
}

impl SubAssign for Fp {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Fp {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fp::ZERO - self
    }
}

impl Mul for Fp {
    type Output = Self;

    /// 2^128 ≡ 2 (mod P), so `high * 2^128 + low ≡ 2 * high + low`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (high, low) = widening_mul(self.0, rhs.0);
        // high < 2^126, so 2 * high + (low mod 2^127) + 1 stays below 2^128.
        let folded = (high << 1) + (low & MODULUS) + (low >> 127);
        Fp(reduce(folded))
    }
}

impl MulAssign for Fp {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl From<u32> for Fp {
    fn from(value: u32) -> Self {
        Fp(value as u128)
    }
}

impl From<Fp> for u128 {
    fn from(element: Fp) -> u128 {
        element.0
    }
}

impl From<Fp> for BigUint {
    fn from(element: Fp) -> BigUint {
        BigUint::from(element.0)
    }
}

impl TryFrom<&BigUint> for Fp {
    type Error = MpcError;

    /// Accepts integers in `[0, P)` only; larger secrets cannot be represented.
    fn try_from(value: &BigUint) -> Result<Self, MpcError> {
        value
            .to_u128()
            .filter(|&v| v < MODULUS)
            .map(Fp)
            .ok_or(MpcError::SecretTooLarge)
    }
}

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp({})", self.0)
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Modular addition; both inputs are reduced first.
pub fn add(a: u128, b: u128) -> u128 {
    (Fp::new(a) + Fp::new(b)).value()
}

/// Modular multiplication; both inputs are reduced first.
pub fn mul(a: u128, b: u128) -> u128 {
    (Fp::new(a) * Fp::new(b)).value()
}

/// Modular inverse `a^(P-2) mod P`. Fails when `a ≡ 0 (mod P)`.
pub fn inverse(a: u128) -> Result<u128, MpcError> {
    Fp::new(a).inverse().map(Fp::value)
}
