//! Threshold secret sharing.
//!
//! This module implements Shamir's (m, n) scheme over the prime field
//! GF(2^127 - 1): a secret is the constant term of a random polynomial of
//! degree m - 1, shares are evaluations at x = 1..=n, and any m shares recover
//! the secret by Lagrange interpolation at x = 0.
//!
//! # Components
//! - `share`: A single share and its `x:y:len` token format.
//! - `polynomial`: Horner evaluation over the field.
//! - `quorum`: Parameter validation, random polynomial generation, splitting.
//! - `reconstruct`: Lagrange interpolation for secret recovery.
//! - `aggregate`: Operations on shares (proactive refresh, addition).
//!
//! # Security
//! - **CSPRNG**: Coefficients come from an `EntropySource`, uniformly in `[0, P)`.
//! - **Zeroization**: Coefficients and share values are zeroized on drop.
//! - **Threshold Is Not Stored**: A share set smaller than the threshold still
//!   interpolates, to a wrong value. Callers that must detect this need their
//!   own integrity check on the message.

pub mod share;
pub mod quorum;
pub mod reconstruct;
pub mod aggregate;
pub mod polynomial;

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;

use crate::config::ShareConfig;
use crate::core::bytes::{bytes_to_int, int_to_bytes};
use crate::entropy::{EntropyError, EntropySource};
use num_bigint::BigUint;

/// Errors for secret sharing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpcError {
    /// Threshold m is greater than the share count n.
    ThresholdExceedsShares,
    /// Threshold m is below 2.
    InvalidThreshold,
    /// Share count n is below 2.
    TooFewShares,
    /// Share count is above the configured limit.
    TooManyShares { count: usize, max: usize },
    /// Fewer than two shares were supplied for reconstruction.
    InsufficientShares,
    /// Message (or a share's declared length) is above the configured limit.
    MessageTooLong { length: usize, max: usize },
    /// Shares disagree on the original message length.
    ShareLengthMismatch,
    /// The message's integer encoding does not fit below the field prime.
    SecretTooLarge,
    /// A share token is not three base-10 integers separated by `:`.
    MalformedShare,
    /// A share carries x = 0, which would expose the secret directly.
    InvalidShareIndex,
    /// A share value is not below the field prime.
    ValueOutOfField,
    /// Two shares have the same x-coordinate.
    DuplicateShareIndex,
    /// Attempted to invert zero.
    NonInvertible,
    /// The recovered integer does not fit in the declared byte length.
    LengthOverflow { required: usize, length: usize },
    /// The recovered bytes are not valid UTF-8.
    InvalidUtf8,
    /// The entropy source failed.
    Entropy(EntropyError),
    /// The entropy source never produced a usable field element.
    RngFailure,
}

/// Coarse classification of `MpcError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed call parameters; detected before any arithmetic.
    Validation,
    /// The message cannot be represented as a field element.
    Encoding,
    /// A share token could not be parsed.
    Format,
    /// A field operation has no defined result (duplicate x, zero inverse).
    Domain,
    /// The recovered value is not a valid message.
    Decoding,
    /// Randomness could not be obtained.
    Entropy,
}

impl MpcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MpcError::ThresholdExceedsShares
            | MpcError::InvalidThreshold
            | MpcError::TooFewShares
            | MpcError::TooManyShares { .. }
            | MpcError::InsufficientShares
            | MpcError::MessageTooLong { .. }
            | MpcError::ShareLengthMismatch => ErrorKind::Validation,
            MpcError::SecretTooLarge => ErrorKind::Encoding,
            MpcError::MalformedShare | MpcError::InvalidShareIndex | MpcError::ValueOutOfField => {
                ErrorKind::Format
            }
            MpcError::DuplicateShareIndex | MpcError::NonInvertible => ErrorKind::Domain,
            MpcError::LengthOverflow { .. } | MpcError::InvalidUtf8 => ErrorKind::Decoding,
            MpcError::Entropy(_) | MpcError::RngFailure => ErrorKind::Entropy,
        }
    }
}

impl fmt::Display for MpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MpcError::ThresholdExceedsShares => write!(f, "threshold m cannot exceed n"),
            MpcError::InvalidThreshold => write!(f, "threshold m must be at least 2"),
            MpcError::TooFewShares => write!(f, "must create at least 2 shares"),
            MpcError::TooManyShares { count, max } => {
                write!(f, "share count {} exceeds limit {}", count, max)
            }
            MpcError::InsufficientShares => write!(f, "at least 2 shares required"),
            MpcError::MessageTooLong { length, max } => {
                write!(f, "message length {} exceeds limit {}", length, max)
            }
            MpcError::ShareLengthMismatch => write!(f, "shares declare different message lengths"),
            MpcError::SecretTooLarge => write!(f, "message too large for the prime field"),
            MpcError::MalformedShare => write!(f, "invalid share format, expected <x>:<y>:<len>"),
            MpcError::InvalidShareIndex => write!(f, "share index must be non-zero"),
            MpcError::ValueOutOfField => write!(f, "share value is not a field element"),
            MpcError::DuplicateShareIndex => write!(f, "degenerate share set: duplicate share index"),
            MpcError::NonInvertible => write!(f, "zero has no multiplicative inverse"),
            MpcError::LengthOverflow { required, length } => write!(
                f,
                "recovered value needs {} bytes but shares declare {}",
                required, length
            ),
            MpcError::InvalidUtf8 => write!(f, "recovered bytes are not valid UTF-8"),
            MpcError::Entropy(e) => write!(f, "entropy source failure: {}", e),
            MpcError::RngFailure => write!(f, "entropy source produced no usable field element"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MpcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MpcError::Entropy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EntropyError> for MpcError {
    fn from(e: EntropyError) -> Self {
        MpcError::Entropy(e)
    }
}

/// Trait for Secret Sharing Schemes.
///
/// Abstract interface over byte secrets, independent of the token format.
pub trait SecretSharingScheme {
    type Share;
    type Secret;
    type Error;

    /// Splits a secret into n shares with threshold m.
    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &Self::Secret,
        n: u32,
        m: u32,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error>;

    /// Reconstructs a secret from shares.
    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Secret, Self::Error>;
}

/// Shamir's Secret Sharing over GF(2^127 - 1), one field element per secret.
///
/// Share counts and declared lengths are checked against a `ShareConfig`
/// before anything is allocated for them.
#[derive(Debug, Default, Clone)]
pub struct ShamirPrime {
    config: ShareConfig,
}

impl ShamirPrime {
    pub fn new(config: ShareConfig) -> Self {
        Self { config }
    }
}

impl SecretSharingScheme for ShamirPrime {
    type Share = share::Share;
    type Secret = Vec<u8>;
    type Error = MpcError;

    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &Self::Secret,
        n: u32,
        m: u32,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error> {
        quorum::validate_params(n, m)?;
        self.config.check_share_count(n as usize)?;
        self.config.check_message_len(secret.len())?;
        quorum::split_secret(&bytes_to_int(secret), secret.len(), n, m, rng)
    }

    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Secret, Self::Error> {
        self.config.check_share_count(shares.len())?;
        let value = reconstruct::reconstruct_secret(shares)?;
        let length = shares[0].length;
        self.config.check_message_len(length)?;
        int_to_bytes(&BigUint::from(value), length)
    }
}
