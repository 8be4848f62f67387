//! Randomness for polynomial coefficients.
//!
//! Shamir's scheme is only as strong as its coefficients are unpredictable, so
//! share generation draws through the `EntropySource` trait instead of a
//! general-purpose PRNG. Production code uses `OsEntropy`; `CustomSource`
//! replays caller-supplied bytes for deterministic tests and external pools.

pub mod custom;
pub mod os;

pub use custom::CustomSource;
pub use os::OsEntropy;

use core::fmt;

/// Error types for entropy collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The underlying generator could not produce bytes.
    CollectionFailed,
    /// Source is exhausted (e.g., fixed buffer).
    Exhausted,
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyError::CollectionFailed => write!(f, "entropy collection failed"),
            EntropyError::Exhausted => write!(f, "entropy source exhausted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EntropyError {}

/// A trait for entropy sources.
pub trait EntropySource {
    /// Returns a unique identifier for the source.
    fn name(&self) -> &'static str;

    /// Fills `dest` with random bytes from the source.
    ///
    /// # Arguments
    /// * `dest` - Buffer to fill with entropy.
    ///
    /// # Returns
    /// * `Ok(())` on success.
    /// * `Err(EntropyError)` if the source fails.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}
