//! Operating system CSPRNG source.
//!
//! Backed by `rand_core::OsRng` (`getrandom`). Each instance is a handle to the
//! kernel generator with no state of its own, so concurrent splits never share
//! or reseed a common stream.

use rand_core::{OsRng, RngCore};
use super::{EntropyError, EntropySource};

/// Entropy drawn directly from the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy {
    _private: (),
}

impl OsEntropy {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl EntropySource for OsEntropy {
    fn name(&self) -> &'static str {
        "OsRng"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            log::warn!("OS entropy source failed: {}", e);
            EntropyError::CollectionFailed
        })
    }
}
