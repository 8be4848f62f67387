//! Custom User-Provided Entropy Source.
//!
//! Replays bytes injected by the caller, e.g. entropy gathered by the host
//! application or fixed vectors in tests. Consumed bytes are wiped.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;
use super::{EntropyError, EntropySource};

/// Source that buffers user-injected entropy.
pub struct CustomSource {
    buffer: Zeroizing<Vec<u8>>,
}

impl CustomSource {
    /// Creates a new empty CustomSource.
    pub fn new() -> Self {
        Self { buffer: Zeroizing::new(Vec::new()) }
    }

    /// Add entropy bytes to the pool.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Number of bytes still available.
    pub fn remaining(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for CustomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for CustomSource {
    fn name(&self) -> &'static str {
        "CustomInput"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.buffer.len() < dest.len() {
            return Err(EntropyError::Exhausted);
        }

        dest.copy_from_slice(&self.buffer[..dest.len()]);
        // Shift the tail down and wipe the vacated end before truncating.
        let consumed = dest.len();
        let total = self.buffer.len();
        self.buffer.copy_within(consumed.., 0);
        for b in self.buffer[total - consumed..].iter_mut() {
            *b = 0;
        }
        self.buffer.truncate(total - consumed);
        Ok(())
    }
}
