//! Configuration for the secret sharing engine.
//!
//! Defines the limits `SecretShare` and `ShamirPrime` enforce on untrusted input.

use crate::mpc::MpcError;

/// Main configuration structure for the engine.
///
/// This struct should be populated by the host application and passed to
/// `SecretShare::new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// Upper bound on n when splitting and on the number of tokens accepted
    /// for reconstruction.
    pub max_shares: usize,

    /// Upper bound on the message byte length, both for `split` and for the
    /// length field of incoming tokens. A forged length would otherwise force
    /// an allocation of that size during decoding.
    pub max_message_len: usize,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            max_shares: 255,
            max_message_len: 4096,
        }
    }
}

impl ShareConfig {
    pub fn with_max_shares(mut self, max_shares: usize) -> Self {
        self.max_shares = max_shares;
        self
    }

    pub fn with_max_message_len(mut self, max_message_len: usize) -> Self {
        self.max_message_len = max_message_len;
        self
    }

    /// Rejects a share count above `max_shares`.
    pub fn check_share_count(&self, count: usize) -> Result<(), MpcError> {
        if count > self.max_shares {
            return Err(MpcError::TooManyShares {
                count,
                max: self.max_shares,
            });
        }
        Ok(())
    }

    /// Rejects a message length above `max_message_len`.
    pub fn check_message_len(&self, length: usize) -> Result<(), MpcError> {
        if length > self.max_message_len {
            return Err(MpcError::MessageTooLong {
                length,
                max: self.max_message_len,
            });
        }
        Ok(())
    }
}
