//! Text-level split and reconstruct.
//!
//! This is the public surface most callers need: a UTF-8 message goes in, `n`
//! share tokens of the form `"<x>:<y>:<len>"` come out, and any `m` of them turn
//! back into the message.
//!
//! ```
//! let shares = shamir_textshare::split("my secret data", 5, 3).unwrap();
//! let message = shamir_textshare::reconstruct(&[&shares[0], &shares[2], &shares[4]]).unwrap();
//! assert_eq!(message, "my secret data");
//! ```
//!
//! A message must encode (big-endian) to an integer below 2^127 - 1, which in
//! practice means at most 15 bytes, or 16 when the first byte is below 0x80.
//! Leading NUL bytes are free.
//!
//! Passing fewer than m tokens does not fail reliably: the threshold is not
//! recorded in the tokens, so the engine interpolates whatever it is given.
//! The result is usually a `Decoding` error and otherwise a wrong message.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;
use num_bigint::BigUint;

use crate::config::ShareConfig;
use crate::core::bytes::{bytes_to_int, int_to_bytes};
use crate::entropy::{EntropySource, OsEntropy};
use crate::mpc::quorum::{split_secret, validate_params};
use crate::mpc::reconstruct::reconstruct_secret;
use crate::mpc::share::Share;
use crate::mpc::MpcError;

/// Secret sharing engine bound to a configuration.
///
/// Holds no mutable state; one instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct SecretShare {
    config: ShareConfig,
}

impl SecretShare {
    pub fn new(config: ShareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    /// Splits `message` into `n` tokens, any `m` of which reconstruct it.
    ///
    /// Coefficients come from the operating system CSPRNG.
    pub fn split(&self, message: &str, n: u32, m: u32) -> Result<Vec<String>, MpcError> {
        self.split_with(message, n, m, &mut OsEntropy::new())
    }

    /// `split` with a caller-provided entropy source.
    ///
    /// # Failure Modes
    /// - `Validation`: `m > n`, `m < 2`, `n < 2`, or a configured limit exceeded.
    /// - `Encoding`: the message does not fit in one field element.
    /// - `Entropy`: the source failed.
    pub fn split_with<R: EntropySource + ?Sized>(
        &self,
        message: &str,
        n: u32,
        m: u32,
        rng: &mut R,
    ) -> Result<Vec<String>, MpcError> {
        Ok(self
            .split_shares(message.as_bytes(), n, m, rng)?
            .iter()
            .map(Share::to_token)
            .collect())
    }

    /// Splits raw bytes into `Share` values.
    pub fn split_shares<R: EntropySource + ?Sized>(
        &self,
        message: &[u8],
        n: u32,
        m: u32,
        rng: &mut R,
    ) -> Result<Vec<Share>, MpcError> {
        validate_params(n, m)?;
        self.config.check_share_count(n as usize)?;
        self.config.check_message_len(message.len())?;

        split_secret(&bytes_to_int(message), message.len(), n, m, rng)
    }

    /// Recovers the message from share tokens.
    ///
    /// # Failure Modes
    /// - `Validation`: fewer than 2 tokens, too many tokens, lengths disagree or
    ///   exceed the configured limit.
    /// - `Format`: a token is not `x:y:len`.
    /// - `Domain`: two tokens carry the same x.
    /// - `Decoding`: the recovered value is not a UTF-8 message of the declared
    ///   length, typically because the tokens do not belong together or are
    ///   fewer than the threshold.
    pub fn reconstruct<S: AsRef<str>>(&self, tokens: &[S]) -> Result<String, MpcError> {
        let shares = self.parse_shares(tokens)?;
        let bytes = self.reconstruct_bytes(&shares)?;
        String::from_utf8(bytes).map_err(|_| MpcError::InvalidUtf8)
    }

    /// Parses tokens into shares, enforcing the count and length limits.
    pub fn parse_shares<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<Share>, MpcError> {
        if tokens.len() < 2 {
            return Err(MpcError::InsufficientShares);
        }
        self.config.check_share_count(tokens.len())?;

        tokens
            .iter()
            .map(|token| {
                let share: Share = token.as_ref().parse()?;
                self.config.check_message_len(share.length)?;
                Ok(share)
            })
            .collect()
    }

    /// Interpolates `shares` and restores the original byte string.
    ///
    /// Shares built in code are held to the same count and length limits as
    /// parsed tokens.
    pub fn reconstruct_bytes(&self, shares: &[Share]) -> Result<Vec<u8>, MpcError> {
        self.config.check_share_count(shares.len())?;
        let secret = reconstruct_secret(shares)?;
        let length = shares[0].length;
        self.config.check_message_len(length)?;
        int_to_bytes(&BigUint::from(secret), length)
    }
}

/// Splits `message` into `n` share tokens with threshold `m`, using the default
/// configuration and the operating system CSPRNG.
pub fn split(message: &str, n: u32, m: u32) -> Result<Vec<String>, MpcError> {
    SecretShare::default().split(message, n, m)
}

/// Reconstructs a message from at least two share tokens using the default
/// configuration.
pub fn reconstruct<S: AsRef<str>>(tokens: &[S]) -> Result<String, MpcError> {
    SecretShare::default().reconstruct(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::Fp;
    use crate::entropy::CustomSource;
    use crate::mpc::ErrorKind;
    use alloc::string::ToString;
    use alloc::vec;
    use proptest::prelude::*;

    const MESSAGE: &str = "my secret data";

    fn pick(shares: &[String], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| shares[i].clone()).collect()
    }

    /// All k-element index subsets of 0..n in lexicographic order.
    fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        let mut current = Vec::with_capacity(k);
        fn walk(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
            if current.len() == k {
                out.push(current.clone());
                return;
            }
            for i in start..n {
                current.push(i);
                walk(i + 1, n, k, current, out);
                current.pop();
            }
        }
        walk(0, n, k, &mut current, &mut out);
        out
    }

    #[test]
    fn test_basic_secret_sharing() {
        let shares = split(MESSAGE, 5, 3).unwrap();
        assert_eq!(shares.len(), 5);

        let reconstructed = reconstruct(&pick(&shares, &[0, 2, 4])).unwrap();
        assert_eq!(reconstructed, MESSAGE);
    }

    #[test]
    fn test_token_shape() {
        let shares = split(MESSAGE, 4, 2).unwrap();
        for (i, token) in shares.iter().enumerate() {
            let fields: Vec<&str> = token.split(':').collect();
            assert_eq!(fields.len(), 3);
            assert_eq!(fields[0], (i + 1).to_string());
            assert_eq!(fields[2], MESSAGE.len().to_string());
        }
    }

    #[test]
    fn test_minimum_threshold() {
        let shares = split(MESSAGE, 5, 2).unwrap();
        assert_eq!(reconstruct(&shares[..2]).unwrap(), MESSAGE);
    }

    #[test]
    fn test_all_shares_reconstruction() {
        for (n, m) in [(2, 2), (4, 3), (7, 7), (20, 20)] {
            let shares = split(MESSAGE, n, m).unwrap();
            assert_eq!(reconstruct(&shares).unwrap(), MESSAGE, "n={} m={}", n, m);
        }
    }

    #[test]
    fn test_every_threshold_subset() {
        let shares = split(MESSAGE, 6, 3).unwrap();
        for combo in combinations(6, 3) {
            assert_eq!(reconstruct(&pick(&shares, &combo)).unwrap(), MESSAGE, "{:?}", combo);
        }
        // More than m shares also work.
        for combo in combinations(6, 4) {
            assert_eq!(reconstruct(&pick(&shares, &combo)).unwrap(), MESSAGE, "{:?}", combo);
        }
    }

    #[test]
    fn test_empty_message() {
        let shares = split("", 3, 2).unwrap();
        assert!(shares.iter().all(|s| s.ends_with(":0")));
        assert_eq!(reconstruct(&shares[..2]).unwrap(), "");
    }

    #[test]
    fn test_multibyte_and_nul_prefixed_messages() {
        for message in ["ñ é ü", "日本語", "\u{1F512}ok", "\0\0key", "\0"] {
            let shares = split(message, 4, 2).unwrap();
            assert_eq!(reconstruct(&pick(&shares, &[0, 3])).unwrap(), message);
        }
    }

    #[test]
    fn test_long_nul_padding_within_limit() {
        let mut message = "\0".repeat(100);
        message.push_str("tail");
        let shares = split(&message, 3, 2).unwrap();
        assert_eq!(reconstruct(&shares[1..]).unwrap(), message);
    }

    #[test]
    fn test_message_too_large_for_field() {
        // 16 bytes with the top bit set exceed 2^127 - 1.
        let too_big = "\u{7FF}\u{7FF}\u{7FF}\u{7FF}\u{7FF}\u{7FF}\u{7FF}\u{7FF}";
        let err = split(too_big, 3, 2).unwrap_err();
        assert_eq!(err, MpcError::SecretTooLarge);
        assert_eq!(err.kind(), ErrorKind::Encoding);

        let long = "This is a much longer secret message than one field element holds";
        assert_eq!(split(long, 5, 3).unwrap_err().kind(), ErrorKind::Encoding);

        // 16 ASCII bytes still fit.
        let shares = split("sixteen bytes!!!", 3, 2).unwrap();
        assert_eq!(reconstruct(&shares).unwrap(), "sixteen bytes!!!");
    }

    #[test]
    fn test_invalid_parameters() {
        let cases = [
            (3, 5, MpcError::ThresholdExceedsShares),
            (5, 1, MpcError::InvalidThreshold),
            (1, 1, MpcError::InvalidThreshold),
            (0, 0, MpcError::InvalidThreshold),
        ];
        for (n, m, expected) in cases {
            let err = split(MESSAGE, n, m).unwrap_err();
            assert_eq!(err, expected, "n={} m={}", n, m);
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn test_validation_precedes_encoding() {
        let too_long = "far too long for a single field element";
        assert_eq!(split(too_long, 3, 5), Err(MpcError::ThresholdExceedsShares));
    }

    #[test]
    fn test_insufficient_shares_reconstruction() {
        let shares = split(MESSAGE, 5, 4).unwrap();
        // Completes or fails on decoding, but never yields the message.
        match reconstruct(&shares[..3]) {
            Ok(wrong) => assert_ne!(wrong, MESSAGE),
            Err(e) => assert_eq!(e.kind(), ErrorKind::Decoding),
        }
    }

    #[test]
    fn test_single_share_rejected() {
        let shares = split(MESSAGE, 3, 2).unwrap();
        let err = reconstruct(&shares[..1]).unwrap_err();
        assert_eq!(err, MpcError::InsufficientShares);
        let empty: [&str; 0] = [];
        assert_eq!(reconstruct(&empty), Err(MpcError::InsufficientShares));
    }

    #[test]
    fn test_invalid_share_format() {
        let err = reconstruct(&["bad:token", "1:2:3"]).unwrap_err();
        assert_eq!(err, MpcError::MalformedShare);
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_duplicate_shares_are_degenerate() {
        let shares = split(MESSAGE, 3, 2).unwrap();
        let err = reconstruct(&pick(&shares, &[1, 1])).unwrap_err();
        assert_eq!(err, MpcError::DuplicateShareIndex);
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_mixed_splits_do_not_reconstruct() {
        let a = split(MESSAGE, 3, 2).unwrap();
        let b = split("other message!", 3, 2).unwrap();
        let mixed = vec![a[0].clone(), b[1].clone()];
        match reconstruct(&mixed) {
            Ok(wrong) => {
                assert_ne!(wrong, MESSAGE);
                assert_ne!(wrong, "other message!");
            }
            Err(e) => assert_eq!(e.kind(), ErrorKind::Decoding),
        }
    }

    #[test]
    fn test_invalid_utf8_is_decoding_error() {
        // f(x) = 0xFF + 0x01·x: one byte, not UTF-8 on its own.
        let tokens = ["1:256:1", "2:257:1"];
        let err = reconstruct(&tokens).unwrap_err();
        assert_eq!(err, MpcError::InvalidUtf8);
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }

    #[test]
    fn test_share_independence() {
        let shares1 = split(MESSAGE, 3, 2).unwrap();
        let shares2 = split(MESSAGE, 3, 2).unwrap();
        assert_ne!(shares1, shares2);

        let reconstructed1 = reconstruct(&shares1[..2]).unwrap();
        let reconstructed2 = reconstruct(&shares2[..2]).unwrap();
        assert_eq!(reconstructed1, MESSAGE);
        assert_eq!(reconstructed2, MESSAGE);
    }

    #[test]
    fn test_deterministic_split_with_custom_source() {
        // f(x) = 'A' + 1·x
        let mut rng = CustomSource::new();
        rng.add_bytes(&1u128.to_be_bytes());
        let shares = SecretShare::default().split_with("A", 3, 2, &mut rng).unwrap();
        assert_eq!(shares, ["1:66:1", "2:67:1", "3:68:1"]);
    }

    #[test]
    fn test_config_limits() {
        let engine = SecretShare::new(ShareConfig::default().with_max_shares(4).with_max_message_len(8));

        assert_eq!(
            engine.split(MESSAGE, 5, 2),
            Err(MpcError::TooManyShares { count: 5, max: 4 })
        );
        assert_eq!(
            engine.split("nine byte", 3, 2),
            Err(MpcError::MessageTooLong { length: 9, max: 8 })
        );

        let forged = ["1:5:1000000000", "2:6:1000000000"];
        let err = engine.reconstruct(&forged).unwrap_err();
        assert_eq!(err, MpcError::MessageTooLong { length: 1_000_000_000, max: 8 });
        assert_eq!(err.kind(), ErrorKind::Validation);

        let many = ["1:1:1", "2:1:1", "3:1:1", "4:1:1", "5:1:1"];
        assert_eq!(
            engine.reconstruct(&many),
            Err(MpcError::TooManyShares { count: 5, max: 4 })
        );
        assert_eq!(engine.config().max_shares, 4);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = reconstruct(&["1:5:3", "2:6:4"]).unwrap_err();
        assert_eq!(err, MpcError::ShareLengthMismatch);
    }

    #[test]
    fn test_duplicate_index_reported_before_length_mismatch() {
        let err = reconstruct(&["1:5:3", "1:6:4"]).unwrap_err();
        assert_eq!(err, MpcError::DuplicateShareIndex);
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_forged_length_on_built_shares() {
        let engine = SecretShare::default();
        let shares = [
            Share::new(1, Fp::ZERO, 1 << 46).unwrap(),
            Share::new(2, Fp::ZERO, 1 << 46).unwrap(),
        ];
        let err = engine.reconstruct_bytes(&shares).unwrap_err();
        assert_eq!(err, MpcError::MessageTooLong { length: 1 << 46, max: 4096 });
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_bytes_roundtrip_through_engine() {
        let engine = SecretShare::default();
        let secret = [0u8, 0, 0, 0xfe, 0x01];
        let shares = engine.split_shares(&secret, 4, 3, &mut OsEntropy::new()).unwrap();
        assert_eq!(engine.reconstruct_bytes(&shares[1..]).unwrap(), secret);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_roundtrip_any_threshold_subset(
            message in "[ -~]{0,16}|\\PC{0,3}",
            (n, m, chosen) in (2u32..=20)
                .prop_flat_map(|n| (Just(n), 2..=n))
                .prop_flat_map(|(n, m)| {
                    let indices: Vec<usize> = (0..n as usize).collect();
                    (Just(n), Just(m), proptest::sample::subsequence(indices, m as usize))
                })
        ) {
            let shares = split(&message, n, m).unwrap();
            prop_assert_eq!(shares.len(), n as usize);
            let subset = pick(&shares, &chosen);
            prop_assert_eq!(reconstruct(&subset).unwrap(), message);
        }

        #[test]
        fn prop_bytes_conversion_exact(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let value = bytes_to_int(&bytes);
            prop_assert_eq!(int_to_bytes(&value, bytes.len()).unwrap(), bytes);
        }
    }
}
