//! Big-endian conversion between byte strings and unsigned integers.
//!
//! A message is embedded into the field by reading its bytes as one big-endian
//! integer. Leading zero bytes vanish in that integer, so the byte length travels
//! alongside every share and is used to pad the value back on the way out.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::mpc::MpcError;

/// Reads `data` as a big-endian unsigned integer. The empty string is 0.
pub fn bytes_to_int(data: &[u8]) -> BigUint {
    BigUint::from_bytes_be(data)
}

/// Writes `value` big-endian into exactly `length` bytes, left-padded with zeros.
///
/// # Failure Modes
/// - `value` needs more than `length` bytes: `MpcError::LengthOverflow`. After a
///   reconstruction this means the shares did not belong together.
pub fn int_to_bytes(value: &BigUint, length: usize) -> Result<Vec<u8>, MpcError> {
    if value.is_zero() {
        return Ok(vec![0u8; length]);
    }

    let digits = value.to_bytes_be();
    if digits.len() > length {
        return Err(MpcError::LengthOverflow {
            required: digits.len(),
            length,
        });
    }

    let mut out = vec![0u8; length - digits.len()];
    out.extend_from_slice(&digits);
    Ok(out)
}
