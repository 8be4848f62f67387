//! Secret Share Definition.
//!
//! A share is a point $(x, y)$ on the polynomial used to hide the secret, plus
//! the byte length of the original message:
//! - $x$ (identifier): 1-based index, unique within a split.
//! - $y$ (value): the evaluation $f(x) \bmod P$.
//! - `length`: needed to restore leading zero bytes of the message.
//!
//! # Wire Format
//! `"<x>:<y>:<len>"`, all three base-10 integers. There is no version field and
//! neither m nor n is recoverable from a share set.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop` to wipe the value from memory.
//! - `Debug` implementation redacts the value; `Display` is the token itself.

extern crate alloc;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::MpcError;
use crate::core::field::Fp;

/// A share of a secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    /// The x-coordinate (1..=n).
    /// Public information (who owns the share).
    #[zeroize(skip)]
    pub identifier: u32,

    /// The y-coordinate. Highly sensitive information.
    pub value: Fp,

    /// Byte length of the original message.
    #[zeroize(skip)]
    pub length: usize,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("identifier", &self.identifier)
            .field("length", &self.length)
            .field("value", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Creates a new share with validation.
    ///
    /// # Arguments
    /// * `identifier` - The x-coordinate (must be non-zero).
    /// * `value` - The y-coordinate.
    /// * `length` - Byte length of the shared message.
    pub fn new(identifier: u32, value: Fp, length: usize) -> Result<Self, MpcError> {
        if identifier == 0 {
            return Err(MpcError::InvalidShareIndex);
        }
        Ok(Self { identifier, value, length })
    }

    /// Returns the x-coordinate as a field element.
    pub fn x(&self) -> Fp {
        Fp::from(self.identifier)
    }

    /// Serializes to the `x:y:len` token.
    pub fn to_token(&self) -> String {
        alloc::format!("{}", self)
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.identifier, self.value.value(), self.length)
    }
}

/// Parses one decimal field; signs, whitespace and empty fields are rejected.
fn parse_field<T: FromStr>(field: &str) -> Result<T, MpcError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MpcError::MalformedShare);
    }
    field.parse().map_err(|_| MpcError::MalformedShare)
}

impl FromStr for Share {
    type Err = MpcError;

    /// Parses an `x:y:len` token. Surrounding whitespace is ignored.
    fn from_str(token: &str) -> Result<Self, MpcError> {
        let mut fields = token.trim().split(':');
        let (x, y, len) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(x), Some(y), Some(len), None) => (x, y, len),
            _ => return Err(MpcError::MalformedShare),
        };

        let identifier: u32 = parse_field(x)?;
        let value = Fp::from_canonical(parse_field::<u128>(y)?)?;
        let length: usize = parse_field(len)?;
        Share::new(identifier, value, length)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Share {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Share {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = <String as serde::Deserialize>::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
