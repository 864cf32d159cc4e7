//! Turkish national identity number value type
//!
//! An [`IdentityNumber`] is an 11-digit integer in
//! `10_000_000_000..=99_999_999_999`. Construction only enforces the range;
//! whether the check digits are consistent is answered by
//! [`IdentityNumber::is_valid`].
//!
//! # Examples
//!
//! ```
//! use tckimlik::core::models::IdentityNumber;
//!
//! let id = IdentityNumber::new(10_000_000_146).unwrap();
//! assert!(id.is_valid());
//! assert_eq!(id.digit(10), Some(4));
//!
//! let parsed: IdentityNumber = "10000000146".parse().unwrap();
//! assert_eq!(parsed, id);
//!
//! assert!(IdentityNumber::new(9_999_999_999).is_err());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::checksum;

/// Number of digits in an identity number
pub const DIGIT_COUNT: usize = 11;

/// Smallest value with 11 digits
pub const MIN_VALUE: u64 = 10_000_000_000;

/// Largest value with 11 digits
pub const MAX_VALUE: u64 = 99_999_999_999;

/// Errors that can occur when constructing an identity number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityNumberError {
    /// Value does not have exactly 11 digits
    #[error("identity number must have 11 digits, got {value}")]
    OutOfRange {
        /// The rejected value
        value: u64,
    },

    /// Input string is not made of 11 decimal digits
    #[error("identity number must be 11 decimal digits: {0:?}")]
    InvalidFormat(String),
}

/// A Turkish national identity number (T.C. Kimlik No)
///
/// Equality, ordering and hashing use the raw value only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct IdentityNumber {
    /// The raw 11-digit value
    value: u64,

    /// Decimal digits, most significant first (derived from `value`)
    digits: [u8; DIGIT_COUNT],
}

impl IdentityNumber {
    /// Create an identity number from its integer value
    pub fn new(value: u64) -> Result<Self, IdentityNumberError> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(IdentityNumberError::OutOfRange { value });
        }

        let mut digits = [0u8; DIGIT_COUNT];
        let mut rest = value;
        for slot in digits.iter_mut().rev() {
            // rest % 10 is always < 10
            *slot = u8::try_from(rest % 10).unwrap_or_default();
            rest /= 10;
        }

        Ok(Self { value, digits })
    }

    /// Get the raw integer value
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Get all 11 digits, most significant first
    #[must_use]
    pub const fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.digits
    }

    /// Get the digit at a 1-indexed position (1..=11)
    #[must_use]
    pub fn digit(&self, position: usize) -> Option<u8> {
        position
            .checked_sub(1)
            .and_then(|index| self.digits.get(index))
            .copied()
    }

    /// Check whether the check digits (positions 10 and 11) are consistent
    #[must_use]
    pub fn is_valid(&self) -> bool {
        checksum::is_valid(&self.digits)
    }
}

impl PartialEq for IdentityNumber {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for IdentityNumber {}

impl std::hash::Hash for IdentityNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for IdentityNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IdentityNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl TryFrom<u64> for IdentityNumber {
    type Error = IdentityNumberError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IdentityNumber> for u64 {
    fn from(id: IdentityNumber) -> Self {
        id.value
    }
}

impl FromStr for IdentityNumber {
    type Err = IdentityNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != DIGIT_COUNT || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdentityNumberError::InvalidFormat(s.to_string()));
        }

        let value = trimmed
            .parse::<u64>()
            .map_err(|_| IdentityNumberError::InvalidFormat(s.to_string()))?;
        Self::new(value)
    }
}

impl std::fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
