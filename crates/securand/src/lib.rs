//! Securand — bounded, cryptographically-secure random value generation.
//!
//! Callers request a value with shape constraints (byte count, decimal
//! digit length, fractional precision, charset) and receive a value that
//! satisfies them, without reasoning about modulo bias, byte-to-charset
//! mapping, or UUID bit layout themselves. All randomness is drawn from an
//! injected [`EntropySource`]; [`SecureRandom::new`] wires in the system
//! CSPRNG.
//!
//! ```
//! use securand::SecureRandom;
//!
//! let mut random = SecureRandom::new();
//! let token = random.hexadecimal_string(32)?;
//! assert_eq!(token.len(), 32);
//! # Ok::<(), securand::GeneratorError>(())
//! ```

pub mod bounds;
pub mod bytes;
pub mod float;
pub mod integer;
pub mod string;
pub mod uuid;

pub use securand_core::entropy::{EntropySource, SystemEntropy};
pub use securand_core::error::GeneratorError;

use ::uuid::Uuid;

/// Stateless generator facade owning the entropy source the generator
/// modules draw from.
///
/// Every call is independently validated and independently sourced; no
/// state persists between calls beyond the entropy source itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRandom<E = SystemEntropy> {
    entropy: E,
}

impl SecureRandom<SystemEntropy> {
    /// Creates a generator backed by the system CSPRNG.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entropy: SystemEntropy,
        }
    }
}

impl<E: EntropySource> SecureRandom<E> {
    /// Creates a generator backed by the given entropy source.
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    /// Generates `length` random bytes.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Range` if `length` is outside `[1, 64]`.
    pub fn bytes(&mut self, length: usize) -> Result<Vec<u8>, GeneratorError> {
        bytes::bytes(&mut self.entropy, length)
    }

    /// Generates a uniformly random signed integer over the full `i64`
    /// range.
    pub fn integer(&mut self) -> i64 {
        integer::integer(&mut self.entropy)
    }

    /// Generates a random positive integer with exactly `length` decimal
    /// digits.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Range` if `length` is outside `[1, 19]`.
    pub fn positive_integer(&mut self, length: u32) -> Result<i64, GeneratorError> {
        integer::positive_integer(&mut self.entropy, length)
    }

    /// Generates a random negative integer whose absolute value has
    /// exactly `length` decimal digits.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Range` if `length` is outside `[1, 19]`.
    pub fn negative_integer(&mut self, length: u32) -> Result<i64, GeneratorError> {
        integer::negative_integer(&mut self.entropy, length)
    }

    /// Generates a uniformly random integer in `[min, max]` inclusive.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Order` if `min > max`.
    pub fn integer_between(&mut self, min: i64, max: i64) -> Result<i64, GeneratorError> {
        integer::integer_between(&mut self.entropy, min, max)
    }

    /// Generates a random fraction in (-1, 1), excluding zero.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Range` if `fractional_digits` is outside
    /// `[1, 14]`.
    pub fn float(&mut self, fractional_digits: u32) -> Result<f64, GeneratorError> {
        float::float(&mut self.entropy, fractional_digits)
    }

    /// Generates a random fraction in (0, 1).
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Range` if `fractional_digits` is outside
    /// `[1, 14]`.
    pub fn positive_float(&mut self, fractional_digits: u32) -> Result<f64, GeneratorError> {
        float::positive_float(&mut self.entropy, fractional_digits)
    }

    /// Generates a random fraction in (-1, 0).
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Range` if `fractional_digits` is outside
    /// `[1, 14]`.
    pub fn negative_float(&mut self, fractional_digits: u32) -> Result<f64, GeneratorError> {
        float::negative_float(&mut self.entropy, fractional_digits)
    }

    /// Generates a random fraction between two `"0.d...d"` decimal-string
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Range` if either bound is malformed or out
    /// of domain, and `GeneratorError::Order` if `min` exceeds `max`.
    pub fn float_between(&mut self, min: &str, max: &str) -> Result<f64, GeneratorError> {
        float::float_between(&mut self.entropy, min, max)
    }

    /// Generates a lowercase hexadecimal string of exactly `length`
    /// characters.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Range` if `length` is outside `[1, 64]`.
    pub fn hexadecimal_string(&mut self, length: usize) -> Result<String, GeneratorError> {
        string::hexadecimal_string(&mut self.entropy, length)
    }

    /// Generates a mixed-case alphanumeric string of exactly `length`
    /// characters.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Range` if `length` is outside `[1, 64]`.
    pub fn alphanumeric_string(&mut self, length: usize) -> Result<String, GeneratorError> {
        string::alphanumeric_string(&mut self.entropy, length)
    }

    /// Generates a version-4 UUID.
    pub fn uuid(&mut self) -> Uuid {
        uuid::uuid(&mut self.entropy)
    }
}
