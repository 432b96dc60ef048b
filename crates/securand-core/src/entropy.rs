//! Entropy-source abstraction.
//!
//! In production, this wraps the operating system's CSPRNG. In tests,
//! a predetermined or recorded implementation is injected.

use rand::{Rng, RngCore};

/// Abstraction over a cryptographically secure source of randomness.
///
/// Implementations must be unbiased: `next_i64_range` draws uniformly over
/// the inclusive range with no modulo bias. Callers guarantee `min <= max`;
/// source exhaustion is not a recoverable condition and implementations
/// panic rather than return an error.
pub trait EntropySource: Send + Sync {
    /// Fills `dest` with uniformly random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Draws a uniformly random `i64` in the range `[min, max]` inclusive.
    fn next_i64_range(&mut self, min: i64, max: i64) -> i64;
}

/// Production entropy source backed by the thread-local CSPRNG.
///
/// `rand::rng()` is cryptographically secure and periodically reseeded from
/// the operating system, so a fresh handle per call is cheap and every
/// caller can hold an independent `SystemEntropy` without synchronization.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand::rng().fill_bytes(dest);
    }

    fn next_i64_range(&mut self, min: i64, max: i64) -> i64 {
        rand::rng().random_range(min..=max)
    }
}
