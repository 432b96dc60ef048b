//! Test entropy — deterministic `EntropySource` implementations for tests.

use securand_core::entropy::EntropySource;

/// A no-op entropy source that always returns `min` from `next_i64_range`
/// and fills byte buffers with zeros. Suitable for tests that do not depend
/// on specific random values.
#[derive(Debug, Clone, Copy)]
pub struct MinimumEntropy;

impl EntropySource for MinimumEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn next_i64_range(&mut self, min: i64, _max: i64) -> i64 {
        min
    }
}

/// An entropy source that returns values from predetermined sequences.
/// Panics if a sequence is exhausted. Used in tests that need specific,
/// repeatable outcomes (e.g., exact float construction or UUID layout).
#[derive(Debug)]
pub struct SequenceEntropy {
    ints: Vec<i64>,
    int_index: usize,
    bytes: Vec<u8>,
    byte_index: usize,
}

impl SequenceEntropy {
    /// Create a `SequenceEntropy` serving both ranged-integer draws and
    /// byte fills from the given sequences.
    #[must_use]
    pub fn new(ints: Vec<i64>, bytes: Vec<u8>) -> Self {
        Self {
            ints,
            int_index: 0,
            bytes,
            byte_index: 0,
        }
    }

    /// Create a `SequenceEntropy` that only serves ranged-integer draws.
    #[must_use]
    pub fn from_ints(ints: Vec<i64>) -> Self {
        Self::new(ints, Vec::new())
    }

    /// Create a `SequenceEntropy` that only serves byte fills.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::new(Vec::new(), bytes)
    }
}

/// An entropy source that records the bounds of every `next_i64_range`
/// call and the length of every `fill_bytes` call. Returns `min` from
/// ranged draws and fills byte buffers with zeros. Used in tests that
/// assert which ranges a generator actually requested.
#[derive(Debug, Default)]
pub struct RecordingEntropy {
    calls: Vec<(i64, i64)>,
    fills: Vec<usize>,
}

impl RecordingEntropy {
    /// Create a new recording entropy source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the `(min, max)` bounds of every ranged draw so far.
    #[must_use]
    pub fn calls(&self) -> &[(i64, i64)] {
        &self.calls
    }

    /// Returns the buffer length of every byte fill so far.
    #[must_use]
    pub fn fills(&self) -> &[usize] {
        &self.fills
    }
}

impl EntropySource for RecordingEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fills.push(dest.len());
        dest.fill(0);
    }

    fn next_i64_range(&mut self, min: i64, max: i64) -> i64 {
        self.calls.push((min, max));
        min
    }
}

impl EntropySource for SequenceEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let end = self.byte_index + dest.len();
        dest.copy_from_slice(&self.bytes[self.byte_index..end]);
        self.byte_index = end;
    }

    fn next_i64_range(&mut self, _min: i64, _max: i64) -> i64 {
        let value = self.ints[self.int_index];
        self.int_index += 1;
        value
    }
}
