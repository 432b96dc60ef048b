//! Error types for random value generation.

use thiserror::Error;

/// Failure kinds for the generator operations.
///
/// Exactly two kinds exist. Both are raised before any entropy is consumed;
/// no operation clamps, coerces, or retries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    /// A parameter fell outside its declared domain. Carries the fixed
    /// message for the violated bound.
    #[error("{0}")]
    Range(&'static str),

    /// An explicit min/max pair was supplied with `min` greater than `max`,
    /// a value-ordering violation distinct from a domain-range violation.
    #[error("the value of `min` must be less than or equal to the value of `max`")]
    Order,
}
