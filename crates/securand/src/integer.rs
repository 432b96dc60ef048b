//! Digit-length-bounded and ranged integer generation.

use securand_core::entropy::EntropySource;
use securand_core::error::GeneratorError;
use tracing::trace;

use crate::bounds;

/// Powers of ten from `10^0` through `10^18`, the largest that fits an
/// `i64`.
const POW10: [i64; 19] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

/// Returns `10^exponent` for `exponent <= 18`.
pub(crate) fn pow10(exponent: u32) -> i64 {
    POW10[exponent as usize]
}

/// Counts the decimal digits of `value`'s absolute value.
pub(crate) fn digit_count(value: i64) -> u32 {
    let mut magnitude = value.unsigned_abs();
    let mut count = 1;
    while magnitude >= 10 {
        magnitude /= 10;
        count += 1;
    }
    count
}

/// Generates a uniformly random signed integer over the full `i64` range.
pub fn integer(entropy: &mut dyn EntropySource) -> i64 {
    entropy.next_i64_range(i64::MIN, i64::MAX)
}

/// Generates a uniformly random positive integer whose decimal
/// representation has exactly `length` digits.
///
/// Drawn from `[10^(length-1), 10^length - 1]`. At `length == 19` the upper
/// bound is clamped to `i64::MAX`, since `10^19 - 1` overflows `i64`.
///
/// # Errors
///
/// Returns `GeneratorError::Range` if `length` is outside `[1, 19]`.
pub fn positive_integer(
    entropy: &mut dyn EntropySource,
    length: u32,
) -> Result<i64, GeneratorError> {
    bounds::check_integer_length(length)?;
    trace!(length, "generating positive integer");

    let lower = pow10(length - 1);
    let upper = if length == bounds::MAX_INTEGER_LENGTH {
        i64::MAX
    } else {
        pow10(length) - 1
    };
    Ok(entropy.next_i64_range(lower, upper))
}

/// Generates a uniformly random negative integer whose absolute value has
/// exactly `length` decimal digits.
///
/// Mirror of [`positive_integer`] with negated bounds; at `length == 19`
/// the lower bound clamps to `i64::MIN`.
///
/// # Errors
///
/// Returns `GeneratorError::Range` if `length` is outside `[1, 19]`.
pub fn negative_integer(
    entropy: &mut dyn EntropySource,
    length: u32,
) -> Result<i64, GeneratorError> {
    bounds::check_integer_length(length)?;
    trace!(length, "generating negative integer");

    let upper = -pow10(length - 1);
    let lower = if length == bounds::MAX_INTEGER_LENGTH {
        i64::MIN
    } else {
        -(pow10(length) - 1)
    };
    Ok(entropy.next_i64_range(lower, upper))
}

/// Generates a uniformly random integer in `[min, max]` inclusive.
///
/// # Errors
///
/// Returns `GeneratorError::Order` if `min > max`.
pub fn integer_between(
    entropy: &mut dyn EntropySource,
    min: i64,
    max: i64,
) -> Result<i64, GeneratorError> {
    if min > max {
        return Err(GeneratorError::Order);
    }
    trace!(min, max, "generating integer in range");

    Ok(entropy.next_i64_range(min, max))
}
