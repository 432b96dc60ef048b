//! Bound constants and shared range validation.
//!
//! Every generation operation that takes a length or precision parameter
//! runs one of these checks before any entropy is consumed.

use securand_core::error::GeneratorError;

/// Minimum byte-buffer or string length.
pub const MIN_STRING_LENGTH: usize = 1;
/// Maximum byte-buffer or string length.
pub const MAX_STRING_LENGTH: usize = 64;
/// Minimum decimal digit count for length-bounded integers.
pub const MIN_INTEGER_LENGTH: u32 = 1;
/// Maximum decimal digit count for length-bounded integers.
pub const MAX_INTEGER_LENGTH: u32 = 19;
/// Minimum fractional digit count for precision-bounded floats.
pub const MIN_FRACTIONAL_DIGITS: u32 = 1;
/// Maximum fractional digit count for precision-bounded floats.
pub const MAX_FRACTIONAL_DIGITS: u32 = 14;

/// Number of source bytes drawn for every string generation, independent
/// of the requested output length.
pub const BYTE_LENGTH: usize = 64;

/// Conventional byte-buffer and string length when the caller has no
/// preference.
pub const DEFAULT_BYTE_LENGTH: usize = 64;
/// Conventional digit count for length-bounded integers.
pub const DEFAULT_INTEGER_LENGTH: u32 = 19;
/// Conventional precision for fractional floats.
pub const DEFAULT_FRACTIONAL_DIGITS: u32 = 14;

pub(crate) const STRING_LENGTH_MESSAGE: &str =
    "the value of `length` must be between 1 and 64";
pub(crate) const INTEGER_LENGTH_MESSAGE: &str =
    "the value of `length` must be between 1 and 19";
pub(crate) const FRACTIONAL_DIGITS_MESSAGE: &str =
    "the value of `fractional_digits` must be between 1 and 14";
pub(crate) const FLOAT_RANGE_MESSAGE: &str =
    "the value of `min` and `max` must be between 0.1 and 0.99999999999999";

pub(crate) fn check_string_length(length: usize) -> Result<(), GeneratorError> {
    if (MIN_STRING_LENGTH..=MAX_STRING_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(GeneratorError::Range(STRING_LENGTH_MESSAGE))
    }
}

pub(crate) fn check_integer_length(length: u32) -> Result<(), GeneratorError> {
    if (MIN_INTEGER_LENGTH..=MAX_INTEGER_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(GeneratorError::Range(INTEGER_LENGTH_MESSAGE))
    }
}

pub(crate) fn check_fractional_digits(digits: u32) -> Result<(), GeneratorError> {
    if (MIN_FRACTIONAL_DIGITS..=MAX_FRACTIONAL_DIGITS).contains(&digits) {
        Ok(())
    } else {
        Err(GeneratorError::Range(FRACTIONAL_DIGITS_MESSAGE))
    }
}
