//! Hexadecimal and alphanumeric string generation.
//!
//! Both generators draw a full 64-byte buffer regardless of the requested
//! output length, encode it once, and truncate. Generating exactly
//! `length` characters directly would change the character distribution.

use base64::Engine;
use base64::engine::general_purpose;
use securand_core::entropy::EntropySource;
use securand_core::error::GeneratorError;
use tracing::trace;

use crate::bounds;
use crate::bytes;

/// Generates a lowercase hexadecimal string of exactly `length` characters.
///
/// # Errors
///
/// Returns `GeneratorError::Range` if `length` is outside `[1, 64]`.
pub fn hexadecimal_string(
    entropy: &mut dyn EntropySource,
    length: usize,
) -> Result<String, GeneratorError> {
    bounds::check_string_length(length)?;
    trace!(length, "generating hexadecimal string");

    let buffer = bytes::bytes(entropy, bounds::BYTE_LENGTH)?;
    let mut encoded = hex::encode(buffer);
    encoded.truncate(length);
    Ok(encoded)
}

/// Generates a mixed-case alphanumeric string of exactly `length`
/// characters.
///
/// The source buffer is base64-encoded, the `+`, `/` and `=` symbols are
/// stripped, and the remainder is truncated to `length`.
///
/// # Errors
///
/// Returns `GeneratorError::Range` if `length` is outside `[1, 64]`.
pub fn alphanumeric_string(
    entropy: &mut dyn EntropySource,
    length: usize,
) -> Result<String, GeneratorError> {
    bounds::check_string_length(length)?;
    trace!(length, "generating alphanumeric string");

    let buffer = bytes::bytes(entropy, bounds::BYTE_LENGTH)?;
    let mut filtered: String = general_purpose::STANDARD
        .encode(buffer)
        .chars()
        .filter(|c| !matches!(c, '+' | '/' | '='))
        .collect();
    filtered.truncate(length);
    Ok(filtered)
}
