//! Raw random byte buffers.

use securand_core::entropy::EntropySource;
use securand_core::error::GeneratorError;
use tracing::trace;

use crate::bounds;

/// Generates a fresh buffer of `length` uniformly random bytes.
///
/// # Errors
///
/// Returns `GeneratorError::Range` if `length` is outside `[1, 64]`.
pub fn bytes(entropy: &mut dyn EntropySource, length: usize) -> Result<Vec<u8>, GeneratorError> {
    bounds::check_string_length(length)?;
    trace!(length, "generating random bytes");

    let mut buffer = vec![0u8; length];
    entropy.fill_bytes(&mut buffer);
    Ok(buffer)
}
