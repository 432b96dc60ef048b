//! RFC 4122 version-4 UUID construction.

use ::uuid::Uuid;
use securand_core::entropy::EntropySource;
use tracing::trace;

/// Generates a version-4 UUID from 16 fresh random bytes.
///
/// Octet 6 is the high byte of `time_hi_and_version` and octet 8 is
/// `clock_seq_and_reserved`; the version nibble (`0100`) and variant bits
/// (`10`) are forced onto them before formatting. The `Display` form is
/// the lowercase hyphenated `xxxxxxxx-xxxx-4xxx-[89ab]xxx-xxxxxxxxxxxx`.
pub fn uuid(entropy: &mut dyn EntropySource) -> Uuid {
    trace!("generating v4 uuid");

    let mut octets = [0u8; 16];
    entropy.fill_bytes(&mut octets);
    // Version nibble: top four bits of time_hi_and_version become 0100.
    octets[6] = (octets[6] & 0x0f) | 0x40;
    // Variant: top two bits of clock_seq_and_reserved become 10.
    octets[8] = (octets[8] & 0x3f) | 0x80;
    Uuid::from_bytes(octets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use securand_test_support::SequenceEntropy;

    #[test]
    fn test_uuid_forces_version_and_variant_on_all_ones() {
        let mut entropy = SequenceEntropy::from_bytes(vec![0xFF; 16]);
        let value = uuid(&mut entropy);

        assert_eq!(value.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    }

    #[test]
    fn test_uuid_forces_version_and_variant_on_all_zeros() {
        let mut entropy = SequenceEntropy::from_bytes(vec![0x00; 16]);
        let value = uuid(&mut entropy);

        assert_eq!(value.to_string(), "00000000-0000-4000-8000-000000000000");
    }

    #[test]
    fn test_uuid_preserves_remaining_random_octets() {
        let source: Vec<u8> = (1..=16).collect();
        let mut entropy = SequenceEntropy::from_bytes(source);
        let value = uuid(&mut entropy);

        // Octets 6 and 8 are stamped; everything else passes through.
        assert_eq!(value.to_string(), "01020304-0506-4708-890a-0b0c0d0e0f10");
    }
}
