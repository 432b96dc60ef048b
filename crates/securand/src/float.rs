//! Precision-bounded and range-constrained fractional float generation.
//!
//! A fraction is built by sampling a positive integer whose digit count
//! equals the target precision, then reading its decimal digits as the
//! fractional part of a number in (0, 1). Because the sampled integer
//! never has a leading zero, the result is never exactly zero.

use securand_core::entropy::EntropySource;
use securand_core::error::GeneratorError;
use tracing::trace;

use crate::bounds;
use crate::integer;

/// Rounds half away from zero to `digits` decimal places.
#[allow(clippy::cast_precision_loss)]
fn round_to(value: f64, digits: u32) -> f64 {
    let scale = integer::pow10(digits) as f64;
    (value * scale).round() / scale
}

/// Samples a fraction in (0, 1) with exactly `fractional_digits` of
/// precision. The caller has already validated `fractional_digits`.
#[allow(clippy::cast_precision_loss)]
fn sample_fraction(
    entropy: &mut dyn EntropySource,
    fractional_digits: u32,
) -> Result<f64, GeneratorError> {
    let digits = integer::positive_integer(entropy, fractional_digits)?;
    let magnitude = digits as f64 / integer::pow10(fractional_digits) as f64;
    Ok(round_to(magnitude, fractional_digits))
}

/// Generates a random fraction in (0, 1) with `fractional_digits` decimal
/// places of precision.
///
/// # Errors
///
/// Returns `GeneratorError::Range` if `fractional_digits` is outside
/// `[1, 14]`.
pub fn positive_float(
    entropy: &mut dyn EntropySource,
    fractional_digits: u32,
) -> Result<f64, GeneratorError> {
    bounds::check_fractional_digits(fractional_digits)?;
    trace!(fractional_digits, "generating positive float");

    sample_fraction(entropy, fractional_digits)
}

/// Generates a random fraction in (-1, 0) with `fractional_digits` decimal
/// places of precision.
///
/// # Errors
///
/// Returns `GeneratorError::Range` if `fractional_digits` is outside
/// `[1, 14]`.
pub fn negative_float(
    entropy: &mut dyn EntropySource,
    fractional_digits: u32,
) -> Result<f64, GeneratorError> {
    bounds::check_fractional_digits(fractional_digits)?;
    trace!(fractional_digits, "generating negative float");

    Ok(-sample_fraction(entropy, fractional_digits)?)
}

/// Generates a random fraction in (-1, 1), excluding zero, with
/// `fractional_digits` decimal places of precision.
///
/// The magnitude is drawn first, then the sign from one unbiased coin
/// flip.
///
/// # Errors
///
/// Returns `GeneratorError::Range` if `fractional_digits` is outside
/// `[1, 14]`.
pub fn float(
    entropy: &mut dyn EntropySource,
    fractional_digits: u32,
) -> Result<f64, GeneratorError> {
    bounds::check_fractional_digits(fractional_digits)?;
    trace!(fractional_digits, "generating signed float");

    let magnitude = sample_fraction(entropy, fractional_digits)?;
    if entropy.next_i64_range(0, 1) == 0 {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Parses a `"0.d...d"` bound into its fractional digits right-padded
/// with zeros to 14 places.
#[allow(clippy::cast_possible_truncation)]
fn parse_bound(bound: &str) -> Result<i64, GeneratorError> {
    let out_of_domain = GeneratorError::Range(bounds::FLOAT_RANGE_MESSAGE);
    if bound.len() > 16 {
        return Err(out_of_domain);
    }
    let fraction = bound.strip_prefix("0.").ok_or(out_of_domain)?;
    if fraction.is_empty() || fraction.starts_with('0') {
        return Err(out_of_domain);
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(out_of_domain);
    }
    let parsed: i64 = fraction.parse().map_err(|_| out_of_domain)?;
    Ok(parsed * integer::pow10(bounds::MAX_FRACTIONAL_DIGITS - fraction.len() as u32))
}

/// Generates a random fraction between two decimal-string bounds.
///
/// `min` and `max` must be of the form `"0.d...d"` with a non-zero first
/// fractional digit and at most 14 fractional digits. Both are right-padded
/// with zeros to 14 digits and compared as plain integers; an integer is
/// then drawn uniformly between them. The result is the drawn integer
/// divided by ten to the power of its own digit count, so the result's
/// place value follows the draw rather than a fixed precision.
///
/// # Errors
///
/// Returns `GeneratorError::Range` if either bound is malformed or outside
/// the `0.1` – `0.99999999999999` domain, and `GeneratorError::Order` if
/// `min` exceeds `max` after padding.
#[allow(clippy::cast_precision_loss)]
pub fn float_between(
    entropy: &mut dyn EntropySource,
    min: &str,
    max: &str,
) -> Result<f64, GeneratorError> {
    let int_min = parse_bound(min)?;
    let int_max = parse_bound(max)?;
    if int_min > int_max {
        return Err(GeneratorError::Order);
    }
    trace!(min, max, "generating float in range");

    let sampled = entropy.next_i64_range(int_min, int_max);
    // The divisor tracks the sampled integer's digit count, not the
    // nominal 14-digit precision.
    let width = integer::digit_count(sampled);
    Ok(sampled as f64 / integer::pow10(width) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use securand_test_support::{MinimumEntropy, RecordingEntropy, SequenceEntropy};

    // --- rounding tests ---

    #[test]
    fn test_round_to_rounds_half_away_from_zero() {
        assert!((round_to(0.25, 1) - 0.3).abs() < 1e-12);
        assert!((round_to(-0.25, 1) + 0.3).abs() < 1e-12);
        assert!((round_to(0.123_456, 3) - 0.123).abs() < 1e-12);
    }

    // --- positive_float tests ---

    #[test]
    fn test_positive_float_reads_digits_as_fraction() {
        let mut entropy = SequenceEntropy::from_ints(vec![123]);
        let value = positive_float(&mut entropy, 3).unwrap();

        assert!((value - 0.123).abs() < 1e-12);
    }

    #[test]
    fn test_positive_float_single_digit_precision() {
        let mut entropy = SequenceEntropy::from_ints(vec![9]);
        assert!((positive_float(&mut entropy, 1).unwrap() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_positive_float_samples_at_requested_precision() {
        let mut entropy = RecordingEntropy::new();
        positive_float(&mut entropy, 4).unwrap();

        // One draw, bounded to exactly four digits.
        assert_eq!(entropy.calls(), &[(1_000, 9_999)]);
    }

    #[test]
    fn test_positive_float_rejects_out_of_range_precision() {
        let mut entropy = MinimumEntropy;
        assert!(matches!(
            positive_float(&mut entropy, 0),
            Err(GeneratorError::Range(_))
        ));
        assert!(matches!(
            positive_float(&mut entropy, 15),
            Err(GeneratorError::Range(_))
        ));
    }

    // --- negative_float tests ---

    #[test]
    fn test_negative_float_negates_the_sampled_fraction() {
        let mut entropy = SequenceEntropy::from_ints(vec![5]);
        assert!((negative_float(&mut entropy, 1).unwrap() + 0.5).abs() < 1e-12);
    }

    // --- float tests ---

    #[test]
    fn test_float_coin_flip_zero_yields_negative() {
        let mut entropy = SequenceEntropy::from_ints(vec![123, 0]);
        let value = float(&mut entropy, 3).unwrap();

        assert!((value + 0.123).abs() < 1e-12);
    }

    #[test]
    fn test_float_coin_flip_one_yields_positive() {
        let mut entropy = SequenceEntropy::from_ints(vec![123, 1]);
        let value = float(&mut entropy, 3).unwrap();

        assert!((value - 0.123).abs() < 1e-12);
    }

    #[test]
    fn test_float_draws_magnitude_before_sign() {
        let mut entropy = RecordingEntropy::new();
        float(&mut entropy, 2).unwrap();

        assert_eq!(entropy.calls(), &[(10, 99), (0, 1)]);
    }

    // --- float_between tests ---

    #[test]
    fn test_float_between_pads_bounds_to_fourteen_digits() {
        let mut entropy = RecordingEntropy::new();
        let value = float_between(&mut entropy, "0.2", "0.8").unwrap();

        assert_eq!(
            entropy.calls(),
            &[(20_000_000_000_000, 80_000_000_000_000)]
        );
        assert!((value - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_float_between_returns_sampled_midpoint() {
        let mut entropy = SequenceEntropy::from_ints(vec![50_000_000_000_000]);
        let value = float_between(&mut entropy, "0.25", "0.75").unwrap();

        assert!((value - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_float_between_scales_by_sampled_digit_count() {
        // A three-digit draw is divided by 10^3, not 10^14.
        let mut entropy = SequenceEntropy::from_ints(vec![999]);
        let value = float_between(&mut entropy, "0.1", "0.9").unwrap();

        assert!((value - 0.999).abs() < 1e-12);
    }

    #[test]
    fn test_float_between_accepts_domain_boundaries() {
        let mut entropy = MinimumEntropy;
        let value = float_between(&mut entropy, "0.1", "0.99999999999999").unwrap();

        assert!((value - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_float_between_rejects_inverted_bounds_before_sampling() {
        let mut entropy = RecordingEntropy::new();
        let result = float_between(&mut entropy, "0.13", "0.12");

        assert_eq!(result, Err(GeneratorError::Order));
        assert!(entropy.calls().is_empty());
    }

    #[test]
    fn test_float_between_rejects_bounds_without_zero_dot_prefix() {
        let mut entropy = MinimumEntropy;
        assert!(matches!(
            float_between(&mut entropy, "1", "2.1"),
            Err(GeneratorError::Range(_))
        ));
        assert!(matches!(
            float_between(&mut entropy, ".5", "0.9"),
            Err(GeneratorError::Range(_))
        ));
    }

    #[test]
    fn test_float_between_rejects_leading_zero_fraction() {
        let mut entropy = MinimumEntropy;
        assert!(matches!(
            float_between(&mut entropy, "0.05", "0.5"),
            Err(GeneratorError::Range(_))
        ));
    }

    #[test]
    fn test_float_between_rejects_overlong_bounds() {
        // 15 fractional digits, 17 characters printed.
        let mut entropy = MinimumEntropy;
        assert!(matches!(
            float_between(&mut entropy, "0.123456789012345", "0.9"),
            Err(GeneratorError::Range(_))
        ));
    }

    #[test]
    fn test_float_between_rejects_non_digit_fraction() {
        let mut entropy = MinimumEntropy;
        assert!(matches!(
            float_between(&mut entropy, "0.12a", "0.9"),
            Err(GeneratorError::Range(_))
        ));
        assert!(matches!(
            float_between(&mut entropy, "0.", "0.9"),
            Err(GeneratorError::Range(_))
        ));
    }
}
