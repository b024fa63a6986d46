//! Numeric helpers shared by extraction and formatting

/// Tolerance used when deciding whether a computed value is a whole number
pub const WHOLE_NUMBER_ACCURACY: f64 = 0.0001;

/// Largest integer an `f64` represents exactly
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// Whether `value` is within `tolerance` of its nearest integer.
///
/// With a tolerance of zero only exactly integral values are whole.
pub fn is_whole(value: f64, tolerance: f64) -> bool {
    (value - value.round()).abs() <= tolerance
}

/// Smallest number of decimal places, at most `max_places`, needed to write
/// `value` rounded to `max_places` without trailing zeros.
///
/// `24.998` with two places rounds to `25.00`, so it needs none.
pub fn decimal_places_no_final_zeros(value: f64, max_places: u32) -> u32 {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }

    let value = value.abs();
    let mut places = max_places;
    // beyond 2^53 the scaled value has no fractional digits left to inspect
    while places > 0 && value * 10f64.powi(places as i32) >= MAX_EXACT_F64 {
        places -= 1;
    }

    let mut scaled = (value * 10f64.powi(places as i32)).round() as u64;
    if scaled == 0 {
        return 0;
    }
    while places > 0 && scaled % 10 == 0 {
        scaled /= 10;
        places -= 1;
    }
    places
}

/// Integer exponentiation with `0^0 = 1`; wraps on overflow
pub fn long_pow(base: i64, exponent: u32) -> i64 {
    base.wrapping_pow(exponent)
}

/// Round half away from zero: `0.5 → 1`, `-0.5 → -1`
pub fn round_to_long(value: f64) -> i64 {
    value.round() as i64
}

/// Lazy iterator over base-`modulus` digit groups, least significant first.
///
/// Stops once the remaining value is zero, so `0` yields nothing. Negative
/// numbers yield non-positive groups.
#[derive(Debug, Clone)]
pub struct SplitByModulus {
    remaining: i64,
    modulus: i64,
}

impl Iterator for SplitByModulus {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let group = self.remaining % self.modulus;
        self.remaining /= self.modulus;
        Some(group)
    }
}

/// Split `number` into base-`modulus` groups.
///
/// # Panics
///
/// If `modulus` is below 2, since the sequence would never terminate.
pub fn split_by_modulus(number: i64, modulus: i64) -> SplitByModulus {
    assert!(modulus >= 2, "split modulus must be at least 2, got {modulus}");
    SplitByModulus {
        remaining: number,
        modulus,
    }
}

/// `whole + numerator / denominator`, with the sign kept apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedFraction {
    pub negative: bool,
    pub whole: i64,
    pub numerator: i64,
    pub denominator: i64,
}

impl MixedFraction {
    /// Find the smallest denominator up to `max_denominator` that represents
    /// `value` within [`WHOLE_NUMBER_ACCURACY`].
    pub fn of(value: f64, max_denominator: i64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let magnitude = value.abs();

        for denominator in 1..=max_denominator {
            let scaled = magnitude * denominator as f64;
            if scaled >= MAX_EXACT_F64 {
                return None;
            }
            if is_whole(scaled, WHOLE_NUMBER_ACCURACY) {
                let total = round_to_long(scaled);
                return Some(Self {
                    negative: value < 0.0 && total != 0,
                    whole: total / denominator,
                    numerator: total % denominator,
                    denominator,
                });
            }
        }
        None
    }

    pub fn is_whole(&self) -> bool {
        self.numerator == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0000001)]
    #[case(-0.0, 0.0000001)]
    #[case(5.0, 0.0000001)]
    #[case(5.1, 0.11)]
    #[case(0.1, 0.11)]
    #[case(-0.1, 0.11)]
    #[case(5.000001, WHOLE_NUMBER_ACCURACY)]
    #[case(30000.99991, WHOLE_NUMBER_ACCURACY)]
    #[case(0.0000001, WHOLE_NUMBER_ACCURACY)]
    #[case(0.0, 0.0)]
    #[case(-0.0, 0.0)]
    #[case(5.0, 0.0)]
    fn test_is_whole(#[case] value: f64, #[case] tolerance: f64) {
        assert!(is_whole(value, tolerance), "{value} ± {tolerance}");
    }

    #[rstest]
    #[case(0.5, WHOLE_NUMBER_ACCURACY)]
    #[case(31.0 / 7.0, WHOLE_NUMBER_ACCURACY)]
    #[case(0.001, WHOLE_NUMBER_ACCURACY)]
    #[case(0.89999, 0.1)]
    #[case(8.89999, 0.1)]
    #[case(5.000001, 0.0)]
    fn test_is_not_whole(#[case] value: f64, #[case] tolerance: f64) {
        assert!(!is_whole(value, tolerance), "{value} ± {tolerance}");
    }

    #[rstest]
    #[case(0.22912, 2, 2)]
    #[case(90.10293, 8, 5)]
    #[case(4.9980, 3, 3)]
    #[case(24.9980, 2, 0)]
    #[case(16.0, 800, 0)]
    #[case(0.0, 200, 0)]
    #[case(-0.0, 400, 0)]
    #[case(-16.0, 400, 0)]
    #[case(-0.75, 5, 2)]
    fn test_decimal_places_no_final_zeros(
        #[case] value: f64,
        #[case] max_places: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(decimal_places_no_final_zeros(value, max_places), expected);
    }

    #[rstest]
    #[case(1_000_000, 0, 1)]
    #[case(0, 0, 1)]
    #[case(0, 10_000, 0)]
    #[case(1, 10_000, 1)]
    #[case(1000, 3, 1_000_000_000)]
    #[case(10, 9, 1_000_000_000)]
    #[case(100, 5, 10_000_000_000)]
    fn test_long_pow(#[case] base: i64, #[case] exponent: u32, #[case] expected: i64) {
        assert_eq!(long_pow(base, exponent), expected);
    }

    #[rstest]
    #[case(5.0, 5)]
    #[case(2.4, 2)]
    #[case(10.6, 11)]
    #[case(0.5, 1)]
    #[case(-5.0, -5)]
    #[case(-2.4, -2)]
    #[case(-10.6, -11)]
    #[case(-0.5, -1)]
    fn test_round_to_long(#[case] value: f64, #[case] expected: i64) {
        assert_eq!(round_to_long(value), expected);
    }

    #[rstest]
    #[case(0, 10, vec![])]
    #[case(0, 1_000_000, vec![])]
    #[case(10, 1_000_000, vec![10])]
    #[case(1234, 10, vec![4, 3, 2, 1])]
    #[case(101_220_300_040, 1000, vec![40, 300, 220, 101])]
    #[case(100_001, 100, vec![1, 0, 10])]
    fn test_split_by_modulus(#[case] number: i64, #[case] modulus: i64, #[case] expected: Vec<i64>) {
        assert_eq!(split_by_modulus(number, modulus).collect::<Vec<_>>(), expected);
    }

    #[test]
    #[should_panic]
    fn test_split_by_modulus_rejects_small_modulus() {
        let _ = split_by_modulus(10, 1);
    }

    #[test]
    fn test_mixed_fraction() {
        assert_eq!(
            MixedFraction::of(5.75, 20),
            Some(MixedFraction {
                negative: false,
                whole: 5,
                numerator: 3,
                denominator: 4
            })
        );
        assert_eq!(
            MixedFraction::of(-0.5, 20),
            Some(MixedFraction {
                negative: true,
                whole: 0,
                numerator: 1,
                denominator: 2
            })
        );
        assert!(MixedFraction::of(7.0, 20).is_some_and(|f| f.is_whole()));
        assert_eq!(MixedFraction::of(0.123456, 20), None);
    }

    proptest! {
        #[test]
        fn prop_split_by_modulus_reconstructs(number in 0i64..i64::MAX, modulus in 2i64..100_000) {
            let mut rebuilt: i128 = 0;
            let mut weight: i128 = 1;
            for group in split_by_modulus(number, modulus) {
                prop_assert!((0..modulus).contains(&group));
                rebuilt += group as i128 * weight;
                weight *= modulus as i128;
            }
            prop_assert_eq!(rebuilt, number as i128);
        }

        #[test]
        fn prop_integers_are_whole(value in -1_000_000i64..1_000_000) {
            prop_assert!(is_whole(value as f64, 0.0));
        }
    }
}
