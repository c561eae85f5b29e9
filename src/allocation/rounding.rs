//! Rounding policies for unit rates.
//!
//! Two independent policies exist because the estimate generator went
//! through several reconciliation strategies: "beautiful" rounding produces
//! visually round display rates, and round-up-to-10 never understates a rate
//! (favoring the payee). Both are pure and total for non-negative inputs;
//! behavior for negative input is out of contract.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to a visually "beautiful" number.
///
/// The rounding step scales with magnitude: below 10 the value is rounded to
/// the nearest integer, below 100 to the nearest 10, below 1000 to the
/// nearest 50, and from 1000 up to the nearest 100. Midpoints round away
/// from zero. Monotonic but lossy.
///
/// # Examples
///
/// ```
/// use estimate_engine::allocation::round_to_beautiful;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_beautiful(Decimal::from(7)), Decimal::from(7));
/// assert_eq!(round_to_beautiful(Decimal::from(47)), Decimal::from(50));
/// assert_eq!(round_to_beautiful(Decimal::from(470)), Decimal::from(450));
/// assert_eq!(round_to_beautiful(Decimal::from_str("1234.5").unwrap()), Decimal::from(1200));
/// ```
pub fn round_to_beautiful(value: Decimal) -> Decimal {
    if value < Decimal::from(10) {
        round_to_step(value, Decimal::ONE)
    } else if value < Decimal::from(100) {
        round_to_step(value, Decimal::from(10))
    } else if value < Decimal::from(1000) {
        round_to_step(value, Decimal::from(50))
    } else {
        round_to_step(value, Decimal::from(100))
    }
}

/// Rounds a value up to the next multiple of 10.
///
/// Never returns less than the input; values already on a multiple of 10 are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use estimate_engine::allocation::round_up_to_10;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_up_to_10(Decimal::from(1001)), Decimal::from(1010));
/// assert_eq!(round_up_to_10(Decimal::from(1010)), Decimal::from(1010));
/// ```
pub fn round_up_to_10(value: Decimal) -> Decimal {
    let ten = Decimal::from(10);
    (value / ten).ceil() * ten
}

/// Rounds to the nearest multiple of `step`, midpoints away from zero.
fn round_to_step(value: Decimal, step: Decimal) -> Decimal {
    (value / step).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_beautiful_below_ten_rounds_to_integer() {
        assert_eq!(round_to_beautiful(dec("7")), dec("7"));
        assert_eq!(round_to_beautiful(dec("7.4")), dec("7"));
        assert_eq!(round_to_beautiful(dec("7.5")), dec("8"));
    }

    #[test]
    fn test_beautiful_tens_band_rounds_to_ten() {
        assert_eq!(round_to_beautiful(dec("47")), dec("50"));
        assert_eq!(round_to_beautiful(dec("44")), dec("40"));
        assert_eq!(round_to_beautiful(dec("95")), dec("100"));
    }

    #[test]
    fn test_beautiful_hundreds_band_rounds_to_fifty() {
        assert_eq!(round_to_beautiful(dec("470")), dec("450"));
        assert_eq!(round_to_beautiful(dec("475")), dec("500"));
        assert_eq!(round_to_beautiful(dec("130")), dec("150"));
    }

    #[test]
    fn test_beautiful_thousands_band_rounds_to_hundred() {
        assert_eq!(round_to_beautiful(dec("1458.33")), dec("1500"));
        assert_eq!(round_to_beautiful(dec("1049")), dec("1000"));
    }

    #[test]
    fn test_beautiful_band_boundaries() {
        assert_eq!(round_to_beautiful(dec("10")), dec("10"));
        assert_eq!(round_to_beautiful(dec("100")), dec("100"));
        assert_eq!(round_to_beautiful(dec("1000")), dec("1000"));
    }

    #[test]
    fn test_round_up_to_10_just_above_multiple() {
        assert_eq!(round_up_to_10(dec("1001")), dec("1010"));
        assert_eq!(round_up_to_10(dec("1005")), dec("1010"));
    }

    #[test]
    fn test_round_up_to_10_exact_multiple_unchanged() {
        assert_eq!(round_up_to_10(dec("1010")), dec("1010"));
        assert_eq!(round_up_to_10(dec("0")), dec("0"));
    }

    #[test]
    fn test_round_up_to_10_never_below_input() {
        for s in ["0.01", "3", "9.99", "10", "123.45", "99999.1"] {
            let v = dec(s);
            assert!(round_up_to_10(v) >= v, "rounded below input for {}", s);
        }
    }
}
