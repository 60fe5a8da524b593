//! Small decimal helpers shared by the relief and band calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to kobo (two decimal places), halves away from zero.
///
/// The engine itself never rounds; this is for presenting results.
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(41666.666)), dec!(41666.67));
/// assert_eq!(round_half_up(dec!(0.005)), dec!(0.01));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two values.
///
/// Used as the floor in `max(0, ..)` for capital gains and taxable income.
///
/// # Arguments
///
/// * `a` - First value
/// * `b` - Second value
///
/// # Returns
///
/// `a` when it is strictly greater, otherwise `b`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::common::max;
///
/// assert_eq!(max(dec!(0), dec!(-250000)), dec!(0));
/// assert_eq!(max(dec!(3800000), dec!(0)), dec!(3800000));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the smaller of two values.
///
/// Every capped relief is `min(claimed, cap)`.
///
/// # Arguments
///
/// * `a` - First value
/// * `b` - Second value
///
/// # Returns
///
/// `a` when it is strictly smaller, otherwise `b`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::common::min;
///
/// assert_eq!(min(dec!(2000000), dec!(500000)), dec!(500000));
/// assert_eq!(min(dec!(-5), dec!(0)), dec!(-5));
/// ```
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_monthly_thirds() {
        // 500,000 / 12
        let result = round_half_up(dec!(500000) / dec!(12));

        assert_eq!(result, dec!(41666.67));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_rounds_negative_midpoint_away_from_zero() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }

    #[test]
    fn round_half_up_keeps_whole_naira() {
        assert_eq!(round_half_up(dec!(474000)), dec!(474000.00));
    }

    // =========================================================================
    // max / min tests
    // =========================================================================

    #[test]
    fn max_picks_larger() {
        assert_eq!(max(dec!(100), dec!(200)), dec!(200));
        assert_eq!(max(dec!(200), dec!(100)), dec!(200));
    }

    #[test]
    fn max_floors_negative_at_zero() {
        assert_eq!(max(dec!(-1), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn min_picks_smaller() {
        assert_eq!(min(dec!(2000000), dec!(500000)), dec!(500000));
        assert_eq!(min(dec!(-5), dec!(0)), dec!(-5));
    }

    #[test]
    fn min_handles_equal_values() {
        assert_eq!(min(dec!(150), dec!(150)), dec!(150));
    }
}
