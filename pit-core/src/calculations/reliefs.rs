//! Capital-gains threshold and the capped reliefs.
//!
//! Each function applies one rule from [`TaxRules`] and knows nothing about
//! the others. [`relief_breakdown`] combines them for a full [`TaxInput`].

use rust_decimal::Decimal;

use crate::calculations::common::{max, min};
use crate::{ReliefBreakdown, TaxInput, TaxRules};

/// Gain on shares that enters gross income.
///
/// A loss counts as no gain. Below the threshold the gain is exempt; at or
/// above it the entire gain is taxable, not only the excess.
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::TaxRules;
/// use pit_core::calculations::reliefs::taxable_capital_gains;
///
/// let rules = TaxRules::nigeria_2026();
/// assert_eq!(taxable_capital_gains(&rules, dec!(0), dec!(9999999)), dec!(0));
/// assert_eq!(taxable_capital_gains(&rules, dec!(0), dec!(10000000)), dec!(10000000));
/// ```
pub fn taxable_capital_gains(
    rules: &TaxRules,
    initial_cost: Decimal,
    proceeds: Decimal,
) -> Decimal {
    let gain = max(Decimal::ZERO, proceeds - initial_cost);
    if gain >= rules.capital_gains_threshold {
        gain
    } else {
        Decimal::ZERO
    }
}

/// A fixed share of rent paid, up to the cap.
///
/// # Arguments
///
/// * `rules` - Supplies `rent_relief_rate` (20%) and `rent_relief_cap` (₦500,000)
/// * `rent_paid` - Annual rent paid on the taxpayer's residence
///
/// # Returns
///
/// `min(rent_paid * rate, cap)`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::TaxRules;
/// use pit_core::calculations::reliefs::rent_relief;
///
/// let rules = TaxRules::nigeria_2026();
/// assert_eq!(rent_relief(&rules, dec!(1200000)), dec!(240000));
/// assert_eq!(rent_relief(&rules, dec!(10000000)), dec!(500000));
/// ```
pub fn rent_relief(
    rules: &TaxRules,
    rent_paid: Decimal,
) -> Decimal {
    min(rent_paid * rules.rent_relief_rate, rules.rent_relief_cap)
}

/// Pension contributions, capped at a share of basic salary plus the
/// primary employment allowances. "Other allowances" are not part of the base.
///
/// # Arguments
///
/// * `rules` - Supplies `pension_relief_rate` (8%)
/// * `pension_paid` - Contributions actually made
/// * `basic_salary` - Annual basic salary
/// * `employment_allowances` - The primary allowances line only
///
/// # Returns
///
/// `min(pension_paid, (basic_salary + employment_allowances) * rate)`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::TaxRules;
/// use pit_core::calculations::reliefs::pension_relief;
///
/// let rules = TaxRules::nigeria_2026();
/// assert_eq!(
///     pension_relief(&rules, dec!(900000), dec!(3000000), dec!(1000000)),
///     dec!(320000)
/// );
/// ```
pub fn pension_relief(
    rules: &TaxRules,
    pension_paid: Decimal,
    basic_salary: Decimal,
    employment_allowances: Decimal,
) -> Decimal {
    min(
        pension_paid,
        (basic_salary + employment_allowances) * rules.pension_relief_rate,
    )
}

/// National Housing Fund contributions, capped at a share of basic salary.
///
/// # Arguments
///
/// * `rules` - Supplies `nhf_relief_rate` (2.5%)
/// * `nhf_paid` - Contributions actually made
/// * `basic_salary` - Annual basic salary; allowances do not count
///
/// # Returns
///
/// `min(nhf_paid, basic_salary * rate)`.
pub fn nhf_relief(
    rules: &TaxRules,
    nhf_paid: Decimal,
    basic_salary: Decimal,
) -> Decimal {
    min(nhf_paid, basic_salary * rules.nhf_relief_rate)
}

/// Compensation for loss of employment above the threshold.
///
/// # Arguments
///
/// * `rules` - Supplies `loss_of_job_threshold` (₦50,000,000)
/// * `compensation` - Total compensation received for loss of office
///
/// # Returns
///
/// The excess over the threshold, or zero when the compensation is below it.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::TaxRules;
/// use pit_core::calculations::reliefs::loss_of_job_relief;
///
/// let rules = TaxRules::nigeria_2026();
/// assert_eq!(loss_of_job_relief(&rules, dec!(60000000)), dec!(10000000));
/// assert_eq!(loss_of_job_relief(&rules, dec!(49999999)), dec!(0));
/// ```
pub fn loss_of_job_relief(
    rules: &TaxRules,
    compensation: Decimal,
) -> Decimal {
    if compensation >= rules.loss_of_job_threshold {
        compensation - rules.loss_of_job_threshold
    } else {
        Decimal::ZERO
    }
}

/// Every relief for `input`. NHIS, mortgage interest, life insurance and
/// gratuity pass through uncapped.
pub fn relief_breakdown(
    rules: &TaxRules,
    input: &TaxInput,
) -> ReliefBreakdown {
    ReliefBreakdown {
        rent: rent_relief(rules, input.rent_paid),
        pension: pension_relief(
            rules,
            input.pension_paid,
            input.basic_salary,
            input.employment_allowances,
        ),
        nhf: nhf_relief(rules, input.nhf_paid, input.basic_salary),
        nhis: input.nhis_paid,
        mortgage_interest: input.mortgage_interest,
        life_insurance: input.life_insurance_paid,
        gratuity: input.gratuity_received,
        loss_of_job: loss_of_job_relief(rules, input.loss_of_job_compensation),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn rules() -> TaxRules {
        TaxRules::nigeria_2026()
    }

    // =========================================================================
    // taxable_capital_gains tests
    // =========================================================================

    #[test]
    fn capital_gains_below_threshold_are_exempt() {
        let result = taxable_capital_gains(&rules(), dec!(1000000), dec!(10999999));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn capital_gains_at_threshold_are_taxable_in_full() {
        let result = taxable_capital_gains(&rules(), dec!(1000000), dec!(11000000));

        assert_eq!(result, dec!(10000000));
    }

    #[test]
    fn capital_gains_above_threshold_include_the_exempt_portion() {
        let result = taxable_capital_gains(&rules(), dec!(5000000), dec!(20000000));

        assert_eq!(result, dec!(15000000));
    }

    #[test]
    fn capital_loss_counts_as_zero() {
        let result = taxable_capital_gains(&rules(), dec!(30000000), dec!(1000000));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // rent_relief tests
    // =========================================================================

    #[test]
    fn rent_relief_is_twenty_percent_below_cap() {
        assert_eq!(rent_relief(&rules(), dec!(1200000)), dec!(240000));
    }

    #[test]
    fn rent_relief_is_capped() {
        assert_eq!(rent_relief(&rules(), dec!(10000000)), dec!(500000));
    }

    #[test]
    fn rent_relief_reaches_cap_exactly() {
        assert_eq!(rent_relief(&rules(), dec!(2500000)), dec!(500000));
    }

    // =========================================================================
    // pension_relief tests
    // =========================================================================

    #[test]
    fn pension_relief_allows_contribution_under_cap() {
        let result = pension_relief(&rules(), dec!(200000), dec!(3000000), dec!(1000000));

        assert_eq!(result, dec!(200000));
    }

    #[test]
    fn pension_relief_caps_at_eight_percent_of_basic_and_allowances() {
        let result = pension_relief(&rules(), dec!(900000), dec!(3000000), dec!(1000000));

        assert_eq!(result, dec!(320000));
    }

    // =========================================================================
    // nhf_relief tests
    // =========================================================================

    #[test]
    fn nhf_relief_caps_at_basic_salary_share() {
        assert_eq!(nhf_relief(&rules(), dec!(200000), dec!(4000000)), dec!(100000));
    }

    #[test]
    fn nhf_relief_allows_contribution_under_cap() {
        assert_eq!(nhf_relief(&rules(), dec!(50000), dec!(4000000)), dec!(50000));
    }

    // =========================================================================
    // loss_of_job_relief tests
    // =========================================================================

    #[test]
    fn loss_of_job_relief_is_zero_below_threshold() {
        assert_eq!(loss_of_job_relief(&rules(), dec!(49999999)), dec!(0));
    }

    #[test]
    fn loss_of_job_relief_is_zero_at_threshold() {
        assert_eq!(loss_of_job_relief(&rules(), dec!(50000000)), dec!(0));
    }

    #[test]
    fn loss_of_job_relief_is_the_excess_above_threshold() {
        assert_eq!(loss_of_job_relief(&rules(), dec!(60000000)), dec!(10000000));
    }

    // =========================================================================
    // relief_breakdown tests
    // =========================================================================

    #[test]
    fn relief_breakdown_passes_uncapped_items_through() {
        let input = TaxInput {
            nhis_paid: dec!(75000),
            mortgage_interest: dec!(1500000),
            life_insurance_paid: dec!(120000),
            gratuity_received: dec!(2000000),
            ..TaxInput::default()
        };

        let reliefs = relief_breakdown(&rules(), &input);

        assert_eq!(
            reliefs,
            ReliefBreakdown {
                nhis: dec!(75000),
                mortgage_interest: dec!(1500000),
                life_insurance: dec!(120000),
                gratuity: dec!(2000000),
                ..ReliefBreakdown::default()
            }
        );
        assert_eq!(reliefs.total(), dec!(3695000));
    }
}
