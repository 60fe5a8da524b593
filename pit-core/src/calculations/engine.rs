//! Nigerian personal income tax computation.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | a    | Taxable capital gains (all-or-nothing at the threshold) |
//! | b    | Gross worldwide income (employment + investment + gains) |
//! | c    | Reliefs, each capped on its own |
//! | d    | Taxable income (b - c, minimum 0) |
//! | e    | Tax due from the progressive bands |
//! | f    | Prepaid taxes (PAYE and withholding credits) |
//! | g    | Liability (e - f, signed) and its monthly share |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::{TaxInput, compute_tax};
//!
//! let input = TaxInput {
//!     basic_salary: dec!(3800000),
//!     paye_withheld: dec!(500000),
//!     ..TaxInput::default()
//! };
//!
//! let result = compute_tax(&input);
//!
//! assert_eq!(result.taxable_income, dec!(3800000));
//! assert_eq!(result.tax_due, dec!(474000));
//! assert_eq!(result.tax_liability, dec!(-26000));
//! assert!(result.is_credit());
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::bands::progressive_tax;
use crate::calculations::common::max;
use crate::calculations::reliefs::{relief_breakdown, taxable_capital_gains};
use crate::{TaxInput, TaxResult, TaxRules};

/// Computes the estimate under the 2026 rules.
pub fn compute_tax(input: &TaxInput) -> TaxResult {
    TaxEngine::new(&TaxRules::nigeria_2026()).calculate(input)
}

/// Applies a [`TaxRules`] set to declaration inputs.
#[derive(Debug, Clone)]
pub struct TaxEngine<'a> {
    rules: &'a TaxRules,
}

impl<'a> TaxEngine<'a> {
    pub fn new(rules: &'a TaxRules) -> Self {
        Self { rules }
    }

    /// Runs every step and returns the full result.
    ///
    /// Negative amounts flow through arithmetically. Every amount must be
    /// within `±`[`TaxInput::MAX_AMOUNT`]; beyond that the sums can overflow
    /// `Decimal` and panic.
    pub fn calculate(
        &self,
        input: &TaxInput,
    ) -> TaxResult {
        let taxable_capital_gains = taxable_capital_gains(
            self.rules,
            input.initial_cost_of_shares,
            input.shares_disposed_proceeds,
        );

        let gross_worldwide_income = self.employment_income(input)
            + self.investment_income(input)
            + taxable_capital_gains;

        let reliefs = relief_breakdown(self.rules, input);
        let total_deductions = reliefs.total();

        let taxable_income = self.taxable_income(gross_worldwide_income, total_deductions);

        let (tax_due, brackets) = progressive_tax(&self.rules.bands, taxable_income);

        let total_prepaid_taxes = self.prepaid_taxes(input);
        let tax_liability = tax_due - total_prepaid_taxes;
        let monthly_tax = tax_liability / Decimal::from(12);

        debug!(
            %gross_worldwide_income,
            %total_deductions,
            %taxable_income,
            %tax_due,
            %tax_liability,
            bands = brackets.len(),
            "computed personal income tax"
        );

        TaxResult {
            gross_worldwide_income,
            taxable_capital_gains,
            reliefs,
            total_deductions,
            taxable_income,
            tax_due,
            total_prepaid_taxes,
            tax_liability,
            monthly_tax,
            brackets,
        }
    }

    fn employment_income(
        &self,
        input: &TaxInput,
    ) -> Decimal {
        input.basic_salary
            + input.employment_allowances
            + input.other_employment_allowances
            + input.benefits_in_kind
            + input.gratuity_received
            + input.loss_of_job_compensation
            + input.salary_arrears
            + input.bonus_commission
            + input.notice_pay
    }

    fn investment_income(
        &self,
        input: &TaxInput,
    ) -> Decimal {
        input.net_trading_income
            + input.gross_rental_income
            + input.gross_dividend_received
            + input.gross_interest_received
            + input.virtual_digital_earnings
            + input.gross_foreign_income
            + input.other_income
    }

    fn taxable_income(
        &self,
        gross_income: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        max(Decimal::ZERO, gross_income - total_deductions)
    }

    fn prepaid_taxes(
        &self,
        input: &TaxInput,
    ) -> Decimal {
        input.paye_withheld
            + input.wht_dividend
            + input.wht_interest
            + input.wht_rent
            + input.other_prepaid_tax
            + input.foreign_tax_prepaid
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn engine_rules() -> TaxRules {
        TaxRules::nigeria_2026()
    }

    // =========================================================================
    // employment_income / investment_income tests
    // =========================================================================

    #[test]
    fn employment_income_sums_all_nine_items() {
        let rules = engine_rules();
        let engine = TaxEngine::new(&rules);
        let input = TaxInput {
            basic_salary: dec!(1),
            employment_allowances: dec!(2),
            other_employment_allowances: dec!(4),
            benefits_in_kind: dec!(8),
            gratuity_received: dec!(16),
            loss_of_job_compensation: dec!(32),
            salary_arrears: dec!(64),
            bonus_commission: dec!(128),
            notice_pay: dec!(256),
            other_income: dec!(1000),
            ..TaxInput::default()
        };

        assert_eq!(engine.employment_income(&input), dec!(511));
    }

    #[test]
    fn investment_income_sums_all_seven_items() {
        let rules = engine_rules();
        let engine = TaxEngine::new(&rules);
        let input = TaxInput {
            net_trading_income: dec!(1),
            gross_rental_income: dec!(2),
            gross_dividend_received: dec!(4),
            gross_interest_received: dec!(8),
            virtual_digital_earnings: dec!(16),
            gross_foreign_income: dec!(32),
            other_income: dec!(64),
            basic_salary: dec!(1000),
            ..TaxInput::default()
        };

        assert_eq!(engine.investment_income(&input), dec!(127));
    }

    // =========================================================================
    // taxable_income tests
    // =========================================================================

    #[test]
    fn taxable_income_subtracts_deductions() {
        let rules = engine_rules();
        let engine = TaxEngine::new(&rules);

        assert_eq!(engine.taxable_income(dec!(5000000), dec!(700000)), dec!(4300000));
    }

    #[test]
    fn taxable_income_floors_at_zero() {
        let rules = engine_rules();
        let engine = TaxEngine::new(&rules);

        assert_eq!(engine.taxable_income(dec!(100000), dec!(700000)), dec!(0));
    }

    // =========================================================================
    // prepaid_taxes tests
    // =========================================================================

    #[test]
    fn prepaid_taxes_sum_all_credits_uncapped() {
        let rules = engine_rules();
        let engine = TaxEngine::new(&rules);
        let input = TaxInput {
            paye_withheld: dec!(900000),
            wht_dividend: dec!(10000),
            wht_interest: dec!(20000),
            wht_rent: dec!(30000),
            other_prepaid_tax: dec!(40000),
            foreign_tax_prepaid: dec!(50000000),
            ..TaxInput::default()
        };

        assert_eq!(engine.prepaid_taxes(&input), dec!(51000000));
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_combines_every_step() {
        let rules = engine_rules();
        let engine = TaxEngine::new(&rules);
        let input = TaxInput {
            basic_salary: dec!(6000000),
            employment_allowances: dec!(2000000),
            other_employment_allowances: dec!(500000),
            gross_dividend_received: dec!(500000),
            initial_cost_of_shares: dec!(2000000),
            shares_disposed_proceeds: dec!(5000000),
            rent_paid: dec!(1500000),
            pension_paid: dec!(800000),
            nhf_paid: dec!(150000),
            nhis_paid: dec!(50000),
            paye_withheld: dec!(1000000),
            wht_dividend: dec!(50000),
            ..TaxInput::default()
        };

        let result = engine.calculate(&input);

        // Gain of 3,000,000 is under the threshold.
        assert_eq!(result.taxable_capital_gains, dec!(0));
        assert_eq!(result.gross_worldwide_income, dec!(9000000));
        // rent 300,000 + pension 640,000 + nhf 150,000 + nhis 50,000
        assert_eq!(result.total_deductions, dec!(1140000));
        assert_eq!(result.taxable_income, dec!(7860000));
        // 330,000 + 4,860,000 * 0.18
        assert_eq!(result.tax_due, dec!(1204800));
        assert_eq!(result.total_prepaid_taxes, dec!(1050000));
        assert_eq!(result.tax_liability, dec!(154800));
        assert_eq!(result.monthly_tax, dec!(12900));
        assert!(!result.is_credit());
    }

    #[test]
    fn calculate_reports_credit_when_prepaid_exceeds_tax() {
        let rules = engine_rules();
        let engine = TaxEngine::new(&rules);
        let input = TaxInput {
            basic_salary: dec!(800000),
            paye_withheld: dec!(120000),
            ..TaxInput::default()
        };

        let result = engine.calculate(&input);

        assert_eq!(result.tax_due, dec!(0));
        assert_eq!(result.tax_liability, dec!(-120000));
        assert_eq!(result.monthly_tax, dec!(-10000));
        assert!(result.is_credit());
    }

    #[test]
    fn calculate_uses_supplied_rules() {
        let mut rules = engine_rules();
        rules.rent_relief_cap = dec!(100000);
        let engine = TaxEngine::new(&rules);
        let input = TaxInput {
            rent_paid: dec!(10000000),
            ..TaxInput::default()
        };

        let result = engine.calculate(&input);

        assert_eq!(result.reliefs.rent, dec!(100000));
    }
}
