//! Progressive band computation.

use rust_decimal::Decimal;

use crate::calculations::common::{max, min};
use crate::{BracketResult, TaxBand};

/// Taxes `taxable_income` band by band.
///
/// Each band takes `clamp(taxable_income - floor, 0, width)` where `floor`
/// is the sum of the widths below it. Returns the total tax and a
/// [`BracketResult`] for every band that received a positive amount, in
/// band order.
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::TaxRules;
/// use pit_core::calculations::bands::progressive_tax;
///
/// let rules = TaxRules::nigeria_2026();
/// let (tax, brackets) = progressive_tax(&rules.bands, dec!(3800000));
///
/// assert_eq!(tax, dec!(474000));
/// assert_eq!(brackets.len(), 3);
/// ```
pub fn progressive_tax(
    bands: &[TaxBand],
    taxable_income: Decimal,
) -> (Decimal, Vec<BracketResult>) {
    let mut floor = Decimal::ZERO;
    let mut tax_due = Decimal::ZERO;
    let mut brackets = Vec::new();

    for band in bands {
        let above_floor = max(Decimal::ZERO, taxable_income - floor);
        let amount = match band.width {
            Some(width) => min(above_floor, width),
            None => above_floor,
        };
        let tax = amount * band.rate;
        tax_due += tax;

        if amount > Decimal::ZERO {
            brackets.push(BracketResult {
                label: band.label.clone(),
                amount,
                rate: band.rate,
                tax,
            });
        }

        match band.width {
            Some(width) => floor += width,
            None => break,
        }
    }

    (tax_due, brackets)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::TaxRules;

    fn bands() -> Vec<TaxBand> {
        TaxRules::nigeria_2026().bands
    }

    fn tax_for(income: Decimal) -> Decimal {
        progressive_tax(&bands(), income).0
    }

    #[test]
    fn zero_income_yields_no_brackets() {
        let (tax, brackets) = progressive_tax(&bands(), dec!(0));

        assert_eq!(tax, dec!(0));
        assert!(brackets.is_empty());
    }

    #[test]
    fn first_band_is_tax_free() {
        let (tax, brackets) = progressive_tax(&bands(), dec!(800000));

        assert_eq!(tax, dec!(0));
        assert_eq!(
            brackets,
            vec![BracketResult {
                label: "₦0 - ₦800,000".to_string(),
                amount: dec!(800000),
                rate: dec!(0),
                tax: dec!(0),
            }]
        );
    }

    #[test]
    fn income_spanning_three_bands() {
        let (tax, brackets) = progressive_tax(&bands(), dec!(3800000));

        assert_eq!(tax, dec!(474000));
        let amounts: Vec<Decimal> = brackets.iter().map(|b| b.amount).collect();
        assert_eq!(amounts, vec![dec!(800000), dec!(2200000), dec!(800000)]);
        let taxes: Vec<Decimal> = brackets.iter().map(|b| b.tax).collect();
        assert_eq!(taxes, vec![dec!(0), dec!(330000), dec!(144000)]);
    }

    #[test]
    fn cumulative_tax_at_each_threshold() {
        assert_eq!(tax_for(dec!(3000000)), dec!(330000));
        assert_eq!(tax_for(dec!(12000000)), dec!(1950000));
        assert_eq!(tax_for(dec!(25000000)), dec!(4680000));
        assert_eq!(tax_for(dec!(50000000)), dec!(10430000));
    }

    #[test]
    fn top_band_is_unbounded() {
        let (tax, brackets) = progressive_tax(&bands(), dec!(150000000));

        // 10,430,000 + 100,000,000 * 0.25
        assert_eq!(tax, dec!(35430000));
        assert_eq!(brackets.len(), 6);
        assert_eq!(brackets[5].label, "Above ₦50,000,000");
        assert_eq!(brackets[5].amount, dec!(100000000));
    }

    #[test]
    fn fractional_income_lands_in_next_band() {
        let (tax, brackets) = progressive_tax(&bands(), dec!(800000.50));

        assert_eq!(brackets.len(), 2);
        assert_eq!(brackets[1].amount, dec!(0.50));
        assert_eq!(tax, dec!(0.075));
    }

    #[test]
    fn negative_income_contributes_nothing() {
        let (tax, brackets) = progressive_tax(&bands(), dec!(-1000));

        assert_eq!(tax, dec!(0));
        assert!(brackets.is_empty());
    }
}
