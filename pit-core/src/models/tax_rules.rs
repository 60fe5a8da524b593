use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of the progressive schedule.
///
/// Bands are defined by width, applied cumulatively from the lowest band.
/// `width == None` marks the open-ended top band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    pub label: String,
    pub width: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBand {
    fn new(
        label: &str,
        width: Option<i64>,
        rate_percent: i64,
    ) -> Self {
        Self {
            label: label.to_string(),
            width: width.map(Decimal::from),
            rate: Decimal::new(rate_percent, 2),
        }
    }
}

/// Statutory constants for a personal income tax computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRules {
    /// Gains at or above this amount are taxable in full; below it, exempt.
    pub capital_gains_threshold: Decimal,
    pub rent_relief_rate: Decimal,
    pub rent_relief_cap: Decimal,
    /// Applied to basic salary plus employment allowances.
    pub pension_relief_rate: Decimal,
    /// Applied to basic salary.
    pub nhf_relief_rate: Decimal,
    /// Compensation above this amount is relieved.
    pub loss_of_job_threshold: Decimal,
    pub bands: Vec<TaxBand>,
}

impl TaxRules {
    /// Rules for the 2026 Nigerian PIT year.
    pub fn nigeria_2026() -> Self {
        Self {
            capital_gains_threshold: Decimal::from(10_000_000),
            rent_relief_rate: Decimal::new(20, 2),
            rent_relief_cap: Decimal::from(500_000),
            pension_relief_rate: Decimal::new(8, 2),
            nhf_relief_rate: Decimal::new(25, 3),
            loss_of_job_threshold: Decimal::from(50_000_000),
            bands: vec![
                TaxBand::new("₦0 - ₦800,000", Some(800_000), 0),
                TaxBand::new("₦800,001 - ₦3,000,000", Some(2_200_000), 15),
                TaxBand::new("₦3,000,001 - ₦12,000,000", Some(9_000_000), 18),
                TaxBand::new("₦12,000,001 - ₦25,000,000", Some(13_000_000), 21),
                TaxBand::new("₦25,000,001 - ₦50,000,000", Some(25_000_000), 23),
                TaxBand::new("Above ₦50,000,000", None, 25),
            ],
        }
    }
}

impl Default for TaxRules {
    fn default() -> Self {
        Self::nigeria_2026()
    }
}
