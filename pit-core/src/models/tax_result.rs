use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portion of taxable income falling inside one progressive band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketResult {
    pub label: String,
    pub amount: Decimal,
    pub rate: Decimal,
    pub tax: Decimal,
}

/// Each relief as allowed after its cap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefBreakdown {
    pub rent: Decimal,
    pub pension: Decimal,
    pub nhf: Decimal,
    pub nhis: Decimal,
    pub mortgage_interest: Decimal,
    pub life_insurance: Decimal,
    pub gratuity: Decimal,
    pub loss_of_job: Decimal,
}

impl ReliefBreakdown {
    pub fn total(&self) -> Decimal {
        self.rent
            + self.pension
            + self.nhf
            + self.nhis
            + self.mortgage_interest
            + self.life_insurance
            + self.gratuity
            + self.loss_of_job
    }
}

/// Outcome of a personal income tax computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub gross_worldwide_income: Decimal,

    /// Share-disposal gain included in gross income (zero below the threshold).
    pub taxable_capital_gains: Decimal,

    pub reliefs: ReliefBreakdown,
    pub total_deductions: Decimal,

    /// Gross income less deductions, never below zero.
    pub taxable_income: Decimal,

    pub tax_due: Decimal,
    pub total_prepaid_taxes: Decimal,

    /// Tax due less prepaid taxes. Negative means a refundable credit.
    pub tax_liability: Decimal,

    /// `tax_liability / 12`, signed like the liability.
    pub monthly_tax: Decimal,

    /// Contributing bands only, lowest first.
    pub brackets: Vec<BracketResult>,
}

impl TaxResult {
    pub fn is_credit(&self) -> bool {
        self.tax_liability < Decimal::ZERO
    }
}
