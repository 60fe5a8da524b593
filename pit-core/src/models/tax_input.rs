use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::InputField;

/// Annual amounts entered on the declaration form.
///
/// Every field defaults to zero. Values are taken as entered: nothing here
/// rejects or clamps negative amounts.
///
/// Each amount is expected to lie within `±`[`TaxInput::MAX_AMOUNT`]. Inside
/// that range no step of the computation can overflow `Decimal`; the
/// `pit-data` loaders refuse anything larger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxInput {
    // Employment income
    pub basic_salary: Decimal,
    pub employment_allowances: Decimal,
    pub other_employment_allowances: Decimal,
    pub benefits_in_kind: Decimal,
    pub gratuity_received: Decimal,
    pub loss_of_job_compensation: Decimal,
    pub salary_arrears: Decimal,
    pub bonus_commission: Decimal,
    pub notice_pay: Decimal,

    // Investment and other income
    pub net_trading_income: Decimal,
    pub gross_rental_income: Decimal,
    pub gross_dividend_received: Decimal,
    pub gross_interest_received: Decimal,
    pub virtual_digital_earnings: Decimal,
    pub gross_foreign_income: Decimal,
    pub other_income: Decimal,

    // Capital gains on shares
    pub initial_cost_of_shares: Decimal,
    pub shares_disposed_proceeds: Decimal,

    // Deductions
    pub rent_paid: Decimal,
    pub pension_paid: Decimal,
    pub nhf_paid: Decimal,
    pub nhis_paid: Decimal,
    pub mortgage_interest: Decimal,
    pub life_insurance_paid: Decimal,

    // Prepaid taxes
    pub paye_withheld: Decimal,
    pub wht_dividend: Decimal,
    pub wht_interest: Decimal,
    pub wht_rent: Decimal,
    pub other_prepaid_tax: Decimal,
    pub foreign_tax_prepaid: Decimal,
}

impl TaxInput {
    /// Largest accepted magnitude for a single amount: ₦10^24.
    pub const MAX_AMOUNT: Decimal =
        Decimal::from_parts(2_701_131_776, 466_537_709, 54_210, false, 0);

    /// True when `amount` is within `±MAX_AMOUNT`.
    pub fn amount_in_range(amount: Decimal) -> bool {
        amount.abs() <= Self::MAX_AMOUNT
    }

    pub fn get(
        &self,
        field: InputField,
    ) -> Decimal {
        match field {
            InputField::BasicSalary => self.basic_salary,
            InputField::EmploymentAllowances => self.employment_allowances,
            InputField::OtherEmploymentAllowances => self.other_employment_allowances,
            InputField::BenefitsInKind => self.benefits_in_kind,
            InputField::GratuityReceived => self.gratuity_received,
            InputField::LossOfJobCompensation => self.loss_of_job_compensation,
            InputField::SalaryArrears => self.salary_arrears,
            InputField::BonusCommission => self.bonus_commission,
            InputField::NoticePay => self.notice_pay,
            InputField::NetTradingIncome => self.net_trading_income,
            InputField::GrossRentalIncome => self.gross_rental_income,
            InputField::GrossDividendReceived => self.gross_dividend_received,
            InputField::GrossInterestReceived => self.gross_interest_received,
            InputField::VirtualDigitalEarnings => self.virtual_digital_earnings,
            InputField::GrossForeignIncome => self.gross_foreign_income,
            InputField::OtherIncome => self.other_income,
            InputField::InitialCostOfShares => self.initial_cost_of_shares,
            InputField::SharesDisposedProceeds => self.shares_disposed_proceeds,
            InputField::RentPaid => self.rent_paid,
            InputField::PensionPaid => self.pension_paid,
            InputField::NhfPaid => self.nhf_paid,
            InputField::NhisPaid => self.nhis_paid,
            InputField::MortgageInterest => self.mortgage_interest,
            InputField::LifeInsurancePaid => self.life_insurance_paid,
            InputField::PayeWithheld => self.paye_withheld,
            InputField::WhtDividend => self.wht_dividend,
            InputField::WhtInterest => self.wht_interest,
            InputField::WhtRent => self.wht_rent,
            InputField::OtherPrepaidTax => self.other_prepaid_tax,
            InputField::ForeignTaxPrepaid => self.foreign_tax_prepaid,
        }
    }

    pub fn set(
        &mut self,
        field: InputField,
        amount: Decimal,
    ) {
        *self.slot(field) = amount;
    }

    fn slot(
        &mut self,
        field: InputField,
    ) -> &mut Decimal {
        match field {
            InputField::BasicSalary => &mut self.basic_salary,
            InputField::EmploymentAllowances => &mut self.employment_allowances,
            InputField::OtherEmploymentAllowances => &mut self.other_employment_allowances,
            InputField::BenefitsInKind => &mut self.benefits_in_kind,
            InputField::GratuityReceived => &mut self.gratuity_received,
            InputField::LossOfJobCompensation => &mut self.loss_of_job_compensation,
            InputField::SalaryArrears => &mut self.salary_arrears,
            InputField::BonusCommission => &mut self.bonus_commission,
            InputField::NoticePay => &mut self.notice_pay,
            InputField::NetTradingIncome => &mut self.net_trading_income,
            InputField::GrossRentalIncome => &mut self.gross_rental_income,
            InputField::GrossDividendReceived => &mut self.gross_dividend_received,
            InputField::GrossInterestReceived => &mut self.gross_interest_received,
            InputField::VirtualDigitalEarnings => &mut self.virtual_digital_earnings,
            InputField::GrossForeignIncome => &mut self.gross_foreign_income,
            InputField::OtherIncome => &mut self.other_income,
            InputField::InitialCostOfShares => &mut self.initial_cost_of_shares,
            InputField::SharesDisposedProceeds => &mut self.shares_disposed_proceeds,
            InputField::RentPaid => &mut self.rent_paid,
            InputField::PensionPaid => &mut self.pension_paid,
            InputField::NhfPaid => &mut self.nhf_paid,
            InputField::NhisPaid => &mut self.nhis_paid,
            InputField::MortgageInterest => &mut self.mortgage_interest,
            InputField::LifeInsurancePaid => &mut self.life_insurance_paid,
            InputField::PayeWithheld => &mut self.paye_withheld,
            InputField::WhtDividend => &mut self.wht_dividend,
            InputField::WhtInterest => &mut self.wht_interest,
            InputField::WhtRent => &mut self.wht_rent,
            InputField::OtherPrepaidTax => &mut self.other_prepaid_tax,
            InputField::ForeignTaxPrepaid => &mut self.foreign_tax_prepaid,
        }
    }

    /// Builder-style variant of [`TaxInput::set`].
    pub fn with(
        mut self,
        field: InputField,
        amount: Decimal,
    ) -> Self {
        self.set(field, amount);
        self
    }
}
