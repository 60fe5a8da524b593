use serde::{Deserialize, Serialize};

/// Section of the declaration form a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputGroup {
    Employment,
    Investment,
    CapitalGains,
    Deductions,
    PrepaidTaxes,
}

impl InputGroup {
    pub const ALL: [InputGroup; 5] = [
        Self::Employment,
        Self::Investment,
        Self::CapitalGains,
        Self::Deductions,
        Self::PrepaidTaxes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employment => "employment",
            Self::Investment => "investment",
            Self::CapitalGains => "capital_gains",
            Self::Deductions => "deductions",
            Self::PrepaidTaxes => "prepaid_taxes",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == s)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Employment => "Employment Income",
            Self::Investment => "Investment & Other Income",
            Self::CapitalGains => "Capital Gains",
            Self::Deductions => "Allowable Deductions",
            Self::PrepaidTaxes => "Prepaid Taxes",
        }
    }
}

/// Names one amount of a [`TaxInput`](crate::TaxInput).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    BasicSalary,
    EmploymentAllowances,
    OtherEmploymentAllowances,
    BenefitsInKind,
    GratuityReceived,
    LossOfJobCompensation,
    SalaryArrears,
    BonusCommission,
    NoticePay,
    NetTradingIncome,
    GrossRentalIncome,
    GrossDividendReceived,
    GrossInterestReceived,
    VirtualDigitalEarnings,
    GrossForeignIncome,
    OtherIncome,
    InitialCostOfShares,
    SharesDisposedProceeds,
    RentPaid,
    PensionPaid,
    NhfPaid,
    NhisPaid,
    MortgageInterest,
    LifeInsurancePaid,
    PayeWithheld,
    WhtDividend,
    WhtInterest,
    WhtRent,
    OtherPrepaidTax,
    ForeignTaxPrepaid,
}

impl InputField {
    /// Every field, in declaration-form order.
    pub const ALL: [InputField; 30] = [
        Self::BasicSalary,
        Self::EmploymentAllowances,
        Self::OtherEmploymentAllowances,
        Self::BenefitsInKind,
        Self::GratuityReceived,
        Self::LossOfJobCompensation,
        Self::SalaryArrears,
        Self::BonusCommission,
        Self::NoticePay,
        Self::NetTradingIncome,
        Self::GrossRentalIncome,
        Self::GrossDividendReceived,
        Self::GrossInterestReceived,
        Self::VirtualDigitalEarnings,
        Self::GrossForeignIncome,
        Self::OtherIncome,
        Self::InitialCostOfShares,
        Self::SharesDisposedProceeds,
        Self::RentPaid,
        Self::PensionPaid,
        Self::NhfPaid,
        Self::NhisPaid,
        Self::MortgageInterest,
        Self::LifeInsurancePaid,
        Self::PayeWithheld,
        Self::WhtDividend,
        Self::WhtInterest,
        Self::WhtRent,
        Self::OtherPrepaidTax,
        Self::ForeignTaxPrepaid,
    ];

    /// The snake_case key used in input files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BasicSalary => "basic_salary",
            Self::EmploymentAllowances => "employment_allowances",
            Self::OtherEmploymentAllowances => "other_employment_allowances",
            Self::BenefitsInKind => "benefits_in_kind",
            Self::GratuityReceived => "gratuity_received",
            Self::LossOfJobCompensation => "loss_of_job_compensation",
            Self::SalaryArrears => "salary_arrears",
            Self::BonusCommission => "bonus_commission",
            Self::NoticePay => "notice_pay",
            Self::NetTradingIncome => "net_trading_income",
            Self::GrossRentalIncome => "gross_rental_income",
            Self::GrossDividendReceived => "gross_dividend_received",
            Self::GrossInterestReceived => "gross_interest_received",
            Self::VirtualDigitalEarnings => "virtual_digital_earnings",
            Self::GrossForeignIncome => "gross_foreign_income",
            Self::OtherIncome => "other_income",
            Self::InitialCostOfShares => "initial_cost_of_shares",
            Self::SharesDisposedProceeds => "shares_disposed_proceeds",
            Self::RentPaid => "rent_paid",
            Self::PensionPaid => "pension_paid",
            Self::NhfPaid => "nhf_paid",
            Self::NhisPaid => "nhis_paid",
            Self::MortgageInterest => "mortgage_interest",
            Self::LifeInsurancePaid => "life_insurance_paid",
            Self::PayeWithheld => "paye_withheld",
            Self::WhtDividend => "wht_dividend",
            Self::WhtInterest => "wht_interest",
            Self::WhtRent => "wht_rent",
            Self::OtherPrepaidTax => "other_prepaid_tax",
            Self::ForeignTaxPrepaid => "foreign_tax_prepaid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    /// Human-readable label as shown on the declaration form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BasicSalary => "Annual Basic Salary",
            Self::EmploymentAllowances => "Employment Allowances",
            Self::OtherEmploymentAllowances => "Other Allowances",
            Self::BenefitsInKind => "Benefits in Kind",
            Self::GratuityReceived => "Annual Pension Income / Gratuity",
            Self::LossOfJobCompensation => "Job Compensation",
            Self::SalaryArrears => "Salary Arrears",
            Self::BonusCommission => "Bonus / Commission",
            Self::NoticePay => "Notice Pay",
            Self::NetTradingIncome => "Net Trading Income",
            Self::GrossRentalIncome => "Gross Rental Income",
            Self::GrossDividendReceived => "Gross Dividend",
            Self::GrossInterestReceived => "Gross Interest",
            Self::VirtualDigitalEarnings => "Digital Earnings (Crypto/NFT)",
            Self::GrossForeignIncome => "Gross Foreign Income",
            Self::OtherIncome => "Other Income",
            Self::InitialCostOfShares => "Cost of Shares Disposed",
            Self::SharesDisposedProceeds => "Proceeds from Shares",
            Self::RentPaid => "Rent Paid",
            Self::PensionPaid => "Pension Contribution",
            Self::NhfPaid => "NHF Paid",
            Self::NhisPaid => "NHIS Paid",
            Self::MortgageInterest => "Mortgage Interest",
            Self::LifeInsurancePaid => "Life Insurance",
            Self::PayeWithheld => "PAYE Withheld",
            Self::WhtDividend => "WHT on Dividend",
            Self::WhtInterest => "WHT on Interest",
            Self::WhtRent => "WHT on Rent",
            Self::OtherPrepaidTax => "Other Prepaid Tax",
            Self::ForeignTaxPrepaid => "Foreign Tax Prepaid",
        }
    }

    pub fn group(&self) -> InputGroup {
        match self {
            Self::BasicSalary
            | Self::EmploymentAllowances
            | Self::OtherEmploymentAllowances
            | Self::BenefitsInKind
            | Self::GratuityReceived
            | Self::LossOfJobCompensation
            | Self::SalaryArrears
            | Self::BonusCommission
            | Self::NoticePay => InputGroup::Employment,
            Self::NetTradingIncome
            | Self::GrossRentalIncome
            | Self::GrossDividendReceived
            | Self::GrossInterestReceived
            | Self::VirtualDigitalEarnings
            | Self::GrossForeignIncome
            | Self::OtherIncome => InputGroup::Investment,
            Self::InitialCostOfShares | Self::SharesDisposedProceeds => InputGroup::CapitalGains,
            Self::RentPaid
            | Self::PensionPaid
            | Self::NhfPaid
            | Self::NhisPaid
            | Self::MortgageInterest
            | Self::LifeInsurancePaid => InputGroup::Deductions,
            Self::PayeWithheld
            | Self::WhtDividend
            | Self::WhtInterest
            | Self::WhtRent
            | Self::OtherPrepaidTax
            | Self::ForeignTaxPrepaid => InputGroup::PrepaidTaxes,
        }
    }

    /// Fields belonging to `group`, in form order.
    pub fn in_group(group: InputGroup) -> impl Iterator<Item = InputField> {
        Self::ALL.into_iter().filter(move |f| f.group() == group)
    }
}
