//! Terminal renderings of a [`TaxResult`] and of the reference tables.

use std::fmt::Write;

use anyhow::Result;
use pit_core::calculations::common::max;
use pit_core::{InputField, InputGroup, TaxResult, TaxRules};
use rust_decimal::Decimal;

use crate::money::{format_naira, format_rate};

const LABEL_WIDTH: usize = 34;
const AMOUNT_WIDTH: usize = 20;
const BAND_WIDTH: usize = 28;

fn summary_line(
    out: &mut String,
    label: &str,
    amount: Decimal,
) {
    let _ = writeln!(
        out,
        "{label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
        format_naira(amount)
    );
}

fn relief_lines(result: &TaxResult) -> [(&'static str, Decimal); 8] {
    let r = &result.reliefs;
    [
        ("  Rent relief", r.rent),
        ("  Pension relief", r.pension),
        ("  NHF relief", r.nhf),
        ("  NHIS", r.nhis),
        ("  Mortgage interest", r.mortgage_interest),
        ("  Life insurance", r.life_insurance),
        ("  Gratuity", r.gratuity),
        ("  Loss of job relief", r.loss_of_job),
    ]
}

/// Heading for the liability line; the amount shown beside it is absolute.
pub fn liability_label(result: &TaxResult) -> &'static str {
    if result.is_credit() {
        "Tax Credit (Refundable)"
    } else {
        "Tax Liability (Payable)"
    }
}

/// The monthly figure actually payable: never below zero.
pub fn monthly_payment(result: &TaxResult) -> Decimal {
    max(Decimal::ZERO, result.monthly_tax)
}

/// Renders the summary and the bracket breakdown as plain text.
pub fn render_text(result: &TaxResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Nigerian Personal Income Tax Estimate (2026)");
    let _ = writeln!(out);

    summary_line(&mut out, "Gross Worldwide Income", result.gross_worldwide_income);
    if !result.taxable_capital_gains.is_zero() {
        summary_line(&mut out, "  incl. capital gains", result.taxable_capital_gains);
    }
    summary_line(&mut out, "Total Deductions", result.total_deductions);
    for (label, amount) in relief_lines(result) {
        if !amount.is_zero() {
            summary_line(&mut out, label, amount);
        }
    }
    summary_line(&mut out, "Taxable Income", result.taxable_income);
    summary_line(&mut out, "Tax Due", result.tax_due);
    summary_line(&mut out, "Prepaid Taxes", result.total_prepaid_taxes);
    summary_line(&mut out, liability_label(result), result.tax_liability.abs());
    summary_line(&mut out, "Estimated Monthly Tax Payment", monthly_payment(result));

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<BAND_WIDTH$}{:>AMOUNT_WIDTH$}{:>6}{:>AMOUNT_WIDTH$}",
        "Tax Bracket", "Income in Bracket", "Rate", "Tax Amount"
    );
    for bracket in &result.brackets {
        let _ = writeln!(
            out,
            "{:<BAND_WIDTH$}{:>AMOUNT_WIDTH$}{:>6}{:>AMOUNT_WIDTH$}",
            bracket.label,
            format_naira(bracket.amount),
            format_rate(bracket.rate),
            format_naira(bracket.tax)
        );
    }
    let _ = writeln!(
        out,
        "{:<width$}{:>AMOUNT_WIDTH$}",
        "Total Tax Due",
        format_naira(result.tax_due),
        width = BAND_WIDTH + AMOUNT_WIDTH + 6
    );

    out
}

/// Serializes the raw result.
pub fn render_json(result: &TaxResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Lists the accepted input keys, grouped by form section.
pub fn render_fields() -> String {
    let mut out = String::new();
    for group in InputGroup::ALL {
        let _ = writeln!(out, "[{}]  {}", group.as_str(), group.title());
        for field in InputField::in_group(group) {
            let _ = writeln!(out, "  {:<30}{}", field.as_str(), field.label());
        }
        let _ = writeln!(out);
    }
    out
}

/// Renders the progressive band table of `rules`.
pub fn render_bands(rules: &TaxRules) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<BAND_WIDTH$}{:>AMOUNT_WIDTH$}{:>6}",
        "Band", "Width", "Rate"
    );
    for band in &rules.bands {
        let width = band
            .width
            .map(format_naira)
            .unwrap_or_else(|| "unbounded".to_string());
        let _ = writeln!(
            out,
            "{:<BAND_WIDTH$}{:>AMOUNT_WIDTH$}{:>6}",
            band.label,
            width,
            format_rate(band.rate)
        );
    }
    out
}
