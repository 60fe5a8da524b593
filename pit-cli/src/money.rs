use pit_core::calculations::common::round_half_up;
use rust_decimal::Decimal;

/// Inserts `,` every three digits from the right of a run of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats an amount as naira with kobo, e.g. `₦1,234,567.50` or `-₦26,000.00`.
pub fn format_naira(amount: Decimal) -> String {
    let mut rounded = round_half_up(amount.abs());
    rounded.rescale(2);

    let text = rounded.to_string();
    let (whole, kobo) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if amount < Decimal::ZERO && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{sign}₦{}.{kobo}", group_thousands(whole))
}

/// Formats a rate as a whole percentage, e.g. `0.15` as `15%`.
pub fn format_rate(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED).round_dp(0);
    format!("{}%", percent.normalize())
}
