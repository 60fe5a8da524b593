use pit_core::TaxInput;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when text cannot be read as a naira amount.
#[derive(Debug, Error)]
pub enum AmountParseError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount '{input}' exceeds the accepted magnitude of {}", TaxInput::MAX_AMOUNT)]
    OutOfRange { input: String },
}

impl AmountParseError {
    pub fn input(&self) -> &str {
        match self {
            Self::Invalid { input, .. } | Self::OutOfRange { input } => input,
        }
    }
}

/// [`TaxInput::MAX_AMOUNT`] as a float, for screening text before `Decimal`
/// parsing.
const MAX_MAGNITUDE: f64 = 1e24;

/// Trims whitespace, drops a leading currency marker and removes digit
/// grouping (`,` and `_`).
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let unmarked = trimmed
        .strip_prefix('₦')
        .or_else(|| trimmed.strip_prefix("NGN"))
        .unwrap_or(trimmed);
    unmarked
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect()
}

/// Parses an entered amount such as `"₦1,250,000.50"`.
///
/// Empty or whitespace-only input is zero. Sign is kept as entered. A value
/// whose magnitude exceeds [`TaxInput::MAX_AMOUNT`] is refused, including
/// one too large for `Decimal` to hold at all.
pub fn parse_amount(s: &str) -> Result<Decimal, AmountParseError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let out_of_range = || AmountParseError::OutOfRange {
        input: s.to_string(),
    };

    // Decimal cannot hold the largest of these at all, so screen them first.
    if normalized.bytes().any(|b| b.is_ascii_digit())
        && normalized
            .parse::<f64>()
            .is_ok_and(|v| v.abs() > MAX_MAGNITUDE)
    {
        return Err(out_of_range());
    }

    let amount = normalized
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|source| AmountParseError::Invalid {
            input: s.to_string(),
            source,
        })?;

    if TaxInput::amount_in_range(amount) {
        Ok(amount)
    } else {
        Err(out_of_range())
    }
}

/// Like [`parse_amount`], but text that is not a number counts as zero,
/// the way the declaration form treats an unreadable entry.
///
/// An out-of-range number is still an error: it was readable, just too
/// large to compute with.
pub fn coerce_amount(s: &str) -> Result<Decimal, AmountParseError> {
    match parse_amount(s) {
        Err(AmountParseError::Invalid { .. }) => {
            tracing::warn!(input = %s, "treating unreadable amount as zero");
            Ok(Decimal::ZERO)
        }
        other => other,
    }
}
