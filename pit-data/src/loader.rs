//! File loaders for declaration inputs.
//!
//! ## TOML format
//!
//! Keys are [`InputField`] keys. They may sit at the top level or inside the
//! table of their section, but each field may be given only once. Values may
//! be numbers or strings; strings go through [`coerce_amount`]. Floats must be
//! finite.
//!
//! ```toml
//! paye_withheld = 950000   # top-level keys must come before any table
//!
//! [employment]
//! basic_salary = 6_000_000
//! employment_allowances = "2,000,000"
//!
//! [deductions]
//! rent_paid = 1_500_000
//! ```
//!
//! Section tables: `employment`, `investment`, `capital_gains`, `deductions`,
//! `prepaid_taxes`.
//!
//! ## CSV format
//!
//! Two columns, `field` and `amount`, with a header row. Column order does
//! not matter. One row per field; a later row for the same field replaces
//! the earlier one. An empty amount cell is zero.
//!
//! In both formats an amount beyond [`TaxInput::MAX_AMOUNT`] is an error,
//! never zero.
//!
//! ```csv
//! field,amount
//! basic_salary,"6,000,000"
//! rent_paid,1500000
//! paye_withheld,
//! ```

use std::collections::HashSet;
use std::path::Path;

use pit_core::{InputField, InputGroup, TaxInput};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::amount::{AmountParseError, coerce_amount, parse_amount};

/// Errors that can occur while loading declaration inputs.
#[derive(Debug, Error)]
pub enum InputLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// `row` is 1-based for CSV input and `None` for TOML input.
    #[error("unknown field '{field}'{}", .row.map(|r| format!(" on row {r}")).unwrap_or_default())]
    UnknownField { field: String, row: Option<usize> },

    #[error("field '{field}' does not belong in [{group}]")]
    MisplacedField { field: String, group: String },

    #[error("field '{field}' is given more than once")]
    DuplicateField { field: String },

    #[error("field '{field}' must be a finite number or a string")]
    InvalidValue { field: String },

    #[error("field '{field}': {source}")]
    AmountOutOfRange {
        field: String,
        #[source]
        source: AmountParseError,
    },

    #[error("override '{0}' is not of the form field=amount")]
    InvalidOverride(String),

    #[error("override for '{field}': {source}")]
    InvalidOverrideAmount {
        field: String,
        #[source]
        source: AmountParseError,
    },

    #[error("unsupported input format '{0}' (expected .toml or .csv)")]
    UnsupportedFormat(String),
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

fn amount_error(
    field: InputField,
    source: AmountParseError,
) -> InputLoadError {
    match source {
        AmountParseError::OutOfRange { .. } => InputLoadError::AmountOutOfRange {
            field: field.as_str().to_string(),
            source,
        },
        AmountParseError::Invalid { .. } => InputLoadError::InvalidValue {
            field: field.as_str().to_string(),
        },
    }
}

fn toml_amount(
    field: InputField,
    value: &toml::Value,
) -> Result<Decimal, InputLoadError> {
    match value {
        // i64 is always inside the accepted range.
        toml::Value::Integer(i) => Ok(Decimal::from(*i)),
        toml::Value::Float(f) if f.is_finite() => {
            parse_amount(&f.to_string()).map_err(|e| amount_error(field, e))
        }
        toml::Value::String(s) => coerce_amount(s).map_err(|e| amount_error(field, e)),
        _ => Err(InputLoadError::InvalidValue {
            field: field.as_str().to_string(),
        }),
    }
}

fn set_once(
    tax_input: &mut TaxInput,
    seen: &mut HashSet<InputField>,
    field: InputField,
    amount: Decimal,
) -> Result<(), InputLoadError> {
    if !seen.insert(field) {
        return Err(InputLoadError::DuplicateField {
            field: field.as_str().to_string(),
        });
    }
    tax_input.set(field, amount);
    Ok(())
}

fn lookup_field(
    key: &str,
    row: Option<usize>,
) -> Result<InputField, InputLoadError> {
    InputField::parse(key).ok_or_else(|| InputLoadError::UnknownField {
        field: key.to_string(),
        row,
    })
}

/// Parses a TOML document into a [`TaxInput`]. Absent fields stay zero.
pub fn load_toml_str(input: &str) -> Result<TaxInput, InputLoadError> {
    let document: toml::Table = input.parse()?;
    let mut tax_input = TaxInput::default();
    let mut seen = HashSet::new();

    for (key, value) in &document {
        match (InputGroup::parse(key), value) {
            (Some(group), toml::Value::Table(section)) => {
                for (inner_key, inner_value) in section {
                    let field = lookup_field(inner_key, None)?;
                    if field.group() != group {
                        return Err(InputLoadError::MisplacedField {
                            field: inner_key.clone(),
                            group: group.as_str().to_string(),
                        });
                    }
                    let amount = toml_amount(field, inner_value)?;
                    set_once(&mut tax_input, &mut seen, field, amount)?;
                }
            }
            _ => {
                let field = lookup_field(key, None)?;
                let amount = toml_amount(field, value)?;
                set_once(&mut tax_input, &mut seen, field, amount)?;
            }
        }
    }

    Ok(tax_input)
}

/// Reads a TOML file from disk and delegates to [`load_toml_str`].
pub fn load_toml_file(path: &Path) -> Result<TaxInput, InputLoadError> {
    let contents = read_file(path)?;
    load_toml_str(&contents)
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    field: String,
    #[serde(default)]
    amount: String,
}

/// Parses `field,amount` CSV text into a [`TaxInput`].
pub fn load_csv_str(input: &str) -> Result<TaxInput, InputLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let mut tax_input = TaxInput::default();

    for (idx, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        let field = lookup_field(&row.field, Some(idx + 1))?;
        let amount = coerce_amount(&row.amount).map_err(|e| amount_error(field, e))?;
        tax_input.set(field, amount);
    }

    Ok(tax_input)
}

/// Reads a CSV file from disk and delegates to [`load_csv_str`].
pub fn load_csv_file(path: &Path) -> Result<TaxInput, InputLoadError> {
    let contents = read_file(path)?;
    load_csv_str(&contents)
}

// ---------------------------------------------------------------------------
// Dispatch and overrides
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, InputLoadError> {
    debug!(path = %path.display(), "reading declaration input");
    std::fs::read_to_string(path).map_err(|source| InputLoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Loads a `.toml` or `.csv` file, chosen by extension (case-insensitive).
pub fn load_file(path: &Path) -> Result<TaxInput, InputLoadError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "toml" => load_toml_file(path),
        "csv" => load_csv_file(path),
        other => Err(InputLoadError::UnsupportedFormat(other.to_string())),
    }
}

/// Applies a `field=amount` override. Unlike file input, an unreadable
/// amount here is an error rather than zero. The input is left untouched on
/// error.
pub fn apply_override(
    input: &mut TaxInput,
    assignment: &str,
) -> Result<(), InputLoadError> {
    let (key, amount) = assignment
        .split_once('=')
        .ok_or_else(|| InputLoadError::InvalidOverride(assignment.to_string()))?;

    let key = key.trim();
    let field = lookup_field(key, None)?;
    let amount = parse_amount(amount).map_err(|source| match source {
        AmountParseError::OutOfRange { .. } => amount_error(field, source),
        AmountParseError::Invalid { .. } => InputLoadError::InvalidOverrideAmount {
            field: key.to_string(),
            source,
        },
    })?;

    debug!(field = key, %amount, "applying override");
    input.set(field, amount);
    Ok(())
}
