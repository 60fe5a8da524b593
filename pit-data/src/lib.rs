//! Collects declaration amounts from text and files into a [`pit_core::TaxInput`].

pub mod amount;
pub mod loader;

pub use amount::{AmountParseError, coerce_amount, parse_amount};
pub use loader::{
    InputLoadError, apply_override, load_csv_file, load_csv_str, load_file, load_toml_file,
    load_toml_str,
};
