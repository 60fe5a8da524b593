//! Personal income tax calculations.
//!
//! [`engine`] runs the full computation; [`reliefs`] and [`bands`] hold the
//! individual rules it is built from.

pub mod bands;
pub mod common;
pub mod engine;
pub mod reliefs;

pub use engine::{TaxEngine, compute_tax};
