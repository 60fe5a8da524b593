pub mod calculations;
pub mod models;

pub use calculations::{TaxEngine, compute_tax};
pub use models::*;
