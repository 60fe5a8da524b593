mod input_field;
mod tax_input;
mod tax_result;
mod tax_rules;

pub use input_field::{InputField, InputGroup};
pub use tax_input::TaxInput;
pub use tax_result::{BracketResult, ReliefBreakdown, TaxResult};
pub use tax_rules::{TaxBand, TaxRules};
