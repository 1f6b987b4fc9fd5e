//! Parsing and validation of operand digit strings

mod digits;
mod errors;
mod validation;

pub use digits::parse_operands;
pub use errors::UtilsError;
pub use validation::validate_digit_string;
