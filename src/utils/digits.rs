use log::debug;

use crate::utils::errors::UtilsError;
use crate::utils::validation::validate_digit_string;

/// Splits a digit string into single-digit operands, so `"2567"` becomes `[2, 5, 6, 7]`.
///
/// # Errors
///
/// Returns an error if the string is empty or contains anything but ASCII digits.
pub fn parse_operands(digits: &str) -> Result<Vec<u8>, UtilsError> {
    validate_digit_string(digits)?;

    let operands: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    debug!("Parsed '{}' into operands {:?}", digits, operands);
    Ok(operands)
}
