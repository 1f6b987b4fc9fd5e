use log::{trace, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the operand string is empty or holds anything other
/// than ASCII digits. Whitespace and signs are rejected too.
pub fn validate_digit_string(digits: &str) -> Result<(), UtilsError> {
    trace!("Validating operand string '{}'", digits);

    if digits.is_empty() {
        warn!("No operand digits given");
        return Err(UtilsError::EmptyDigitString);
    }

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
        warn!("Operand string '{}' contains non-digit {:?}", digits, bad);
        return Err(UtilsError::InvalidDigitString(digits.to_string()));
    }

    Ok(())
}
