//! Digitforge - find the simplest expression for every number a few digits can make
//!
//! Given a handful of single-digit operands, this library enumerates every
//! arithmetic expression that uses each operand exactly once: all orderings,
//! all bracketings, the operators `+ - * / ^`, digit concatenation, square
//! roots, and factorials of single digits. For each whole result in `0..=100`
//! it keeps the expression whose most exotic operator ranks lowest.

pub mod expression;
pub mod iterator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError};
pub use iterator::{Bracketings, Candidates, IteratorError, Permutations};
pub use solver::{Answer, Registry, SolverError, SynthesisConfig, Synthesizer};
pub use utils::{UtilsError, parse_operands, validate_digit_string};

/// Build the registry of best expressions for the given operands
///
/// This is a convenience function that runs a default, sequential synthesizer.
///
/// # Arguments
///
/// * `operands` - Single digits, each used exactly once per expression
///
/// # Errors
///
/// This function will return an error if:
/// * `operands` is empty
/// * any operand is greater than 9
///
/// # Examples
///
/// ```
/// use digitforge::synthesize;
///
/// let registry = synthesize(&[1, 2]).unwrap_or_default();
/// if let Some(answer) = registry.get(3) {
///     assert_eq!(answer.text, "1 + 2");
///     assert_eq!(answer.rank, 1);
/// }
/// ```
pub fn synthesize(operands: &[u8]) -> Result<Registry, SolverError> {
    Synthesizer::default().synthesize(operands)
}

/// Same as [`synthesize`], reading one operand per character of `digits`
///
/// # Errors
///
/// Returns an error if `digits` is empty or contains a non-digit character.
pub fn synthesize_digits(digits: &str) -> Result<Registry, SolverError> {
    let operands = parse_operands(digits)?;
    synthesize(&operands)
}
