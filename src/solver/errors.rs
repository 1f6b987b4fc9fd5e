use thiserror::Error;

use crate::iterator::IteratorError;
use crate::solver::constants::MAX_OPERAND;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("At least one operand is required")]
    EmptyOperands,
    #[error("Operand {operand} is not a single digit (0-{max})", max = MAX_OPERAND)]
    OperandOutOfRange { operand: u8 },
    #[error("Enumeration error: {0}")]
    IteratorError(#[from] IteratorError),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
