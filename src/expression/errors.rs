use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Factorial only applies to a constant, got '{0}'")]
    FactorialOfCompound(String),
    #[error("Concatenation only joins two constants, got '{left}' and '{right}'")]
    ConcatOfCompound { left: String, right: String },
}
