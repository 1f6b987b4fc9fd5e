use thiserror::Error;

/// Errors raised when an enumerator is built over unusable input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IteratorError {
    #[error("Cannot enumerate an empty sequence")]
    EmptySequence,
}
