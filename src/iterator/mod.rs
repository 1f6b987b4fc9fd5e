//! Lazy enumerators: permutations, bracketings and re-iterable candidate sequences

mod bracketing;
mod candidates;
mod errors;
mod generator;
mod permutations;

pub use bracketing::Bracketings;
pub use candidates::Candidates;
pub use errors::IteratorError;
pub use generator::ExpressionGenerator;
pub use permutations::Permutations;
