//! Expression algebra: variants, evaluation, rendering and ranking

mod ast;
mod display;
mod errors;
mod eval;
pub mod rank;

pub use ast::Expression;
pub use errors::ExpressionError;

#[cfg(test)]
mod tests;
