use std::sync::Arc;

use crate::expression::errors::ExpressionError;

/// An immutable arithmetic expression built from operand digits.
///
/// Children are shared behind [`Arc`], so the same sub-expression can appear in
/// many enclosing trees without being copied.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Constant(f64),
    /// Digit concatenation of two constants, `Concat(2, 5)` reads as `25`.
    /// The result is itself a constant, so concatenations chain into longer literals.
    Concat(Arc<Expression>, Arc<Expression>),
    Sqrt(Arc<Expression>),
    /// Only ever wraps a constant when built through [`Expression::factorial`].
    Factorial(Arc<Expression>),
    Add(Arc<Expression>, Arc<Expression>),
    Subtract(Arc<Expression>, Arc<Expression>),
    Multiply(Arc<Expression>, Arc<Expression>),
    Divide(Arc<Expression>, Arc<Expression>),
    Power(Arc<Expression>, Arc<Expression>),
}

impl Expression {
    /// Whether this is a literal: an operand or a concatenation of operands.
    pub fn is_constant(&self) -> bool {
        matches!(self, Expression::Constant(_) | Expression::Concat(_, _))
    }

    /// # Errors
    ///
    /// Returns [`ExpressionError::FactorialOfCompound`] unless `child` is a constant.
    pub fn factorial(child: Arc<Expression>) -> Result<Expression, ExpressionError> {
        if child.is_constant() {
            Ok(Expression::Factorial(child))
        } else {
            Err(ExpressionError::FactorialOfCompound(child.to_string()))
        }
    }

    /// # Errors
    ///
    /// Returns [`ExpressionError::ConcatOfCompound`] unless both sides are constants.
    pub fn concat(
        left: Arc<Expression>,
        right: Arc<Expression>,
    ) -> Result<Expression, ExpressionError> {
        if left.is_constant() && right.is_constant() {
            Ok(Expression::Concat(left, right))
        } else {
            Err(ExpressionError::ConcatOfCompound {
                left: left.to_string(),
                right: right.to_string(),
            })
        }
    }
}
