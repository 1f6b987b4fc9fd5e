use std::sync::Arc;

use crate::expression::Expression;

pub struct ExpressionGenerator;

impl ExpressionGenerator {
    /// The expression itself, its square root and, for a constant only,
    /// its factorial.
    pub fn unary_ops(expr: Arc<Expression>) -> Vec<Arc<Expression>> {
        let sqrt = Arc::new(Expression::Sqrt(expr.clone()));
        let factorial = expr
            .is_constant()
            .then(|| Arc::new(Expression::Factorial(expr.clone())));
        let mut ops = vec![expr, sqrt];
        ops.extend(factorial);
        ops
    }

    /// Every binary node over `left` and `right`, in the fixed order add,
    /// subtract, multiply, divide, power, then concat when both are constants.
    pub fn binary_ops(left: &Arc<Expression>, right: &Arc<Expression>) -> Vec<Arc<Expression>> {
        let mut ops = vec![
            Arc::new(Expression::Add(left.clone(), right.clone())),
            Arc::new(Expression::Subtract(left.clone(), right.clone())),
            Arc::new(Expression::Multiply(left.clone(), right.clone())),
            Arc::new(Expression::Divide(left.clone(), right.clone())),
            Arc::new(Expression::Power(left.clone(), right.clone())),
        ];
        if left.is_constant() && right.is_constant() {
            ops.push(Arc::new(Expression::Concat(left.clone(), right.clone())));
        }
        ops
    }
}
