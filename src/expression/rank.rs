use crate::expression::ast::Expression;

/// Complexity ranks, one per operator family. A compound expression takes the
/// maximum over its operators, never the sum.
pub const CONSTANT_RANK: u8 = 0;
pub const ARITHMETIC_RANK: u8 = 1;
pub const POWER_RANK: u8 = 2;
pub const SQRT_RANK: u8 = 3;
pub const FACTORIAL_RANK: u8 = 4;
pub const CONCAT_RANK: u8 = 5;

impl Expression {
    /// Rank of the most exotic operator used anywhere in the expression.
    pub fn rank(&self) -> u8 {
        match self {
            Expression::Constant(_) => CONSTANT_RANK,
            Expression::Concat(_, _) => CONCAT_RANK,
            Expression::Sqrt(e) => e.rank().max(SQRT_RANK),
            Expression::Factorial(e) => e.rank().max(FACTORIAL_RANK),
            Expression::Add(l, r)
            | Expression::Subtract(l, r)
            | Expression::Multiply(l, r)
            | Expression::Divide(l, r) => l.rank().max(r.rank()).max(ARITHMETIC_RANK),
            Expression::Power(l, r) => l.rank().max(r.rank()).max(POWER_RANK),
        }
    }

    /// Binding looseness used for parenthesization: 0 binds tightest.
    pub fn precedence(&self) -> u8 {
        match self {
            Expression::Constant(_)
            | Expression::Concat(_, _)
            | Expression::Sqrt(_)
            | Expression::Factorial(_) => 0,
            Expression::Power(_, _) => 1,
            Expression::Multiply(_, _) | Expression::Divide(_, _) => 2,
            Expression::Add(_, _) | Expression::Subtract(_, _) => 3,
        }
    }
}
