use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        /// Writes `expr`, parenthesized when its precedence reaches `min_precedence`.
        fn write_side(
            f: &mut fmt::Formatter,
            expr: &Expression,
            min_precedence: u8,
        ) -> fmt::Result {
            if expr.precedence() >= min_precedence {
                write!(f, "({})", expr)
            } else {
                write!(f, "{}", expr)
            }
        }

        // A side that can never reach this threshold is written bare.
        const NEVER: u8 = u8::MAX;

        match self {
            Expression::Constant(n) => write!(f, "{}", n),
            Expression::Concat(_, _) => write!(f, "{}", self.evaluate()),
            Expression::Sqrt(e) => write!(f, "sqrt({})", e),
            Expression::Factorial(e) => {
                write_side(f, e, 1)?;
                write!(f, "!")
            }
            Expression::Add(l, r) => {
                write_side(f, l, NEVER)?;
                write!(f, " + ")?;
                write_side(f, r, NEVER)
            }
            Expression::Subtract(l, r) => {
                write_side(f, l, NEVER)?;
                write!(f, " - ")?;
                write_side(f, r, 3)
            }
            Expression::Multiply(l, r) => {
                write_side(f, l, 3)?;
                write!(f, " * ")?;
                write_side(f, r, 3)
            }
            Expression::Divide(l, r) => {
                write_side(f, l, 3)?;
                write!(f, " / ")?;
                write_side(f, r, 2)
            }
            Expression::Power(l, r) => {
                write_side(f, l, 2)?;
                write!(f, "^")?;
                write_side(f, r, 1)
            }
        }
    }
}
