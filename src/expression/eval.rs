use crate::expression::ast::Expression;

/// Largest operand accepted by factorial; anything above yields NaN.
const MAX_FACTORIAL_OPERAND: f64 = 9.0;

#[inline]
fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

fn factorial(value: f64) -> f64 {
    if !(0.0..=MAX_FACTORIAL_OPERAND).contains(&value) || !is_integer(value) {
        return f64::NAN;
    }
    fn product(n: f64) -> f64 {
        if n <= 1.0 { 1.0 } else { n * product(n - 1.0) }
    }
    product(value)
}

/// `powf` except that a base of magnitude one raised to a non-finite exponent is NaN.
fn power(base: f64, exponent: f64) -> f64 {
    if base.abs() == 1.0 && !exponent.is_finite() {
        f64::NAN
    } else {
        base.powf(exponent)
    }
}

fn concat(left: f64, right: f64) -> f64 {
    format!("{}{}", left, right)
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}

impl Expression {
    /// Numeric value of the expression.
    ///
    /// Never fails: division by zero gives an infinity, and out-of-domain square
    /// roots or factorials give NaN. Both propagate through enclosing nodes.
    pub fn evaluate(&self) -> f64 {
        match self {
            Expression::Constant(n) => *n,
            Expression::Concat(l, r) => concat(l.evaluate(), r.evaluate()),
            Expression::Sqrt(e) => e.evaluate().sqrt(),
            Expression::Factorial(e) => factorial(e.evaluate()),
            Expression::Add(l, r) => l.evaluate() + r.evaluate(),
            Expression::Subtract(l, r) => l.evaluate() - r.evaluate(),
            Expression::Multiply(l, r) => l.evaluate() * r.evaluate(),
            Expression::Divide(l, r) => l.evaluate() / r.evaluate(),
            Expression::Power(l, r) => power(l.evaluate(), r.evaluate()),
        }
    }
}
