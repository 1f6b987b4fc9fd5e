use std::sync::Arc;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

fn num(n: f64) -> Arc<Expression> {
    Arc::new(Expression::Constant(n))
}

fn add(l: Arc<Expression>, r: Arc<Expression>) -> Arc<Expression> {
    Arc::new(Expression::Add(l, r))
}

fn sub(l: Arc<Expression>, r: Arc<Expression>) -> Arc<Expression> {
    Arc::new(Expression::Subtract(l, r))
}

fn mul(l: Arc<Expression>, r: Arc<Expression>) -> Arc<Expression> {
    Arc::new(Expression::Multiply(l, r))
}

fn div(l: Arc<Expression>, r: Arc<Expression>) -> Arc<Expression> {
    Arc::new(Expression::Divide(l, r))
}

fn pow(l: Arc<Expression>, r: Arc<Expression>) -> Arc<Expression> {
    Arc::new(Expression::Power(l, r))
}

#[test]
fn test_rank_ordering_of_minimal_examples() {
    let constant = num(2.0);
    let sum = add(num(1.0), num(2.0));
    let difference = sub(num(1.0), num(2.0));
    let product = mul(num(1.0), num(2.0));
    let quotient = div(num(1.0), num(2.0));
    let power = pow(num(2.0), num(3.0));
    let root = Expression::Sqrt(num(4.0));
    let fact = Expression::factorial(num(3.0));
    let joined = Expression::concat(num(2.0), num(5.0));

    assert_eq!(constant.rank(), 0);
    assert_eq!(sum.rank(), 1);
    assert_eq!(difference.rank(), 1);
    assert_eq!(product.rank(), 1);
    assert_eq!(quotient.rank(), 1);
    assert_eq!(power.rank(), 2);
    assert_eq!(root.rank(), 3);
    assert!(matches!(fact, Ok(ref e) if e.rank() == 4));
    assert!(matches!(joined, Ok(ref e) if e.rank() == 5));
}

#[test]
fn test_rank_is_maximum_not_sum() {
    // 1 + 2 + 3 + 4 uses three additions but stays at rank 1
    let chain = add(add(add(num(1.0), num(2.0)), num(3.0)), num(4.0));
    assert_eq!(chain.rank(), 1);

    // sqrt(2^3) takes the root's rank
    let root = Expression::Sqrt(pow(num(2.0), num(3.0)));
    assert_eq!(root.rank(), 3);

    // a concatenation anywhere dominates
    let joined = Arc::new(Expression::Concat(num(2.0), num(5.0)));
    assert_eq!(add(joined, Arc::new(Expression::Sqrt(num(4.0)))).rank(), 5);
}

#[test]
fn test_evaluate_basic_operations() {
    assert_eq!(add(num(1.0), num(2.0)).evaluate(), 3.0);
    assert_eq!(sub(num(2.0), num(5.0)).evaluate(), -3.0);
    assert_eq!(mul(num(6.0), num(7.0)).evaluate(), 42.0);
    assert_eq!(div(num(7.0), num(2.0)).evaluate(), 3.5);
    assert_eq!(pow(num(2.0), num(5.0)).evaluate(), 32.0);
    assert_eq!(Expression::Sqrt(num(49.0)).evaluate(), 7.0);
    assert_eq!(Expression::Concat(num(2.0), num(5.0)).evaluate(), 25.0);
    assert_eq!(Expression::Factorial(num(4.0)).evaluate(), 24.0);
}

#[test]
fn test_domain_violations_propagate_silently() {
    let by_zero = div(num(7.0), sub(num(5.0), num(5.0)));
    assert_eq!(by_zero.evaluate(), f64::INFINITY);

    let negative_root = Arc::new(Expression::Sqrt(sub(num(2.0), num(5.0))));
    assert!(negative_root.evaluate().is_nan());
    assert!(add(negative_root, num(1.0)).evaluate().is_nan());

    assert!(Expression::Factorial(num(10.0)).evaluate().is_nan());
    assert!(Expression::Factorial(div(num(5.0), num(2.0))).evaluate().is_nan());
}

#[test]
fn test_factorial_rejects_compound_child() {
    let result = Expression::factorial(add(num(1.0), num(2.0)));
    assert_eq!(
        result,
        Err(ExpressionError::FactorialOfCompound("1 + 2".to_string()))
    );
    assert!(Expression::factorial(Arc::new(Expression::Sqrt(num(4.0)))).is_err());
}

#[test]
fn test_concat_rejects_compound_side() {
    let result = Expression::concat(num(2.0), Arc::new(Expression::Sqrt(num(4.0))));
    assert_eq!(
        result,
        Err(ExpressionError::ConcatOfCompound {
            left: "2".to_string(),
            right: "sqrt(4)".to_string(),
        })
    );
}

#[test]
fn test_concatenation_counts_as_constant() {
    let joined = Arc::new(Expression::Concat(num(0.0), num(5.0)));
    assert!(joined.is_constant());
    assert!(!Expression::Sqrt(num(4.0)).is_constant());

    let fact = Expression::factorial(joined.clone());
    assert!(matches!(fact, Ok(ref e) if e.evaluate() == 120.0 && e.rank() == 5));
    assert!(matches!(fact, Ok(ref e) if e.to_string() == "5!"));

    let longer = Expression::concat(Arc::new(Expression::Concat(num(1.0), num(0.0))), num(0.0));
    assert!(matches!(longer, Ok(ref e) if e.evaluate() == 100.0 && e.rank() == 5));
    assert!(matches!(longer, Ok(ref e) if e.to_string() == "100"));

    assert!(Expression::concat(joined, Arc::new(Expression::Sqrt(num(4.0)))).is_err());
}

#[test]
fn test_display_constants_and_unary() {
    assert_eq!(num(7.0).to_string(), "7");
    assert_eq!(Expression::Concat(num(2.0), num(5.0)).to_string(), "25");
    assert_eq!(Expression::Sqrt(add(num(2.0), num(7.0))).to_string(), "sqrt(2 + 7)");
    assert_eq!(Expression::Factorial(num(5.0)).to_string(), "5!");
    assert_eq!(Expression::Factorial(add(num(1.0), num(2.0))).to_string(), "(1 + 2)!");
}

#[test]
fn test_display_subtract_parenthesizes_additive_right() {
    assert_eq!(sub(num(2.0), add(num(5.0), num(7.0))).to_string(), "2 - (5 + 7)");
    assert_eq!(sub(num(2.0), mul(num(5.0), num(7.0))).to_string(), "2 - 5 * 7");
    assert_eq!(sub(sub(num(2.0), num(5.0)), num(7.0)).to_string(), "2 - 5 - 7");
    assert_eq!(add(num(2.0), sub(num(5.0), num(7.0))).to_string(), "2 + 5 - 7");
}

#[test]
fn test_display_multiply_and_divide() {
    assert_eq!(mul(add(num(1.0), num(2.0)), num(3.0)).to_string(), "(1 + 2) * 3");
    assert_eq!(mul(num(3.0), div(num(6.0), num(2.0))).to_string(), "3 * 6 / 2");
    assert_eq!(div(num(7.0), mul(num(5.0), num(2.0))).to_string(), "7 / (5 * 2)");
    assert_eq!(div(num(7.0), pow(num(5.0), num(2.0))).to_string(), "7 / 5^2");
    assert_eq!(div(sub(num(7.0), num(5.0)), num(2.0)).to_string(), "(7 - 5) / 2");
}

#[test]
fn test_display_power() {
    assert_eq!(pow(num(5.0), pow(num(2.0), num(6.0))).to_string(), "5^(2^6)");
    assert_eq!(pow(pow(num(5.0), num(2.0)), num(6.0)).to_string(), "5^2^6");
    assert_eq!(pow(mul(num(2.0), num(3.0)), num(2.0)).to_string(), "(2 * 3)^2");
    assert_eq!(
        pow(Arc::new(Expression::Sqrt(num(2.0))), num(2.0)).to_string(),
        "sqrt(2)^2"
    );
    assert_eq!(
        pow(Arc::new(Expression::Factorial(num(3.0))), num(2.0)).to_string(),
        "3!^2"
    );
}

#[test]
fn test_shared_subexpressions() {
    let shared = add(num(1.0), num(2.0));
    let both = mul(shared.clone(), shared.clone());
    assert_eq!(both.evaluate(), 9.0);
    assert_eq!(both.to_string(), "(1 + 2) * (1 + 2)");
    assert_eq!(Arc::strong_count(&shared), 3);
}
