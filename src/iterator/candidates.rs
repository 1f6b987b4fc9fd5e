use std::iter;
use std::sync::Arc;

use crate::expression::Expression;
use crate::iterator::generator::ExpressionGenerator;

/// A re-iterable sequence of candidate expressions.
///
/// A `Candidates` value is a recipe, not a cursor: every call to
/// [`Candidates::iter`] starts a brand-new traversal, so the same branch can be
/// walked once per element of an enclosing cross product. Cloning is cheap
/// since sub-sequences sit behind [`Arc`].
#[derive(Debug, Clone)]
pub enum Candidates {
    /// A single constant.
    Operand(f64),
    /// Every source expression followed by its unary wrappings.
    Expanded(Arc<Candidates>),
    /// Every binary node over the cross product of two sequences.
    Combined(Arc<Candidates>, Arc<Candidates>),
}

impl Candidates {
    /// Leaf candidates for one operand: `d`, `sqrt(d)` and `d!`.
    pub fn operand(value: f64) -> Self {
        Candidates::Expanded(Arc::new(Candidates::Operand(value)))
    }

    /// Unary-expanded binary combinations of `left` and `right`.
    pub fn combine(left: &Candidates, right: &Candidates) -> Self {
        let combined = Candidates::Combined(Arc::new(left.clone()), Arc::new(right.clone()));
        Candidates::Expanded(Arc::new(combined))
    }

    /// Starts a fresh traversal of this sequence.
    pub fn iter(&self) -> Box<dyn Iterator<Item = Arc<Expression>> + '_> {
        match self {
            Candidates::Operand(value) => {
                Box::new(iter::once(Arc::new(Expression::Constant(*value))))
            }
            Candidates::Expanded(source) => {
                Box::new(source.iter().flat_map(ExpressionGenerator::unary_ops))
            }
            Candidates::Combined(left, right) => Box::new(left.iter().flat_map(move |a| {
                right
                    .iter()
                    .flat_map(move |b| ExpressionGenerator::binary_ops(&a, &b))
            })),
        }
    }
}
