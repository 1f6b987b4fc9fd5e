use std::iter;

use crate::iterator::errors::IteratorError;

/// Lazily yields every full binary bracketing of an ordered sequence, each
/// reduced through a caller-supplied `combine`.
///
/// For every split point the left part and the right part are bracketed
/// recursively and `combine` is applied to each pair of results. A sequence of
/// `n` items therefore yields Catalan(n - 1) tree shapes. The right-hand
/// enumeration is rebuilt for every left-hand result, so no sub-enumeration is
/// ever shared between two traversals.
pub struct Bracketings<'a, T> {
    inner: Box<dyn Iterator<Item = T> + 'a>,
}

impl<'a, T: Clone + 'a> Bracketings<'a, T> {
    /// # Errors
    ///
    /// Returns [`IteratorError::EmptySequence`] if `items` is empty.
    pub fn new<F>(items: &'a [T], combine: &'a F) -> Result<Self, IteratorError>
    where
        F: Fn(&T, &T) -> T,
    {
        if items.is_empty() {
            return Err(IteratorError::EmptySequence);
        }
        Ok(Self {
            inner: bracket(items, combine),
        })
    }
}

fn bracket<'a, T, F>(items: &'a [T], combine: &'a F) -> Box<dyn Iterator<Item = T> + 'a>
where
    T: Clone + 'a,
    F: Fn(&T, &T) -> T,
{
    match items {
        [] => Box::new(iter::empty()),
        [single] => Box::new(iter::once(single.clone())),
        _ => Box::new((1..items.len()).flat_map(move |split| {
            let (left, right) = items.split_at(split);
            bracket(left, combine).flat_map(move |l| {
                bracket(right, combine).map(move |r| combine(&l, &r))
            })
        })),
    }
}

impl<T> Iterator for Bracketings<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
