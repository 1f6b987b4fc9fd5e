use log::debug;

use crate::iterator::errors::IteratorError;

/// Lazily yields every ordering of a sequence.
///
/// Orderings come out in the order of recursive head removal: position 0 takes
/// each item in turn, and the remaining items are permuted the same way. This
/// is lexicographic order over item positions, so it is produced here by
/// stepping an index vector through its successive permutations.
///
/// Items are never compared, so a sequence with repeated values still yields
/// `n!` orderings.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl<T: Clone> Permutations<T> {
    /// # Errors
    ///
    /// Returns [`IteratorError::EmptySequence`] if `items` is empty.
    pub fn new(items: Vec<T>) -> Result<Self, IteratorError> {
        if items.is_empty() {
            return Err(IteratorError::EmptySequence);
        }
        debug!("Permuting {} items", items.len());
        let indices = (0..items.len()).collect();
        Ok(Self {
            items,
            indices,
            exhausted: false,
        })
    }

    fn current(&self) -> Vec<T> {
        self.indices
            .iter()
            .filter_map(|&i| self.items.get(i).cloned())
            .collect()
    }
}

/// Steps `indices` to its lexicographic successor, returning false after the last one.
fn advance(indices: &mut [usize]) -> bool {
    let Some(pivot) = indices
        .windows(2)
        .rposition(|pair| matches!(pair, [a, b] if a < b))
    else {
        return false;
    };
    let Some(&pivot_value) = indices.get(pivot) else {
        return false;
    };
    let Some(successor) = indices.iter().rposition(|&i| i > pivot_value) else {
        return false;
    };
    indices.swap(pivot, successor);
    if let Some(tail) = indices.get_mut(pivot + 1..) {
        tail.reverse();
    }
    true
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let ordering = self.current();
        self.exhausted = !advance(&mut self.indices);
        Some(ordering)
    }
}
