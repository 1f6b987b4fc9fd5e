use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use log::trace;

use crate::expression::Expression;
use crate::solver::constants::{MAX_RESULT, MIN_RESULT};

/// Best known expression for one result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub rank: u8,
    pub text: String,
}

/// Maps every reached integer in the codomain to its lowest-rank expression.
///
/// An entry is only ever replaced by a strictly lower rank, so on a tie the
/// expression offered first is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    answers: BTreeMap<u32, Answer>,
}

/// Maps a value to its registry key, or `None` if it is not a whole number in range.
fn result_key(value: f64) -> Option<u32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < f64::from(MIN_RESULT) || value > f64::from(MAX_RESULT) {
        return None;
    }
    // Whole and within u32 bounds, so the cast is exact; -0.0 lands on 0
    Some(value as u32)
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates `expr` and records it if it beats the stored entry for its value.
    ///
    /// Returns whether the registry changed. Values that are NaN, infinite,
    /// fractional or out of range are ignored.
    pub fn offer(&mut self, expr: &Expression) -> bool {
        let Some(key) = result_key(expr.evaluate()) else {
            return false;
        };
        let rank = expr.rank();
        match self.answers.entry(key) {
            Entry::Occupied(mut entry) => {
                if rank >= entry.get().rank {
                    return false;
                }
                let text = expr.to_string();
                trace!("Improved {}: rank {} -> {} via {}", key, entry.get().rank, rank, text);
                entry.insert(Answer { rank, text });
            }
            Entry::Vacant(entry) => {
                let text = expr.to_string();
                trace!("Reached {} at rank {} via {}", key, rank, text);
                entry.insert(Answer { rank, text });
            }
        }
        true
    }

    /// Folds in a registry filled by a later stretch of the same enumeration.
    ///
    /// Only strictly better answers from `later` win, which matches offering its
    /// expressions one by one after everything already recorded here.
    pub fn merge(&mut self, later: Registry) {
        for (key, answer) in later.answers {
            match self.answers.entry(key) {
                Entry::Occupied(mut entry) => {
                    if answer.rank < entry.get().rank {
                        entry.insert(answer);
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(answer);
                }
            }
        }
    }

    pub fn get(&self, value: u32) -> Option<&Answer> {
        self.answers.get(&value)
    }

    /// Entries in ascending order of value.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Answer)> {
        self.answers.iter().map(|(&value, answer)| (value, answer))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Integers in the codomain that no expression reached.
    pub fn missing(&self) -> Vec<u32> {
        (MIN_RESULT..=MAX_RESULT)
            .filter(|value| !self.answers.contains_key(value))
            .collect()
    }
}
