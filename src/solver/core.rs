use log::{debug, info, warn};
use rayon::prelude::*;

use crate::iterator::{Bracketings, Candidates, Permutations};
use crate::solver::constants::MAX_OPERAND;
use crate::solver::errors::SolverError;
use crate::solver::registry::Registry;

/// Configuration for a synthesis run
#[derive(Debug, Clone, Default)]
pub struct SynthesisConfig {
    /// Search permutations on the rayon pool. The merged registry is identical
    /// to the sequential one.
    pub parallel: bool,
}

/// Running totals for one permutation or a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SearchStats {
    evaluated: usize,
    improved: usize,
}

impl SearchStats {
    fn absorb(&mut self, other: SearchStats) {
        self.evaluated += other.evaluated;
        self.improved += other.improved;
    }
}

/// Drives permutation x bracketing x unary expansion and records the best
/// expression for every reachable result
pub struct Synthesizer {
    config: SynthesisConfig,
}

impl Synthesizer {
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the synthesis configuration
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Build the registry of best expressions for `operands`.
    ///
    /// # Errors
    ///
    /// Returns an error if `operands` is empty or holds a value above 9.
    pub fn synthesize(&self, operands: &[u8]) -> Result<Registry, SolverError> {
        validate_operands(operands)?;
        info!("Synthesizing expressions from operands {:?}", operands);

        let leaves: Vec<Candidates> = operands
            .iter()
            .map(|&digit| Candidates::operand(f64::from(digit)))
            .collect();
        let permutations = Permutations::new(leaves)?;

        let (registry, stats) = if self.config.parallel {
            Self::search_parallel(permutations)?
        } else {
            Self::search_sequential(permutations)?
        };

        info!(
            "Evaluated {} expressions, {} improvements, {} results reached",
            stats.evaluated,
            stats.improved,
            registry.len()
        );
        Ok(registry)
    }

    fn search_sequential(
        permutations: Permutations<Candidates>,
    ) -> Result<(Registry, SearchStats), SolverError> {
        let mut registry = Registry::new();
        let mut stats = SearchStats::default();
        for (index, ordering) in permutations.enumerate() {
            let found = Self::search_permutation(&ordering, &mut registry)?;
            debug!(
                "Permutation {}: {} expressions, {} improvements",
                index, found.evaluated, found.improved
            );
            stats.absorb(found);
        }
        Ok((registry, stats))
    }

    fn search_parallel(
        permutations: Permutations<Candidates>,
    ) -> Result<(Registry, SearchStats), SolverError> {
        let orderings: Vec<Vec<Candidates>> = permutations.collect();
        info!("Searching {} permutations in parallel", orderings.len());

        // Collect keeps permutation order, so merging in sequence preserves the
        // first-found tie-break of the sequential search
        let partials = orderings
            .par_iter()
            .map(|ordering| {
                let mut registry = Registry::new();
                let stats = Self::search_permutation(ordering, &mut registry)?;
                Ok((registry, stats))
            })
            .collect::<Result<Vec<_>, SolverError>>()?;

        let mut registry = Registry::new();
        let mut stats = SearchStats::default();
        for (partial, found) in partials {
            registry.merge(partial);
            stats.absorb(found);
        }
        Ok((registry, stats))
    }

    /// Offers every expression over one operand ordering to `registry`
    fn search_permutation(
        ordering: &[Candidates],
        registry: &mut Registry,
    ) -> Result<SearchStats, SolverError> {
        let mut stats = SearchStats::default();
        for tree in Bracketings::new(ordering, &Candidates::combine)? {
            for expr in tree.iter() {
                stats.evaluated += 1;
                if registry.offer(&expr) {
                    stats.improved += 1;
                }
            }
        }
        Ok(stats)
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(SynthesisConfig::default())
    }
}

fn validate_operands(operands: &[u8]) -> Result<(), SolverError> {
    if operands.is_empty() {
        warn!("No operands supplied");
        return Err(SolverError::EmptyOperands);
    }
    if let Some(&operand) = operands.iter().find(|&&d| d > MAX_OPERAND) {
        warn!("Operand {} is not a single digit", operand);
        return Err(SolverError::OperandOutOfRange { operand });
    }
    Ok(())
}
