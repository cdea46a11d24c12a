//! Per-list novelty scoring against a fixed test population.
//!
//! The scorer holds the number of test users and the popularity counts it was
//! built with, then sums the self-information of each ranked list's leading
//! items. Results are not normalised; averaging across contexts is left to the
//! caller, for example through [`ContextMean`](crate::ContextMean).

#![forbid(unsafe_code)]

use novelty_core::{EvaluationConfig, PopularityTable, Population, RankedList, RankingMetric};

use crate::NoveltyError;
use crate::information::usable_count;

/// Label used in metric names such as `Novelty@10`.
pub const METRIC_LABEL: &str = "Novelty";

/// Scorer that sums item surprisal over one ranked list at a time.
///
/// State is fixed at construction, so a single instance can be shared across
/// threads for read-only scoring.
///
/// # Examples
/// ```
/// use novelty_core::{EvaluationConfig, PopularityTable, RankedList};
/// use novelty_scorer::NoveltyScorer;
///
/// let popularity: PopularityTable = [(7, 25)].into_iter().collect();
/// let scorer = NoveltyScorer::new(100, popularity)?;
/// let list: RankedList = [(7, 0.9)].into_iter().collect();
///
/// let total = scorer.summed_surprisal(&list, &EvaluationConfig::new(1));
/// assert!((total - 2.0).abs() < 1e-12);
/// # Ok::<(), novelty_scorer::NoveltyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoveltyScorer {
    population: Population,
    popularity: PopularityTable,
}

impl NoveltyScorer {
    /// Build a scorer for `num_users` test users.
    ///
    /// # Errors
    /// Returns [`NoveltyError::InvalidPopulation`] when `num_users` is zero.
    pub fn new(num_users: u64, popularity: PopularityTable) -> Result<Self, NoveltyError> {
        let population = Population::new(num_users)?;
        Ok(Self::with_population(population, popularity))
    }

    /// Build a scorer from an already validated population.
    #[must_use]
    pub const fn with_population(population: Population, popularity: PopularityTable) -> Self {
        Self {
            population,
            popularity,
        }
    }

    /// Number of test users used as the probability denominator.
    #[must_use]
    pub const fn population(&self) -> Population {
        self.population
    }

    /// Popularity counts consulted while scoring.
    #[must_use]
    pub const fn popularity(&self) -> &PopularityTable {
        &self.popularity
    }

    /// Sum of `log2(num_users / count)` over the list's top-N items.
    ///
    /// Only the first `min(top_n, len)` entries are considered. Items without
    /// a positive popularity count add nothing. The total is not divided by
    /// the number of users or lists.
    ///
    /// The ratio `num_users / count` is real-valued, not an integer quotient,
    /// so a count above half the population still contributes a fraction of a
    /// bit. Counts above the population contribute negative bits and are
    /// reported at warn level.
    #[expect(
        clippy::float_arithmetic,
        reason = "surprisal sums base-2 logarithms of count ratios"
    )]
    #[must_use]
    pub fn summed_surprisal(&self, list: &RankedList, config: &EvaluationConfig) -> f64 {
        let num_users = self.population.as_f64();
        let (total, above_population) = list
            .top(config)
            .iter()
            .filter_map(|entry| usable_count(&self.popularity, entry.item))
            .fold((0.0_f64, 0_usize), |(sum, above), count| {
                let exceeds = usize::from(count > num_users);
                (sum + (num_users / count).log2(), above + exceeds)
            });
        if above_population > 0 {
            log::warn!(
                "{above_population} recommended items have popularity above the population of {}; their self-information is negative",
                self.population.get()
            );
        }
        log::trace!(
            "summed surprisal {total} over {} of {} entries",
            config.effective_cutoff(list.len()),
            list.len()
        );
        total
    }
}

impl RankingMetric for NoveltyScorer {
    fn label(&self) -> &'static str {
        METRIC_LABEL
    }

    fn evaluate_list(&self, list: &RankedList, config: &EvaluationConfig) -> f64 {
        self.summed_surprisal(list, config)
    }
}
