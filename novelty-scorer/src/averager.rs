//! Averaging per-list metric values across evaluation contexts.

use novelty_core::{EvaluationConfig, RankedListCollection, RankingMetric};

/// Running mean of per-context metric values.
///
/// # Examples
/// ```
/// use novelty_scorer::ContextMean;
///
/// let mut mean = ContextMean::default();
/// assert_eq!(mean.mean(), None);
/// mean.add(1.0);
/// mean.add(3.0);
/// assert_eq!(mean.contexts(), 2);
/// assert_eq!(mean.mean(), Some(2.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContextMean {
    total: f64,
    contexts: u64,
}

impl ContextMean {
    /// Record the metric value of one context.
    #[expect(
        clippy::float_arithmetic,
        reason = "the running total sums metric values"
    )]
    pub fn add(&mut self, value: f64) {
        self.total += value;
        self.contexts = self.contexts.saturating_add(1);
    }

    /// Number of contexts recorded so far.
    #[must_use]
    pub const fn contexts(&self) -> u64 {
        self.contexts
    }

    /// Sum of all recorded values.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// Mean value per context, or `None` before any context is recorded.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the mean divides the total by the context count"
    )]
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        (self.contexts > 0).then(|| self.total / self.contexts as f64)
    }
}

impl Extend<f64> for ContextMean {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for ContextMean {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut mean = Self::default();
        mean.extend(iter);
        mean
    }
}

/// Apply `metric` to every list in `recommendations` and average the results.
///
/// # Examples
/// ```
/// use novelty_core::{EvaluationConfig, PopularityTable, RankedList, RankedListCollection};
/// use novelty_scorer::{NoveltyScorer, evaluate_contexts};
///
/// let popularity: PopularityTable = [(1, 25), (2, 50)].into_iter().collect();
/// let scorer = NoveltyScorer::new(100, popularity)?;
/// let lists: RankedListCollection = [
///     [(1, 0.9)].into_iter().collect::<RankedList>(),
///     [(2, 0.9)].into_iter().collect::<RankedList>(),
/// ]
/// .into_iter()
/// .collect();
///
/// let mean = evaluate_contexts(&scorer, &lists, &EvaluationConfig::new(1));
/// assert_eq!(mean.contexts(), 2);
/// assert!(mean.mean().is_some_and(|value| (value - 1.5).abs() < 1e-12));
/// # Ok::<(), novelty_scorer::NoveltyError>(())
/// ```
#[must_use]
pub fn evaluate_contexts<M>(
    metric: &M,
    recommendations: &RankedListCollection,
    config: &EvaluationConfig,
) -> ContextMean
where
    M: RankingMetric + ?Sized,
{
    recommendations
        .iter()
        .map(|list| metric.evaluate_list(list, config))
        .collect()
}
