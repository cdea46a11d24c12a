//! Per-list ranking metrics.
//!
//! The [`RankingMetric`] trait scores one context's ranked list at a time so a
//! generic aggregator can combine results across an evaluation population.

use crate::{EvaluationConfig, RankedList};

/// Score a single ranked list.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one metric
/// instance can be shared read-only across evaluation threads. The method is
/// infallible; implementers return `0.0` when no information is available.
///
/// # Examples
///
/// ```rust
/// use novelty_core::{EvaluationConfig, RankedList, RankingMetric};
///
/// struct Coverage;
///
/// impl RankingMetric for Coverage {
///     fn label(&self) -> &'static str {
///         "Coverage"
///     }
///
///     fn evaluate_list(&self, list: &RankedList, config: &EvaluationConfig) -> f64 {
///         if list.top(config).is_empty() { 0.0 } else { 1.0 }
///     }
/// }
///
/// let list: RankedList = [(1, 0.5)].into_iter().collect();
/// let config = EvaluationConfig::new(3);
/// assert_eq!(Coverage.evaluate_list(&list, &config), 1.0);
/// assert_eq!(Coverage.name(&config), "Coverage@3");
/// ```
pub trait RankingMetric: Send + Sync {
    /// Short metric label without the cutoff suffix.
    fn label(&self) -> &'static str;

    /// Return the metric value for `list` under `config`.
    fn evaluate_list(&self, list: &RankedList, config: &EvaluationConfig) -> f64;

    /// Display name including the cutoff, such as `Novelty@10`.
    fn name(&self, config: &EvaluationConfig) -> String {
        format!("{}@{}", self.label(), config.cutoff())
    }
}
