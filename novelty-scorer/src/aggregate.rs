//! Corpus-wide mean self-information across every evaluated context.

use std::f64::consts::LN_2;

use novelty_core::{EvaluationConfig, PopularityTable, Population, RankedListCollection};

use crate::NoveltyError;
use crate::information::usable_count;

/// Mean self-information, in bits per context, of the top-K recommendations.
///
/// Each context in `0..num_contexts` contributes the surprisal of the first
/// `min(top_k, len)` items of its list. An item's probability is estimated as
/// its popularity count divided by `num_contexts`; items that are missing from
/// `popularity` or have a count of zero or below contribute nothing. Surprisal
/// is accumulated in nats and converted to bits once, when the total is
/// divided by `num_contexts * ln(2)`.
///
/// Lists beyond `num_contexts` are ignored.
///
/// # Errors
/// Returns [`NoveltyError::InvalidPopulation`] when `num_contexts` is zero and
/// [`NoveltyError::MissingContext`] when a context in range has no list.
///
/// # Examples
/// ```
/// use novelty_core::{EvaluationConfig, PopularityTable, RankedList, RankedListCollection};
/// use novelty_scorer::mean_surprisal;
///
/// let lists: RankedListCollection = [
///     [(1, 0.9)].into_iter().collect::<RankedList>(),
///     [(2, 0.8)].into_iter().collect::<RankedList>(),
/// ]
/// .into_iter()
/// .collect();
/// let popularity: PopularityTable = [(1, 1), (2, 1)].into_iter().collect();
///
/// let novelty = mean_surprisal(2, &lists, &popularity, &EvaluationConfig::new(1))?;
/// assert!((novelty - 1.0).abs() < 1e-12);
/// # Ok::<(), novelty_scorer::NoveltyError>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "surprisal accumulates logarithms of probability estimates"
)]
pub fn mean_surprisal(
    num_contexts: usize,
    recommendations: &RankedListCollection,
    popularity: &PopularityTable,
    config: &EvaluationConfig,
) -> Result<f64, NoveltyError> {
    let population = Population::from_contexts(num_contexts)?;
    let denominator = population.as_f64();

    let mut total_nats = 0.0_f64;
    let mut scored = 0_usize;
    let mut skipped = 0_usize;
    let mut above_population = 0_usize;
    for context in 0..num_contexts {
        let list = recommendations
            .get(context)
            .ok_or(NoveltyError::MissingContext {
                context,
                available: recommendations.len(),
            })?;
        for entry in list.top(config) {
            let Some(count) = usable_count(popularity, entry.item) else {
                skipped += 1;
                continue;
            };
            if count > denominator {
                above_population += 1;
            }
            total_nats += -(count / denominator).ln();
            scored += 1;
        }
    }

    if recommendations.len() > num_contexts {
        log::debug!(
            "ignoring {} ranked lists beyond the {num_contexts} evaluated contexts",
            recommendations.len() - num_contexts
        );
    }
    if above_population > 0 {
        log::warn!(
            "{above_population} recommended items have popularity above the population of {num_contexts}; their self-information is negative"
        );
    }
    log::debug!(
        "scored {scored} items across {num_contexts} contexts at cutoff {}; skipped {skipped} without popularity",
        config.cutoff()
    );

    Ok(total_nats / (denominator * LN_2))
}
