//! Self-information of items estimated from popularity counts.

use novelty_core::{ItemId, PopularityTable, Population};

/// Self-information, in bits, of an item seen `count` times in `population`.
///
/// The item's probability is estimated as `count / population`, so the result
/// is `-log2(count / population)`. Counts of zero or below carry no usable
/// popularity and return `None`; callers treat that as no contribution.
///
/// # Examples
/// ```
/// use novelty_core::Population;
/// use novelty_scorer::self_information;
///
/// let population = Population::new(8)?;
/// assert_eq!(self_information(2, population), Some(2.0));
/// assert_eq!(self_information(0, population), None);
/// # Ok::<(), novelty_core::PopulationError>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "probability estimates divide counts by the population size"
)]
#[must_use]
pub fn self_information(count: i64, population: Population) -> Option<f64> {
    positive_count(count).map(|value| -(value / population.as_f64()).log2())
}

/// Return the popularity of `item` when it can inform a probability estimate.
pub(crate) fn usable_count(popularity: &PopularityTable, item: ItemId) -> Option<f64> {
    popularity.count(item).and_then(positive_count)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "interaction counts stay far below 2^52"
)]
const fn positive_count(count: i64) -> Option<f64> {
    if count > 0 { Some(count as f64) } else { None }
}
