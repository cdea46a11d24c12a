//! Test-only builders for ranked lists and popularity tables.

use crate::{ItemId, PopularityTable, RankedList, RankedListCollection};

/// Build a list from item ids, assigning strictly descending scores.
#[expect(
    clippy::float_arithmetic,
    reason = "fixture scores decay with the reciprocal rank"
)]
#[must_use]
pub fn ranked_items(items: &[ItemId]) -> RankedList {
    items
        .iter()
        .zip((1_u32..).map(|rank| 1.0_f64 / f64::from(rank)))
        .map(|(&item, score)| (item, score))
        .collect()
}

/// Build one list per slice of item ids, in context order.
#[must_use]
pub fn collection_of(contexts: &[&[ItemId]]) -> RankedListCollection {
    contexts.iter().map(|items| ranked_items(items)).collect()
}

/// Build a sparse popularity table from `(item, count)` pairs.
#[must_use]
pub fn popularity_of(counts: &[(ItemId, i64)]) -> PopularityTable {
    counts.iter().copied().collect()
}
