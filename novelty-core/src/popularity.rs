//! Item popularity counts gathered from population interaction data.

use std::collections::BTreeMap;

use crate::ItemId;

/// Interaction counts keyed by item identifier.
///
/// Counts are stored as observed, including zero and negative values, so the
/// scorer can apply its own policy for items without usable popularity. The
/// table is read-only once built.
///
/// # Examples
/// ```
/// use novelty_core::PopularityTable;
///
/// let sparse: PopularityTable = [(7, 25), (9, 0)].into_iter().collect();
/// assert_eq!(sparse.count(7), Some(25));
/// assert_eq!(sparse.count(9), Some(0));
/// assert_eq!(sparse.count(11), None);
///
/// let dense = PopularityTable::from_dense([4, 0, 2]);
/// assert_eq!(dense.count(2), Some(2));
/// assert_eq!(dense.count(3), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PopularityTable {
    counts: BTreeMap<ItemId, i64>,
}

impl PopularityTable {
    /// Construct a table from a pre-computed map.
    #[must_use]
    pub const fn new(counts: BTreeMap<ItemId, i64>) -> Self {
        Self { counts }
    }

    /// Construct a table from a dense array whose index is the item id.
    #[must_use]
    pub fn from_dense<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        counts
            .into_iter()
            .zip(0_u64..)
            .map(|(count, item)| (item, count))
            .collect()
    }

    /// Return the recorded count for `item`, if present.
    #[must_use]
    pub fn count(&self, item: ItemId) -> Option<i64> {
        self.counts.get(&item).copied()
    }

    /// Number of items with a recorded count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Report whether any counts are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(item, count)` pairs in item order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, i64)> + '_ {
        self.counts.iter().map(|(&item, &count)| (item, count))
    }
}

impl FromIterator<(ItemId, i64)> for PopularityTable {
    fn from_iter<T: IntoIterator<Item = (ItemId, i64)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
