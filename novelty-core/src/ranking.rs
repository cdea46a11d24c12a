//! Ranked recommendation lists, one per evaluation context.

use crate::{EvaluationConfig, ItemId};

/// A recommended item together with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedEntry {
    /// Recommended item.
    pub item: ItemId,
    /// Relevance assigned upstream.
    pub score: f64,
}

impl RankedEntry {
    /// Pair an item with its relevance score.
    #[must_use]
    pub const fn new(item: ItemId, score: f64) -> Self {
        Self { item, score }
    }
}

impl From<(ItemId, f64)> for RankedEntry {
    fn from((item, score): (ItemId, f64)) -> Self {
        Self::new(item, score)
    }
}

/// Recommendations for a single context in upstream rank order.
///
/// The list is kept exactly as supplied: it is neither re-sorted nor checked
/// for descending scores.
///
/// # Examples
/// ```
/// use novelty_core::{EvaluationConfig, RankedList};
///
/// let list: RankedList = [(3, 0.9), (1, 0.4)].into_iter().collect();
/// let top = list.top(&EvaluationConfig::new(5));
/// assert_eq!(top.len(), 2);
/// assert_eq!(top.first().map(|entry| entry.item), Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RankedList {
    entries: Vec<RankedEntry>,
}

impl RankedList {
    /// Wrap entries that are already in rank order.
    #[must_use]
    pub const fn new(entries: Vec<RankedEntry>) -> Self {
        Self { entries }
    }

    /// All entries in rank order.
    #[must_use]
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Leading entries within the configured cutoff.
    #[must_use]
    pub fn top(&self, config: &EvaluationConfig) -> &[RankedEntry] {
        let cutoff = config.effective_cutoff(self.entries.len());
        self.entries.get(..cutoff).unwrap_or(&self.entries)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<RankedEntry> for RankedList {
    fn from_iter<T: IntoIterator<Item = RankedEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<(ItemId, f64)> for RankedList {
    fn from_iter<T: IntoIterator<Item = (ItemId, f64)>>(iter: T) -> Self {
        iter.into_iter().map(RankedEntry::from).collect()
    }
}

/// Ranked lists for every context of an evaluation run.
///
/// The position of a list is its context index.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RankedListCollection {
    lists: Vec<RankedList>,
}

impl RankedListCollection {
    /// Wrap per-context lists ordered by context index.
    #[must_use]
    pub const fn new(lists: Vec<RankedList>) -> Self {
        Self { lists }
    }

    /// Return the list for `context`, if present.
    #[must_use]
    pub fn get(&self, context: usize) -> Option<&RankedList> {
        self.lists.get(context)
    }

    /// Number of contexts with a list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Report whether the collection holds no lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Iterate over lists in context order.
    pub fn iter(&self) -> std::slice::Iter<'_, RankedList> {
        self.lists.iter()
    }
}

impl FromIterator<RankedList> for RankedListCollection {
    fn from_iter<T: IntoIterator<Item = RankedList>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RankedListCollection {
    type Item = &'a RankedList;
    type IntoIter = std::slice::Iter<'a, RankedList>;

    fn into_iter(self) -> Self::IntoIter {
        self.lists.iter()
    }
}
