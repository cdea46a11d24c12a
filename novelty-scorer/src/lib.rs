//! Novelty scoring for ranked recommendation output.
//!
//! Novelty, also called mean self-information or surprisal, measures how
//! unexpected recommended items are given how often the population interacted
//! with them. An item's probability is estimated from its popularity count,
//! and its self-information is `-log2(probability)`: rarer items carry more
//! information.
//!
//! The crate exposes two deliberately separate operations:
//! - **[`mean_surprisal`]** scores a whole evaluation run. It sums the surprisal
//!   of every context's top-K items and divides by the number of contexts,
//!   returning mean bits per context.
//! - **[`NoveltyScorer::summed_surprisal`]** scores one ranked list against a
//!   fixed number of test users and returns the unnormalised sum. Use
//!   [`ContextMean`] or [`evaluate_contexts`] to average it across contexts.
//!
//! The two results are normalised differently and are not interchangeable.
//! Items missing from the popularity table, or recorded with a count of zero
//! or below, contribute nothing to either score.
//!
//! # Examples
//!
//! ```
//! use novelty_core::{EvaluationConfig, PopularityTable, RankedList, RankedListCollection};
//! use novelty_scorer::{NoveltyScorer, mean_surprisal};
//!
//! let popularity: PopularityTable = [(1, 1), (2, 2)].into_iter().collect();
//! let lists: RankedListCollection = [
//!     [(1, 0.7), (2, 0.3)].into_iter().collect::<RankedList>(),
//!     [(2, 0.9)].into_iter().collect::<RankedList>(),
//! ]
//! .into_iter()
//! .collect();
//! let config = EvaluationConfig::new(2);
//!
//! let corpus = mean_surprisal(lists.len(), &lists, &popularity, &config)?;
//! assert!(corpus > 0.0);
//!
//! let scorer = NoveltyScorer::new(2, popularity)?;
//! let first = lists.get(0).map(|list| scorer.summed_surprisal(list, &config));
//! assert_eq!(first, Some(1.0));
//! # Ok::<(), novelty_scorer::NoveltyError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregate;
mod averager;
mod error;
mod information;
mod novelty;

pub use aggregate::mean_surprisal;
pub use averager::{ContextMean, evaluate_contexts};
pub use error::NoveltyError;
pub use information::self_information;
pub use novelty::{METRIC_LABEL, NoveltyScorer};
