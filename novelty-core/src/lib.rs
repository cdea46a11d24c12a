//! Core domain types for novelty evaluation of ranked recommendations.
//!
//! These models describe the inputs consumed by the scorer: ranked
//! recommendation lists per evaluation context, item popularity counts, the
//! population size used to estimate item probabilities, and the cutoff
//! configuration. Constructors that can receive unusable input return `Result`
//! to surface it early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod metric;
pub mod popularity;
pub mod population;
pub mod ranking;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{DEFAULT_CUTOFF, EvaluationConfig};
pub use metric::RankingMetric;
pub use popularity::PopularityTable;
pub use population::{Population, PopulationError};
pub use ranking::{RankedEntry, RankedList, RankedListCollection};

/// Identifier of a recommendable item.
pub type ItemId = u64;
