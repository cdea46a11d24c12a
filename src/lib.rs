//! Facade crate for novelty evaluation of ranked recommendations.
//!
//! This crate re-exports the core domain types together with the novelty
//! scoring operations.

#![forbid(unsafe_code)]

pub use novelty_core::{
    DEFAULT_CUTOFF, EvaluationConfig, ItemId, PopularityTable, Population, PopulationError,
    RankedEntry, RankedList, RankedListCollection, RankingMetric,
};

pub use novelty_scorer::{
    ContextMean, METRIC_LABEL, NoveltyError, NoveltyScorer, evaluate_contexts, mean_surprisal,
    self_information,
};
