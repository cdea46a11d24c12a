//! Error types raised while scoring novelty.
#![forbid(unsafe_code)]

use novelty_core::PopulationError;
use thiserror::Error;

/// Errors raised when novelty cannot be computed from the supplied inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NoveltyError {
    /// The population used as the probability denominator was unusable.
    #[error("invalid evaluation population: {0}")]
    InvalidPopulation(#[from] PopulationError),
    /// A context within the population had no ranked list.
    #[error("no ranked list for context {context} (only {available} lists supplied)")]
    MissingContext {
        /// Index of the context without a list.
        context: usize,
        /// Number of lists in the collection.
        available: usize,
    },
}
