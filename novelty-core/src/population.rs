//! Population sizes used as the denominator of probability estimates.

use std::num::NonZeroU64;

use thiserror::Error;

/// Number of contexts (users or sessions) in an evaluation population.
///
/// The value is always positive, so probability estimates and averages built
/// on it never divide by zero.
///
/// # Examples
/// ```
/// use novelty_core::{Population, PopulationError};
///
/// let population = Population::new(100)?;
/// assert_eq!(population.get(), 100);
/// assert_eq!(Population::new(0), Err(PopulationError::Empty));
/// # Ok::<(), PopulationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Population(NonZeroU64);

/// Errors returned when constructing a [`Population`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PopulationError {
    /// The population contained no contexts.
    #[error("population must contain at least one context")]
    Empty,
    /// The context count could not be represented as `u64`.
    #[error("context count {count} is outside the supported range")]
    OutOfRange {
        /// Count supplied by the caller.
        count: usize,
    },
}

impl Population {
    /// Validate and construct a population of `size` contexts.
    ///
    /// # Errors
    /// Returns [`PopulationError::Empty`] when `size` is zero.
    pub const fn new(size: u64) -> Result<Self, PopulationError> {
        match NonZeroU64::new(size) {
            Some(value) => Ok(Self(value)),
            None => Err(PopulationError::Empty),
        }
    }

    /// Build a population from a context count such as a collection length.
    ///
    /// # Errors
    /// Returns [`PopulationError::Empty`] for zero and
    /// [`PopulationError::OutOfRange`] when the count does not fit in `u64`.
    pub fn from_contexts(count: usize) -> Result<Self, PopulationError> {
        let size = u64::try_from(count).map_err(|_| PopulationError::OutOfRange { count })?;
        Self::new(size)
    }

    /// Return the population size.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// Return the population size as a floating-point denominator.
    #[expect(
        clippy::cast_precision_loss,
        reason = "population sizes stay far below 2^52"
    )]
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        self.0.get() as f64
    }
}

impl TryFrom<u64> for Population {
    type Error = PopulationError;

    fn try_from(size: u64) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}
