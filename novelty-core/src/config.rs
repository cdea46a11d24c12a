//! Evaluation settings passed explicitly into every scoring call.

/// Cutoff applied when no explicit value is configured.
pub const DEFAULT_CUTOFF: usize = 10;

/// Settings shared by the scoring operations.
///
/// Build one per evaluation run and pass it by reference; scorers never read
/// settings from process-wide state.
///
/// # Examples
/// ```
/// use novelty_core::EvaluationConfig;
///
/// let config = EvaluationConfig::new(5);
/// assert_eq!(config.cutoff(), 5);
/// assert_eq!(config.effective_cutoff(3), 3);
/// assert_eq!(config.effective_cutoff(8), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationConfig {
    cutoff: usize,
}

impl EvaluationConfig {
    /// Create a configuration with the given top-K / top-N cutoff.
    #[must_use]
    pub const fn new(cutoff: usize) -> Self {
        Self { cutoff }
    }

    /// Configured number of leading entries to score.
    #[must_use]
    pub const fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Clamp the cutoff to a list of `len` entries.
    ///
    /// A cutoff beyond the list length is never an error: short lists are
    /// scored in full.
    #[must_use]
    pub const fn effective_cutoff(&self, len: usize) -> usize {
        if self.cutoff < len { self.cutoff } else { len }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CUTOFF)
    }
}
