//! Configuration types for the analyses.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    memory::MemoryWindow,
    types::{DivergenceKind, ROUNDS},
};

/// Configuration shared by the exposure comparisons.
///
/// # Examples
///
/// ```
/// use namegame::app::AnalysisConfig;
/// use namegame::types::DivergenceKind;
///
/// let config = AnalysisConfig::new(DivergenceKind::Kl)
///     .with_memory_length(8)
///     .with_additional_names(2)
///     .with_seed(42);
/// assert_eq!(config.memory_window().unwrap().length(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Divergence between seen and true distributions
    pub divergence: DivergenceKind,
    /// Rounds remembered by participants and by the population estimate
    pub memory_length: usize,
    /// Number of alternate names substituted per round
    pub additional_names: usize,
    /// Restrict random-other draws to the ego's non-neighbors
    pub only_non_neighbors: bool,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AnalysisConfig {
    /// Create a configuration for `divergence`.
    ///
    /// Uses default values for other parameters:
    /// - Memory: full game (25 rounds)
    /// - Additional names: 1
    /// - Random others drawn from every other participant
    /// - Seed: None (non-deterministic)
    pub fn new(divergence: DivergenceKind) -> Self {
        Self {
            divergence,
            memory_length: ROUNDS,
            additional_names: 1,
            only_non_neighbors: false,
            seed: None,
        }
    }

    pub fn with_memory_length(mut self, memory_length: usize) -> Self {
        self.memory_length = memory_length;
        self
    }

    pub fn with_additional_names(mut self, additional_names: usize) -> Self {
        self.additional_names = additional_names;
        self
    }

    pub fn with_only_non_neighbors(mut self, only_non_neighbors: bool) -> Self {
        self.only_non_neighbors = only_non_neighbors;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The validated memory window.
    ///
    /// # Errors
    ///
    /// Returns an error if the memory length is zero.
    pub fn memory_window(&self) -> Result<MemoryWindow> {
        MemoryWindow::new(self.memory_length)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(DivergenceKind::default())
    }
}

/// Configuration for the Monte Carlo information-gain simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainConfig {
    pub divergence: DivergenceKind,
    /// Rounds remembered when building seen and true distributions
    pub memory_length: usize,
    /// Draws averaged per additional-name count
    pub iterations: usize,
    /// Largest number of additional names simulated
    pub max_additional_names: usize,
    /// Sample the population pool with replacement
    pub with_replacement: bool,
    pub seed: Option<u64>,
}

impl GainConfig {
    /// Number of draws per point.
    pub const DEFAULT_ITERATIONS: usize = 200;

    /// A participant already sees two of the 24 names each round.
    pub const DEFAULT_MAX_ADDITIONAL_NAMES: usize = 22;

    pub fn new(divergence: DivergenceKind) -> Self {
        Self {
            divergence,
            memory_length: ROUNDS,
            iterations: Self::DEFAULT_ITERATIONS,
            max_additional_names: Self::DEFAULT_MAX_ADDITIONAL_NAMES,
            with_replacement: false,
            seed: None,
        }
    }

    pub fn with_memory_length(mut self, memory_length: usize) -> Self {
        self.memory_length = memory_length;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_max_additional_names(mut self, max_additional_names: usize) -> Self {
        self.max_additional_names = max_additional_names;
        self
    }

    pub fn with_replacement(mut self, with_replacement: bool) -> Self {
        self.with_replacement = with_replacement;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn memory_window(&self) -> Result<MemoryWindow> {
        MemoryWindow::new(self.memory_length)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if no draws would be made.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidConfiguration {
                message: "information gain needs at least one iteration".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GainConfig {
    fn default() -> Self {
        Self::new(DivergenceKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_whole_game() {
        let config = AnalysisConfig::default();
        assert_eq!(config.divergence, DivergenceKind::Js);
        assert_eq!(config.memory_window().unwrap().length(), ROUNDS);
        assert_eq!(config.additional_names, 1);

        let gain = GainConfig::default();
        assert_eq!(gain.iterations, 200);
        assert_eq!(gain.max_additional_names, 22);
        assert!(!gain.with_replacement);
    }

    #[test]
    fn zero_memory_is_rejected() {
        let config = AnalysisConfig::default().with_memory_length(0);
        assert!(matches!(
            config.memory_window(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn zero_iterations_are_rejected() {
        assert!(GainConfig::default().with_iterations(0).validate().is_err());
        assert!(GainConfig::default().validate().is_ok());
    }
}
