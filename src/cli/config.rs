//! Shared arguments for CLI commands

use clap::Args;

use crate::{app::AnalysisConfig, types::DivergenceKind};

/// Analysis options shared by the exposure commands
#[derive(Args, Debug, Clone)]
pub struct AnalysisArgs {
    /// Divergence to compute (kl or js)
    #[arg(long, short = 'd', default_value = "js")]
    pub divergence: DivergenceKind,

    /// Rounds remembered by each participant
    #[arg(long, short = 'm', default_value_t = crate::types::ROUNDS)]
    pub memory: usize,

    /// Alternate names substituted per round
    #[arg(long, short = 'k', default_value_t = 1)]
    pub additional_names: usize,

    /// Draw random others from non-neighbors only
    #[arg(long)]
    pub only_non_neighbors: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl AnalysisArgs {
    pub fn config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::new(self.divergence)
            .with_memory_length(self.memory)
            .with_additional_names(self.additional_names)
            .with_only_non_neighbors(self.only_non_neighbors);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}
