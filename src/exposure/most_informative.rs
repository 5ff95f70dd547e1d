//! Most-informative non-neighbor exposure, found by exhaustive search.

use rand::RngCore;
use tracing::debug;

use super::{AlternateSources, ExposureContext, ExposureOutcome, SimulatorKind};
use crate::{
    Error, Result,
    game::ParticipantRecord,
    ports::ExposureSimulator,
    types::ParticipantId,
    utils::Combinations,
};

/// Substitutes the `k` non-neighbors whose names would have brought the ego
/// closest to the population over the whole game.
///
/// Every `k`-combination of non-neighbors is scored by its summed divergence.
/// Non-neighbors are taken in ascending id order and combinations in
/// lexicographic order; on a tie the first combination wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostInformativeSimulator;

/// The winning combination of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct BestCombination {
    pub sources: Vec<ParticipantId>,
    pub series: Vec<f64>,
    pub total: f64,
}

impl MostInformativeSimulator {
    /// Search every `k`-combination of `record`'s non-neighbors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientAlternates`] if there are fewer than `k`
    /// non-neighbors.
    pub fn search(
        &self,
        context: &ExposureContext<'_>,
        record: &ParticipantRecord,
    ) -> Result<BestCombination> {
        let candidates = context.game().network().non_neighbors(record.id);
        let k = context.additional_names();

        let mut best: Option<BestCombination> = None;
        for sources in Combinations::of(&candidates, k) {
            let series = context.substituted_series(record, &sources)?;
            let total: f64 = series.iter().sum();
            if best.as_ref().is_none_or(|current| total < current.total) {
                best = Some(BestCombination {
                    sources,
                    series,
                    total,
                });
            }
        }

        let best = best.ok_or(Error::InsufficientAlternates {
            participant: record.id,
            required: k,
            available: candidates.len(),
        })?;
        debug!(
            participant = record.id,
            sources = ?best.sources,
            total = best.total,
            "most informative combination"
        );
        Ok(best)
    }
}

impl ExposureSimulator for MostInformativeSimulator {
    fn kind(&self) -> SimulatorKind {
        SimulatorKind::MostInformative
    }

    fn simulate(
        &self,
        context: &ExposureContext<'_>,
        participant: ParticipantId,
        _rng: &mut dyn RngCore,
    ) -> Result<ExposureOutcome> {
        let record = context.game().participant(participant)?;
        let best = self.search(context, record)?;
        context.outcome(record, best.series, AlternateSources::Fixed(best.sources))
    }
}
