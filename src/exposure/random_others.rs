//! Random-other exposure: names from a uniformly random set of participants.

use rand::{RngCore, seq::IndexedRandom};

use super::{AlternateSources, ExposureContext, ExposureOutcome, SimulatorKind};
use crate::{Error, Result, ports::ExposureSimulator, types::ParticipantId};

/// Substitutes the names of `k` participants drawn uniformly at random,
/// fixed for the whole game.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOthersSimulator {
    only_non_neighbors: bool,
}

impl RandomOthersSimulator {
    /// Draw from non-neighbors only when `only_non_neighbors` is set,
    /// otherwise from every other participant.
    pub fn new(only_non_neighbors: bool) -> Self {
        Self { only_non_neighbors }
    }

    /// Participants eligible as sources for `participant`, ascending.
    pub fn candidates(
        &self,
        context: &ExposureContext<'_>,
        participant: ParticipantId,
    ) -> Vec<ParticipantId> {
        let game = context.game();
        if self.only_non_neighbors {
            game.network()
                .non_neighbors(participant)
                .into_iter()
                .filter(|&id| game.participant(id).is_ok())
                .collect()
        } else {
            game.participant_ids()
                .filter(|&id| id != participant)
                .collect()
        }
    }
}

impl ExposureSimulator for RandomOthersSimulator {
    fn kind(&self) -> SimulatorKind {
        SimulatorKind::RandomOthers
    }

    fn simulate(
        &self,
        context: &ExposureContext<'_>,
        participant: ParticipantId,
        rng: &mut dyn RngCore,
    ) -> Result<ExposureOutcome> {
        let record = context.game().participant(participant)?;
        let k = context.additional_names();
        let candidates = self.candidates(context, participant);
        if candidates.len() < k {
            return Err(Error::InsufficientAlternates {
                participant,
                required: k,
                available: candidates.len(),
            });
        }

        let mut sources: Vec<ParticipantId> =
            candidates.choose_multiple(rng, k).copied().collect();
        sources.sort_unstable();

        let alternative = context.substituted_series(record, &sources)?;
        context.outcome(record, alternative, AlternateSources::Fixed(sources))
    }
}
