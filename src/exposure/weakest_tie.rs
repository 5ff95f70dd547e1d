//! Weakest-tie exposure: names from the most distant participants.

use rand::RngCore;

use super::{AlternateSources, ExposureContext, ExposureOutcome, SimulatorKind};
use crate::{Result, ports::ExposureSimulator, types::ParticipantId};

/// Substitutes the names played by the ego's `k` weakest ties.
///
/// The ties are chosen once per participant and reused for every round.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeakestTieSimulator;

impl ExposureSimulator for WeakestTieSimulator {
    fn kind(&self) -> SimulatorKind {
        SimulatorKind::WeakestTie
    }

    fn simulate(
        &self,
        context: &ExposureContext<'_>,
        participant: ParticipantId,
        rng: &mut dyn RngCore,
    ) -> Result<ExposureOutcome> {
        let record = context.game().participant(participant)?;
        let ties = context.game().network().weakest_ties(
            participant,
            context.additional_names(),
            rng,
        )?;
        let alternative = context.substituted_series(record, &ties)?;
        context.outcome(record, alternative, AlternateSources::Fixed(ties))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        app::AnalysisConfig,
        game::{Game, ParticipantRecord},
        identifiers::Name,
        network::SocialNetwork,
    };

    fn record(id: ParticipantId, names: &[&str], partners: &[ParticipantId]) -> ParticipantRecord {
        ParticipantRecord {
            id,
            names_played: names.iter().map(Name::new).collect(),
            partner_names: names.iter().map(Name::new).collect(),
            partners: partners.to_vec(),
            extra_names: vec![Vec::new(); names.len()],
        }
    }

    #[test]
    fn far_end_of_a_path_supplies_the_names() {
        let network = SocialNetwork::from_edges(&[(0, 1), (1, 2)]);
        let game = Game::new(
            [
                record(0, &["a", "a"], &[1, 1]),
                record(1, &["b", "b"], &[0, 2]),
                record(2, &["c", "d"], &[1, 1]),
            ],
            network,
        )
        .unwrap();
        let config = AnalysisConfig::default().with_additional_names(1);
        let context = ExposureContext::new(&game, &config).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let outcome = WeakestTieSimulator.simulate(&context, 0, &mut rng).unwrap();

        assert_eq!(outcome.alternates, AlternateSources::Fixed(vec![2]));
        assert_eq!(outcome.differences.len(), 2);
        assert!(outcome.differences.iter().all(|d| d.is_finite()));
    }
}
