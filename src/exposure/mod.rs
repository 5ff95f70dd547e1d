//! Counterfactual exposure comparisons.
//!
//! Each strategy replaces a participant's real extra names with names drawn
//! from alternate sources and measures, round by round, how far the
//! resulting seen distribution sits from the population's.
//!
//! - [`WeakestTieSimulator`]: the `k` most distant participants in the network
//! - [`MostInformativeSimulator`]: the best `k` non-neighbors in hindsight
//! - [`RandomOthersSimulator`]: a random `k` other participants
//! - [`SpareAlterSimulator`]: `k` neighbors other than the round's partner

pub mod most_informative;
pub mod random_others;
pub mod spare_alter;
pub mod weakest_tie;

use std::{collections::BTreeMap, fmt, str::FromStr};

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    app::AnalysisConfig,
    distribution::CountDistribution,
    game::{Game, ParticipantRecord},
    memory::{MemoryWindow, ObservationHistory},
    ports::ExposureSimulator,
    types::{DivergenceKind, ParticipantId},
    utils::{difference, reduction_ratio},
};

pub use most_informative::MostInformativeSimulator;
pub use random_others::RandomOthersSimulator;
pub use spare_alter::SpareAlterSimulator;
pub use weakest_tie::WeakestTieSimulator;

/// The available exposure strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimulatorKind {
    WeakestTie,
    MostInformative,
    RandomOthers,
    SpareAlter,
}

impl SimulatorKind {
    pub const ALL: [SimulatorKind; 4] = [
        SimulatorKind::WeakestTie,
        SimulatorKind::MostInformative,
        SimulatorKind::RandomOthers,
        SimulatorKind::SpareAlter,
    ];

    /// Build the simulator for this strategy.
    pub fn simulator(self, config: &AnalysisConfig) -> Box<dyn ExposureSimulator> {
        match self {
            SimulatorKind::WeakestTie => Box::new(WeakestTieSimulator),
            SimulatorKind::MostInformative => Box::new(MostInformativeSimulator),
            SimulatorKind::RandomOthers => Box::new(RandomOthersSimulator::new(
                config.only_non_neighbors,
            )),
            SimulatorKind::SpareAlter => Box::new(SpareAlterSimulator),
        }
    }
}

impl fmt::Display for SimulatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SimulatorKind::WeakestTie => "weakest-tie",
            SimulatorKind::MostInformative => "most-informative",
            SimulatorKind::RandomOthers => "random-others",
            SimulatorKind::SpareAlter => "spare-alter",
        };
        f.write_str(label)
    }
}

impl FromStr for SimulatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalised = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalised.as_str() {
            "weakest-tie" | "weakest" => Ok(SimulatorKind::WeakestTie),
            "most-informative" | "informative" => Ok(SimulatorKind::MostInformative),
            "random-others" | "random" => Ok(SimulatorKind::RandomOthers),
            "spare-alter" | "spare" => Ok(SimulatorKind::SpareAlter),
            _ => Err(Error::ParseSimulatorKind {
                input: s.to_string(),
                expected: "weakest-tie, most-informative, random-others, spare-alter".to_string(),
            }),
        }
    }
}

/// Who supplied the substituted names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "participants")]
pub enum AlternateSources {
    /// The same sources in every round.
    Fixed(Vec<ParticipantId>),
    /// Sources chosen afresh each round, indexed from 0 for round 1.
    PerRound(Vec<Vec<ParticipantId>>),
}

impl AlternateSources {
    /// Sources used in `round` (1-based).
    pub fn in_round(&self, round: usize) -> &[ParticipantId] {
        match self {
            AlternateSources::Fixed(sources) => sources,
            AlternateSources::PerRound(rounds) => round
                .checked_sub(1)
                .and_then(|index| rounds.get(index))
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }
}

/// Divergence series of a participant's real histories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// Own and partner's names only.
    pub without_extra: Vec<f64>,
    /// Own, partner's and the extra names.
    pub with_extra: Vec<f64>,
}

/// Result of one strategy for one participant. Series are indexed from 0
/// for round 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureOutcome {
    pub participant: ParticipantId,
    /// Divergence with the alternate names in place of the extra names.
    pub alternative: Vec<f64>,
    /// `alternative - with_extra`, per round.
    pub differences: Vec<f64>,
    /// Divergence without any extra names.
    pub baseline: Vec<f64>,
    /// `1 - with_extra / without_extra`, or 0 where the baseline is 0.
    pub ratios: Vec<f64>,
    pub alternates: AlternateSources,
}

/// One strategy run over every participant of a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExposureReport {
    pub simulator: SimulatorKind,
    pub divergence: DivergenceKind,
    pub memory_length: usize,
    pub additional_names: usize,
    pub outcomes: BTreeMap<ParticipantId, ExposureOutcome>,
}

impl ExposureReport {
    /// Mean difference per round across participants.
    pub fn mean_differences(&self) -> Vec<f64> {
        let rounds = self
            .outcomes
            .values()
            .map(|outcome| outcome.differences.len())
            .max()
            .unwrap_or(0);
        let count = self.outcomes.len() as f64;
        (0..rounds)
            .map(|index| {
                self.outcomes
                    .values()
                    .filter_map(|outcome| outcome.differences.get(index))
                    .sum::<f64>()
                    / count
            })
            .collect()
    }
}

/// Everything a strategy needs to score a substituted history.
#[derive(Debug, Clone)]
pub struct ExposureContext<'a> {
    game: &'a Game,
    truth: Vec<CountDistribution>,
    window: MemoryWindow,
    divergence: DivergenceKind,
    additional_names: usize,
}

impl<'a> ExposureContext<'a> {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a zero memory length.
    pub fn new(game: &'a Game, config: &AnalysisConfig) -> Result<Self> {
        let window = config.memory_window()?;
        Ok(Self {
            game,
            truth: game.true_distributions(window),
            window,
            divergence: config.divergence,
            additional_names: config.additional_names,
        })
    }

    pub fn game(&self) -> &'a Game {
        self.game
    }

    pub fn window(&self) -> MemoryWindow {
        self.window
    }

    pub fn divergence(&self) -> DivergenceKind {
        self.divergence
    }

    /// Number of alternate sources per substitution.
    pub fn additional_names(&self) -> usize {
        self.additional_names
    }

    /// Windowed divergence of `history` from the population, per round.
    pub fn divergence_series(&self, history: &ObservationHistory) -> Result<Vec<f64>> {
        self.window
            .apply(history)
            .iter()
            .zip(&self.truth)
            .map(|(seen, truth)| self.divergence.between_counts(seen, truth))
            .collect()
    }

    pub fn baseline(&self, record: &ParticipantRecord) -> Result<Baseline> {
        Ok(Baseline {
            without_extra: self.divergence_series(&record.history_without_extra())?,
            with_extra: self.divergence_series(&record.history_with_extra())?,
        })
    }

    /// Divergence series when `sources` supply the extra names of every
    /// round, using the names they played that same round.
    pub fn substituted_series(
        &self,
        record: &ParticipantRecord,
        sources: &[ParticipantId],
    ) -> Result<Vec<f64>> {
        let additions = self.game.names_played_by(sources)?;
        self.divergence_series(&record.history_without_extra().with_additions(&additions))
    }

    /// Assemble the outcome for `record` from its alternative series.
    pub fn outcome(
        &self,
        record: &ParticipantRecord,
        alternative: Vec<f64>,
        alternates: AlternateSources,
    ) -> Result<ExposureOutcome> {
        let baseline = self.baseline(record)?;
        Ok(ExposureOutcome {
            participant: record.id,
            differences: difference(&alternative, &baseline.with_extra),
            ratios: reduction_ratio(&baseline.with_extra, &baseline.without_extra),
            baseline: baseline.without_extra,
            alternative,
            alternates,
        })
    }

    /// Information gained from the real extra names: `without - with`, per
    /// participant and round.
    pub fn extra_name_gain(&self) -> Result<BTreeMap<ParticipantId, Vec<f64>>> {
        self.game
            .participants()
            .map(|record| {
                let baseline = self.baseline(record)?;
                Ok((
                    record.id,
                    difference(&baseline.without_extra, &baseline.with_extra),
                ))
            })
            .collect()
    }
}

/// Run `simulator` for every participant, in ascending id order.
///
/// # Errors
///
/// Fails on the first participant the simulator cannot handle.
pub fn run(
    simulator: &dyn ExposureSimulator,
    context: &ExposureContext<'_>,
    rng: &mut dyn RngCore,
) -> Result<ExposureReport> {
    let kind = simulator.kind();
    let mut outcomes = BTreeMap::new();
    for participant in context.game().participant_ids() {
        let outcome = simulator.simulate(context, participant, rng)?;
        debug!(
            simulator = %kind,
            participant,
            alternates = ?outcome.alternates,
            "simulated exposure"
        );
        outcomes.insert(participant, outcome);
    }

    info!(
        simulator = %kind,
        divergence = %context.divergence(),
        participants = outcomes.len(),
        "exposure comparison finished"
    );

    Ok(ExposureReport {
        simulator: kind,
        divergence: context.divergence(),
        memory_length: context.window().length(),
        additional_names: context.additional_names(),
        outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulator_kind_round_trips_through_display() {
        for kind in SimulatorKind::ALL {
            assert_eq!(kind.to_string().parse::<SimulatorKind>().unwrap(), kind);
        }
        assert_eq!(
            "spare_alter".parse::<SimulatorKind>().unwrap(),
            SimulatorKind::SpareAlter
        );
        assert!("nearest".parse::<SimulatorKind>().is_err());
    }

    #[test]
    fn mean_differences_average_across_participants() {
        let outcome = |participant, differences: Vec<f64>| ExposureOutcome {
            participant,
            alternative: differences.clone(),
            baseline: vec![0.0; differences.len()],
            ratios: vec![0.0; differences.len()],
            differences,
            alternates: AlternateSources::Fixed(vec![]),
        };
        let report = ExposureReport {
            simulator: SimulatorKind::WeakestTie,
            divergence: DivergenceKind::Js,
            memory_length: 25,
            additional_names: 1,
            outcomes: BTreeMap::from([
                (0, outcome(0, vec![0.5, -1.0])),
                (1, outcome(1, vec![1.5, 0.0])),
            ]),
        };
        assert_eq!(report.mean_differences(), vec![1.0, -0.5]);

        let empty = ExposureReport {
            outcomes: BTreeMap::new(),
            ..report
        };
        assert!(empty.mean_differences().is_empty());
    }

    #[test]
    fn per_round_sources_are_looked_up_by_round() {
        let sources = AlternateSources::PerRound(vec![vec![1], vec![2, 3]]);
        assert_eq!(sources.in_round(2), &[2, 3]);
        assert!(sources.in_round(0).is_empty());
        assert!(sources.in_round(3).is_empty());

        let fixed = AlternateSources::Fixed(vec![4]);
        assert_eq!(fixed.in_round(17), &[4]);
    }
}
