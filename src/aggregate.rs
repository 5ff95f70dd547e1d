//! Aggregation of per-game results by experimental condition.
//!
//! Each analysed game contributes its per-participant series to the bucket of
//! its `(network type, outcome)` condition. Summaries are computed per round
//! across every participant of every game in the bucket.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::{
    Error, Result,
    exposure::{ExposureReport, SimulatorKind},
    first_match::ExposureTiming,
    types::{GameMetadata, NetworkType, Outcome, ParticipantId},
};

/// Experimental condition a game belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Condition {
    pub network_type: NetworkType,
    pub outcome: Outcome,
}

impl Condition {
    pub fn new(network_type: NetworkType, outcome: Outcome) -> Self {
        Self {
            network_type,
            outcome,
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the metadata lacks the
    /// network type or the outcome.
    pub fn of(metadata: &GameMetadata) -> Result<Self> {
        match (metadata.network_type, metadata.outcome) {
            (Some(network_type), Some(outcome)) => Ok(Self::new(network_type, outcome)),
            _ => Err(Error::InvalidConfiguration {
                message: format!(
                    "game {} needs a network type and an outcome to be aggregated",
                    metadata.label.as_deref().unwrap_or("<unlabelled>")
                ),
            }),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network_type, self.outcome)
    }
}

/// Statistics of one round across participants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// 1-based round.
    pub round: usize,
    pub samples: usize,
    pub mean: f64,
    /// Sample standard deviation; 0 with fewer than two samples.
    pub std_dev: f64,
    /// Standard error of the mean.
    pub sem: f64,
    pub max: f64,
}

/// Per-round statistics over a set of series indexed from 0 for round 1.
///
/// Shorter series simply contribute nothing to later rounds.
///
/// # Examples
///
/// ```
/// use namegame::aggregate::summarize_rounds;
///
/// let summary = summarize_rounds(&[vec![1.0, 2.0], vec![3.0, 2.0]]);
/// assert_eq!(summary[0].mean, 2.0);
/// assert_eq!(summary[1].std_dev, 0.0);
/// assert_eq!(summary[0].max, 3.0);
/// ```
pub fn summarize_rounds(series: &[Vec<f64>]) -> Vec<RoundSummary> {
    let rounds = series.iter().map(Vec::len).max().unwrap_or(0);
    (0..rounds)
        .map(|index| {
            let values: Vec<f64> = series
                .iter()
                .filter_map(|values| values.get(index).copied())
                .collect();
            let samples = values.len();
            let std_dev = if samples > 1 {
                values.iter().std_dev()
            } else {
                0.0
            };
            RoundSummary {
                round: index + 1,
                samples,
                mean: values.iter().mean(),
                std_dev,
                sem: std_dev / (samples as f64).sqrt(),
                max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            }
        })
        .collect()
}

/// Raw series collected for one simulator within one condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    pub differences: Vec<Vec<f64>>,
    pub baselines: Vec<Vec<f64>>,
    pub ratios: Vec<Vec<f64>>,
}

impl SeriesSet {
    fn extend(&mut self, report: &ExposureReport) {
        for outcome in report.outcomes.values() {
            self.differences.push(outcome.differences.clone());
            self.baselines.push(outcome.baseline.clone());
            self.ratios.push(outcome.ratios.clone());
        }
    }
}

/// Collected results of one condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionSeries {
    pub games: usize,
    pub simulators: BTreeMap<SimulatorKind, SeriesSet>,
    pub extra_gains: Vec<Vec<f64>>,
    pub timings: Vec<ExposureTiming>,
}

/// Accumulates per-game results keyed by condition.
///
/// # Examples
///
/// ```
/// use namegame::aggregate::{Aggregator, Condition};
/// use namegame::types::{NetworkType, Outcome};
///
/// let mut aggregator = Aggregator::new();
/// let condition = Condition::new(NetworkType::Lattice, Outcome::Convention);
/// aggregator.add_game(condition);
/// assert_eq!(aggregator.summary().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    conditions: BTreeMap<Condition, ConditionSeries>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more game under `condition`.
    pub fn add_game(&mut self, condition: Condition) {
        self.conditions.entry(condition).or_default().games += 1;
    }

    pub fn add_report(&mut self, condition: Condition, report: &ExposureReport) {
        self.conditions
            .entry(condition)
            .or_default()
            .simulators
            .entry(report.simulator)
            .or_default()
            .extend(report);
    }

    pub fn add_extra_gain(
        &mut self,
        condition: Condition,
        gains: &BTreeMap<ParticipantId, Vec<f64>>,
    ) {
        self.conditions
            .entry(condition)
            .or_default()
            .extra_gains
            .extend(gains.values().cloned());
    }

    pub fn add_timing(&mut self, condition: Condition, timing: ExposureTiming) {
        self.conditions
            .entry(condition)
            .or_default()
            .timings
            .push(timing);
    }

    /// Per-condition statistics, in condition order.
    pub fn summary(&self) -> Vec<ConditionSummary> {
        self.conditions
            .iter()
            .map(|(condition, series)| ConditionSummary::of(*condition, series))
            .collect()
    }
}

/// Per-round statistics of one simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorSummary {
    pub differences: Vec<RoundSummary>,
    pub baselines: Vec<RoundSummary>,
    pub ratios: Vec<RoundSummary>,
}

/// Aggregated view of one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSummary {
    pub network_type: NetworkType,
    pub outcome: Outcome,
    pub games: usize,
    pub simulators: BTreeMap<SimulatorKind, SimulatorSummary>,
    pub extra_gain: Vec<RoundSummary>,
    /// Mean exposure timing across games, if any timing was recorded.
    pub timing: Option<ExposureTiming>,
}

impl ConditionSummary {
    fn of(condition: Condition, series: &ConditionSeries) -> Self {
        let simulators = series
            .simulators
            .iter()
            .map(|(kind, set)| {
                (
                    *kind,
                    SimulatorSummary {
                        differences: summarize_rounds(&set.differences),
                        baselines: summarize_rounds(&set.baselines),
                        ratios: summarize_rounds(&set.ratios),
                    },
                )
            })
            .collect();

        let timing = (!series.timings.is_empty()).then(|| {
            let count = series.timings.len() as f64;
            ExposureTiming {
                unstructured_before_structured: series
                    .timings
                    .iter()
                    .map(|timing| timing.unstructured_before_structured)
                    .sum::<f64>()
                    / count,
                only_unstructured: series
                    .timings
                    .iter()
                    .map(|timing| timing.only_unstructured)
                    .sum::<f64>()
                    / count,
            }
        });

        Self {
            network_type: condition.network_type,
            outcome: condition.outcome,
            games: series.games,
            simulators,
            extra_gain: summarize_rounds(&series.extra_gains),
            timing,
        }
    }
}
