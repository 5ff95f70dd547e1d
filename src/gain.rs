//! Monte Carlo estimate of how much additional names would help.
//!
//! For a seen distribution and the population's true distribution, the
//! curve's point `n` is the expected divergence after adding `n` names drawn
//! from the population pool. Point 0 is the exact divergence.

use std::collections::BTreeMap;

use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    app::GainConfig,
    distribution::CountDistribution,
    game::{Game, ParticipantRecord},
    types::{DivergenceKind, ParticipantId},
};

/// Expected divergence after `0..=max_additional_names` extra draws.
///
/// The pool holds every name token of `truth`, one entry per count.
///
/// # Errors
///
/// Returns [`Error::InsufficientPool`] if a draw asks for more names than the
/// pool holds (without replacement) or the pool is empty, and
/// [`Error::InvalidConfiguration`] for zero iterations.
///
/// # Examples
///
/// ```
/// use namegame::app::GainConfig;
/// use namegame::distribution::CountDistribution;
/// use namegame::gain::simulate_information_gains;
/// use namegame::identifiers::Name;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let seen = CountDistribution::from_names(&[Name::new("ann")]);
/// let truth = CountDistribution::from_names(&[Name::new("ann"), Name::new("bo")]);
/// let config = GainConfig::default().with_max_additional_names(2).with_iterations(10);
///
/// let curve = simulate_information_gains(&seen, &truth, &config, &mut StdRng::seed_from_u64(42))?;
/// assert_eq!(curve.len(), 3);
/// # Ok::<(), namegame::Error>(())
/// ```
pub fn simulate_information_gains<R: Rng + ?Sized>(
    seen: &CountDistribution,
    truth: &CountDistribution,
    config: &GainConfig,
    rng: &mut R,
) -> Result<Vec<f64>> {
    config.validate()?;
    let pool = truth.flatten();

    let mut curve = Vec::with_capacity(config.max_additional_names + 1);
    curve.push(config.divergence.between_counts(seen, truth)?);

    for requested in 1..=config.max_additional_names {
        if pool.is_empty() || (!config.with_replacement && pool.len() < requested) {
            return Err(Error::InsufficientPool {
                requested,
                available: pool.len(),
            });
        }

        let mut total = 0.0;
        for _ in 0..config.iterations {
            let mut sample = seen.clone();
            if config.with_replacement {
                for _ in 0..requested {
                    if let Some(name) = pool.choose(rng) {
                        sample.add(name);
                    }
                }
            } else {
                sample.extend(pool.choose_multiple(rng, requested));
            }
            total += config.divergence.between_counts(&sample, truth)?;
        }
        curve.push(total / config.iterations as f64);
    }

    Ok(curve)
}

/// Gain curves for every round of one participant, seen through the
/// participant's history without extra names.
pub fn participant_gain_curves<R: Rng + ?Sized>(
    game: &Game,
    record: &ParticipantRecord,
    config: &GainConfig,
    rng: &mut R,
) -> Result<Vec<Vec<f64>>> {
    let window = config.memory_window()?;
    let truth = game.true_distributions(window);
    let seen = window.apply(&record.history_without_extra());

    let curves = seen
        .iter()
        .zip(&truth)
        .map(|(seen, truth)| simulate_information_gains(seen, truth, config, rng))
        .collect::<Result<Vec<_>>>()?;
    debug!(participant = record.id, rounds = curves.len(), "simulated gain curves");
    Ok(curves)
}

/// Gain curves of all participants of a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GainSurface {
    pub divergence: DivergenceKind,
    pub iterations: usize,
    pub with_replacement: bool,
    /// Per participant: one curve per round.
    pub curves: BTreeMap<ParticipantId, Vec<Vec<f64>>>,
}

impl GainSurface {
    /// Simulate every participant of `game`.
    pub fn simulate<R: Rng + ?Sized>(game: &Game, config: &GainConfig, rng: &mut R) -> Result<Self> {
        let curves = game
            .participants()
            .map(|record| Ok((record.id, participant_gain_curves(game, record, config, rng)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self::from_curves(config, curves))
    }

    pub fn from_curves(
        config: &GainConfig,
        curves: BTreeMap<ParticipantId, Vec<Vec<f64>>>,
    ) -> Self {
        Self {
            divergence: config.divergence,
            iterations: config.iterations,
            with_replacement: config.with_replacement,
            curves,
        }
    }

    /// Mean across participants, indexed `[round - 1][additional names]`.
    pub fn mean(&self) -> Vec<Vec<f64>> {
        let Some(first) = self.curves.values().next() else {
            return Vec::new();
        };
        let count = self.curves.len() as f64;
        let mut mean: Vec<Vec<f64>> = first.iter().map(|curve| vec![0.0; curve.len()]).collect();
        for rounds in self.curves.values() {
            for (acc, curve) in mean.iter_mut().zip(rounds) {
                for (slot, value) in acc.iter_mut().zip(curve) {
                    *slot += value / count;
                }
            }
        }
        mean
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::identifiers::Name;

    fn counts(names: &[&str]) -> CountDistribution {
        CountDistribution::from_names(&names.iter().map(Name::new).collect::<Vec<_>>())
    }

    #[test]
    fn point_zero_is_the_exact_divergence() {
        let seen = counts(&["a"]);
        let truth = counts(&["a", "b", "b"]);
        let config = GainConfig::default()
            .with_max_additional_names(3)
            .with_iterations(5);
        let mut rng = StdRng::seed_from_u64(42);

        let curve = simulate_information_gains(&seen, &truth, &config, &mut rng).unwrap();
        let exact = DivergenceKind::Js.between_counts(&seen, &truth).unwrap();
        assert_eq!(curve.len(), 4);
        assert_eq!(curve[0], exact);
    }

    #[test]
    fn drawing_the_whole_pool_matches_the_truth() {
        let seen = CountDistribution::new();
        let truth = counts(&["a", "b", "b"]);
        let config = GainConfig::default()
            .with_max_additional_names(3)
            .with_iterations(10);
        let mut rng = StdRng::seed_from_u64(42);

        let curve = simulate_information_gains(&seen, &truth, &config, &mut rng).unwrap();
        assert!(curve[3].abs() < 1e-12);
    }

    #[test]
    fn oversized_draw_without_replacement_fails() {
        let seen = counts(&["a"]);
        let truth = counts(&["a", "b"]);
        let config = GainConfig::default().with_max_additional_names(3);
        let mut rng = StdRng::seed_from_u64(42);

        let result = simulate_information_gains(&seen, &truth, &config, &mut rng);
        assert!(matches!(
            result,
            Err(Error::InsufficientPool { requested: 3, available: 2 })
        ));

        let config = config.with_replacement(true).with_iterations(4);
        let curve = simulate_information_gains(&seen, &truth, &config, &mut rng).unwrap();
        assert_eq!(curve.len(), 4);
    }

    #[test]
    fn surface_mean_averages_participants() {
        let mut curves = BTreeMap::new();
        curves.insert(0, vec![vec![1.0, 0.5]]);
        curves.insert(1, vec![vec![0.0, 0.5]]);
        let surface = GainSurface::from_curves(&GainConfig::default(), curves);
        assert_eq!(surface.mean(), vec![vec![0.5, 0.5]]);
    }
}
