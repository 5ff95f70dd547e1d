//! Spare-alter exposure: names from neighbors the ego was not paired with.

use std::collections::BTreeSet;

use rand::{RngCore, seq::IndexedRandom};

use super::{AlternateSources, ExposureContext, ExposureOutcome, SimulatorKind};
use crate::{
    Error, Result, identifiers::Name, network::SocialNetwork, ports::ExposureSimulator,
    types::ParticipantId,
};

/// Substitutes, round by round, the names played by `k` of the ego's other
/// neighbors in that same round.
///
/// When the ego has fewer than `k` neighbors besides the round's partner the
/// search widens breadth-first through neighbors of neighbors, starting from
/// the spare alters and reaching the partner's neighbors last.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpareAlterSimulator;

/// Pick `k` alternates for `ego` in a round where it was paired with
/// `partner`.
///
/// # Errors
///
/// Returns [`Error::InsufficientAlternates`] if the whole reachable network
/// holds fewer than `k` candidates.
pub fn spare_alternates<R: RngCore + ?Sized>(
    network: &SocialNetwork,
    ego: ParticipantId,
    partner: ParticipantId,
    k: usize,
    rng: &mut R,
) -> Result<Vec<ParticipantId>> {
    let neighbors = network.neighbors(ego);
    let alters: Vec<ParticipantId> = neighbors
        .iter()
        .copied()
        .filter(|&node| node != partner)
        .collect();
    if alters.len() >= k {
        return Ok(alters.choose_multiple(rng, k).copied().collect());
    }

    let mut found = alters;
    let mut visited: BTreeSet<ParticipantId> = neighbors.iter().copied().collect();
    visited.insert(ego);
    // The spare alters' own neighborhoods are searched before the partner's.
    let mut frontier = found.clone();
    if neighbors.contains(&partner) {
        frontier.push(partner);
    }

    while found.len() < k && !frontier.is_empty() {
        let mut next = Vec::new();
        for node in &frontier {
            for candidate in network.neighbors(*node) {
                if visited.insert(candidate) {
                    found.push(candidate);
                    next.push(candidate);
                }
            }
        }
        frontier = next;
    }

    if found.len() < k {
        return Err(Error::InsufficientAlternates {
            participant: ego,
            required: k,
            available: found.len(),
        });
    }
    found.truncate(k);
    Ok(found)
}

impl ExposureSimulator for SpareAlterSimulator {
    fn kind(&self) -> SimulatorKind {
        SimulatorKind::SpareAlter
    }

    fn simulate(
        &self,
        context: &ExposureContext<'_>,
        participant: ParticipantId,
        rng: &mut dyn RngCore,
    ) -> Result<ExposureOutcome> {
        let game = context.game();
        let record = game.participant(participant)?;
        let k = context.additional_names();

        let mut sources = Vec::with_capacity(record.num_rounds());
        let mut additions: Vec<Vec<Name>> = Vec::with_capacity(record.num_rounds());
        for (index, &partner) in record.partners.iter().enumerate() {
            let alternates = spare_alternates(game.network(), participant, partner, k, rng)?;
            let names = alternates
                .iter()
                .map(|&id| Ok(game.participant(id)?.names_played[index].clone()))
                .collect::<Result<Vec<_>>>()?;
            additions.push(names);
            sources.push(alternates);
        }

        let history = record.history_without_extra().with_additions(&additions);
        let alternative = context.divergence_series(&history)?;
        context.outcome(record, alternative, AlternateSources::PerRound(sources))
    }
}
