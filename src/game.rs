//! Participant records and the per-game view the analyses run against.
//!
//! [`GameInput`] is the serialized form handed over by the history and
//! topology providers; [`Game`] validates it and exposes the derived
//! histories every analysis needs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    Error, Result,
    distribution::CountDistribution,
    identifiers::Name,
    memory::{MemoryWindow, ObservationHistory},
    network::SocialNetwork,
    types::{GameMetadata, PARTICIPANT_SLOTS, ParticipantId},
};

/// What one participant did and saw in one round, as supplied by the
/// history provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInput {
    /// Name the participant played.
    pub name: Name,
    /// Name the round's partner played.
    pub partner_name: Name,
    /// Network identity of the round's partner.
    pub partner: ParticipantId,
    /// Names shown through the unstructured channel.
    #[serde(default)]
    pub extra_names: Vec<Name>,
}

/// One participant's full game, as supplied by the history provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantInput {
    pub id: ParticipantId,
    pub rounds: Vec<RoundInput>,
}

/// A complete game as supplied by the providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInput {
    #[serde(default)]
    pub metadata: GameMetadata,
    pub participants: Vec<ParticipantInput>,
    /// Pairing edges for each round; nodes at or above the slot count are
    /// placeholders and are discarded.
    pub pairings: Vec<Vec<(ParticipantId, ParticipantId)>>,
}

/// Typed per-participant record. All per-round vectors are indexed from 0
/// for round 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub id: ParticipantId,
    pub names_played: Vec<Name>,
    pub partner_names: Vec<Name>,
    pub partners: Vec<ParticipantId>,
    pub extra_names: Vec<Vec<Name>>,
}

impl ParticipantRecord {
    pub fn from_input(input: &ParticipantInput) -> Self {
        Self {
            id: input.id,
            names_played: input.rounds.iter().map(|r| r.name.clone()).collect(),
            partner_names: input
                .rounds
                .iter()
                .map(|r| r.partner_name.clone())
                .collect(),
            partners: input.rounds.iter().map(|r| r.partner).collect(),
            extra_names: input
                .rounds
                .iter()
                .map(|r| r.extra_names.clone())
                .collect(),
        }
    }

    pub fn num_rounds(&self) -> usize {
        self.names_played.len()
    }

    /// Own name and partner's name, per round.
    pub fn history_without_extra(&self) -> ObservationHistory {
        self.names_played
            .iter()
            .zip(&self.partner_names)
            .map(|(own, partner)| vec![own.clone(), partner.clone()])
            .collect()
    }

    /// Own name, partner's name and the extra names, per round.
    pub fn history_with_extra(&self) -> ObservationHistory {
        self.history_without_extra().with_additions(&self.extra_names)
    }
}

/// A validated game: participants, the network and the round count.
#[derive(Debug, Clone)]
pub struct Game {
    metadata: GameMetadata,
    participants: BTreeMap<ParticipantId, ParticipantRecord>,
    network: SocialNetwork,
    rounds: usize,
}

impl Game {
    /// Assemble a game from participant records and a network.
    ///
    /// Every participant becomes a network node, even one that was never
    /// paired.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoundCountMismatch`] if participants disagree on the
    /// number of rounds or a record's per-round vectors differ in length, and
    /// [`Error::InvalidConfiguration`] for a repeated id or one outside the
    /// participant slots.
    pub fn new(
        participants: impl IntoIterator<Item = ParticipantRecord>,
        mut network: SocialNetwork,
    ) -> Result<Self> {
        let mut by_id = BTreeMap::new();
        for record in participants {
            if record.id >= PARTICIPANT_SLOTS {
                return Err(Error::InvalidConfiguration {
                    message: format!(
                        "participant {} is outside the {PARTICIPANT_SLOTS} participant slots",
                        record.id
                    ),
                });
            }
            let id = record.id;
            if by_id.insert(id, record).is_some() {
                return Err(Error::InvalidConfiguration {
                    message: format!("participant {id} appears more than once"),
                });
            }
        }
        let participants = by_id;

        let rounds = participants
            .values()
            .next()
            .map(ParticipantRecord::num_rounds)
            .unwrap_or(0);

        for record in participants.values() {
            let lengths = [
                record.names_played.len(),
                record.partner_names.len(),
                record.partners.len(),
                record.extra_names.len(),
            ];
            if let Some(&got) = lengths.iter().find(|&&len| len != rounds) {
                return Err(Error::RoundCountMismatch {
                    participant: record.id,
                    expected: rounds,
                    got,
                });
            }
            network.add_participant(record.id);
        }

        Ok(Self {
            metadata: GameMetadata::default(),
            participants,
            network,
            rounds,
        })
    }

    /// Build a game from provider input.
    pub fn from_input(input: &GameInput) -> Result<Self> {
        let network = SocialNetwork::from_pairings(input.pairings.iter().map(Vec::as_slice));
        let records = input.participants.iter().map(ParticipantRecord::from_input);
        let game = Self::new(records, network)?.with_metadata(input.metadata.clone());
        info!(
            label = game.metadata.label.as_deref().unwrap_or("unlabelled"),
            participants = game.participants.len(),
            rounds = game.rounds,
            edges = game.network.edge_count(),
            "loaded game"
        );
        Ok(game)
    }

    pub fn with_metadata(mut self, metadata: GameMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn metadata(&self) -> &GameMetadata {
        &self.metadata
    }

    pub fn network(&self) -> &SocialNetwork {
        &self.network
    }

    pub fn num_rounds(&self) -> usize {
        self.rounds
    }

    pub fn num_participants(&self) -> usize {
        self.participants.len()
    }

    /// Participant ids, ascending.
    pub fn participant_ids(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.participants.keys().copied()
    }

    pub fn participants(&self) -> impl Iterator<Item = &ParticipantRecord> {
        self.participants.values()
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownParticipant`] if `id` did not play.
    pub fn participant(&self, id: ParticipantId) -> Result<&ParticipantRecord> {
        self.participants
            .get(&id)
            .ok_or(Error::UnknownParticipant { participant: id })
    }

    /// Every name played by anyone, per round.
    pub fn population_history(&self) -> ObservationHistory {
        (0..self.rounds)
            .map(|index| {
                self.participants
                    .values()
                    .map(|record| record.names_played[index].clone())
                    .collect()
            })
            .collect()
    }

    /// The true name distribution at every round under `window`.
    pub fn true_distributions(&self, window: MemoryWindow) -> Vec<CountDistribution> {
        window.apply(&self.population_history())
    }

    /// Names played by `sources` in each round, one entry per round.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParticipant`] for a source that did not play.
    pub fn names_played_by(&self, sources: &[ParticipantId]) -> Result<Vec<Vec<Name>>> {
        let records = sources
            .iter()
            .map(|&id| self.participant(id))
            .collect::<Result<Vec<_>>>()?;
        Ok((0..self.rounds)
            .map(|index| {
                records
                    .iter()
                    .map(|record| record.names_played[index].clone())
                    .collect()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(name: &str, partner_name: &str, partner: ParticipantId, extra: &[&str]) -> RoundInput {
        RoundInput {
            name: Name::new(name),
            partner_name: Name::new(partner_name),
            partner,
            extra_names: extra.iter().map(Name::new).collect(),
        }
    }

    fn two_player_input() -> GameInput {
        GameInput {
            metadata: GameMetadata::default(),
            participants: vec![
                ParticipantInput {
                    id: 0,
                    rounds: vec![round("Ann", "bo", 1, &["cy"]), round("ann", "ann", 1, &[])],
                },
                ParticipantInput {
                    id: 1,
                    rounds: vec![round("bo", "ann", 0, &[]), round("ann", "ann", 0, &["dee"])],
                },
            ],
            pairings: vec![vec![(0, 1), (5, 40)], vec![(1, 0)]],
        }
    }

    #[test]
    fn histories_with_and_without_extra_names() {
        let game = Game::from_input(&two_player_input()).unwrap();
        let record = game.participant(0).unwrap();

        let without = record.history_without_extra();
        assert_eq!(without.round(1).unwrap(), &[Name::new("ann"), Name::new("bo")]);

        let with = record.history_with_extra();
        assert_eq!(with.round(1).unwrap().len(), 3);
        assert_eq!(with.round(2).unwrap().len(), 2);
    }

    #[test]
    fn population_history_collects_every_play() {
        let game = Game::from_input(&two_player_input()).unwrap();
        let population = game.population_history();
        assert_eq!(population.round(1).unwrap(), &[Name::new("ann"), Name::new("bo")]);

        let truth = game.true_distributions(MemoryWindow::full());
        assert_eq!(truth[1].count("ann"), 3);
    }

    #[test]
    fn placeholder_pairings_do_not_enter_the_network() {
        let game = Game::from_input(&two_player_input()).unwrap();
        assert_eq!(game.network().participants(), vec![0, 1]);
    }

    #[test]
    fn ragged_records_are_rejected() {
        let mut input = two_player_input();
        input.participants[1].rounds.pop();
        assert!(matches!(
            Game::from_input(&input),
            Err(Error::RoundCountMismatch { participant: 1, expected: 2, got: 1 })
        ));
    }

    #[test]
    fn repeated_participant_ids_are_rejected() {
        let mut input = two_player_input();
        input.participants[1].id = 0;
        assert!(matches!(
            Game::from_input(&input),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn participants_outside_the_slots_are_rejected() {
        let mut input = two_player_input();
        input.participants[1].id = PARTICIPANT_SLOTS;
        assert!(matches!(
            Game::from_input(&input),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn names_played_by_sources_are_round_aligned() {
        let game = Game::from_input(&two_player_input()).unwrap();
        let names = game.names_played_by(&[1]).unwrap();
        assert_eq!(names, vec![vec![Name::new("bo")], vec![Name::new("ann")]]);
        assert!(game.names_played_by(&[7]).is_err());
    }
}
