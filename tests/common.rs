//! Common test utilities for the namegame test suite.
//!
//! Builders for small synthetic games and random inputs.

#![allow(dead_code)]

use rand::{Rng, rngs::StdRng, seq::IndexedRandom};

use namegame::{
    CountDistribution, Game, GameInput, Name, ObservationHistory, ParticipantId, SocialNetwork,
    game::{ParticipantInput, ParticipantRecord, RoundInput},
};

/// Names drawn by the random builders.
pub const NAMES: [&str; 6] = ["alice", "bob", "carol", "dave", "erin", "frank"];

pub fn names(values: &[&str]) -> Vec<Name> {
    values.iter().map(Name::new).collect()
}

/// A participant who plays `played[r]` against a partner playing
/// `partner_played[r]`, with no extra names.
pub fn record(
    id: ParticipantId,
    played: &[&str],
    partner_played: &[&str],
    partners: &[ParticipantId],
) -> ParticipantRecord {
    ParticipantRecord {
        id,
        names_played: names(played),
        partner_names: names(partner_played),
        partners: partners.to_vec(),
        extra_names: vec![Vec::new(); played.len()],
    }
}

/// Every participant plays `name` in every round against a fixed partner.
pub fn unanimous_game(
    edges: &[(ParticipantId, ParticipantId)],
    partners: &[(ParticipantId, ParticipantId)],
    rounds: usize,
    name: &str,
) -> Game {
    let played = vec![name; rounds];
    let records = partners
        .iter()
        .map(|&(id, partner)| record(id, &played, &played, &vec![partner; rounds]));
    Game::new(records, SocialNetwork::from_edges(edges)).expect("valid synthetic game")
}

/// Ring of `n` participants.
pub fn ring_edges(n: usize) -> Vec<(ParticipantId, ParticipantId)> {
    (0..n).map(|i| (i, (i + 1) % n)).collect()
}

/// A ring game of `n` participants where everybody plays random names and
/// sees `extra` random names per round. Pairings alternate between the two
/// ring neighbors.
pub fn random_ring_input(n: usize, rounds: usize, extra: usize, rng: &mut StdRng) -> GameInput {
    let played: Vec<Vec<&str>> = (0..n)
        .map(|_| (0..rounds).map(|_| *NAMES.choose(rng).unwrap()).collect())
        .collect();

    let partner_of = |id: ParticipantId, round: usize| {
        if (id + round) % 2 == 0 {
            (id + 1) % n
        } else {
            (id + n - 1) % n
        }
    };

    let participants = (0..n)
        .map(|id| ParticipantInput {
            id,
            rounds: (0..rounds)
                .map(|round| {
                    let partner = partner_of(id, round);
                    RoundInput {
                        name: Name::new(played[id][round]),
                        partner_name: Name::new(played[partner][round]),
                        partner,
                        extra_names: (0..extra)
                            .map(|_| Name::new(*NAMES.choose(rng).unwrap()))
                            .collect(),
                    }
                })
                .collect(),
        })
        .collect();

    GameInput {
        metadata: Default::default(),
        participants,
        pairings: vec![ring_edges(n); rounds],
    }
}

/// Random counts over a random subset of [`NAMES`], never empty.
pub fn random_counts(rng: &mut StdRng) -> CountDistribution {
    let mut counts = CountDistribution::new();
    let distinct = rng.random_range(1..=NAMES.len());
    for name in NAMES.choose_multiple(rng, distinct) {
        counts.add_count(&Name::new(*name), rng.random_range(1..10));
    }
    counts
}

/// Random history of `rounds` rounds with one to four observations each.
pub fn random_history(rounds: usize, rng: &mut StdRng) -> ObservationHistory {
    (0..rounds)
        .map(|_| {
            let observations = rng.random_range(1..=4);
            (0..observations)
                .map(|_| Name::new(*NAMES.choose(rng).unwrap()))
                .collect()
        })
        .collect()
}
