//! Weakest-tie selection on random connected networks.

mod common;

use rand::{Rng, SeedableRng, rngs::StdRng};

use common::ring_edges;
use namegame::{Error, SocialNetwork};

fn random_network(rng: &mut StdRng) -> SocialNetwork {
    let size = rng.random_range(5..=20);
    let mut edges = ring_edges(size);
    for _ in 0..rng.random_range(0..size) {
        let a = rng.random_range(0..size);
        let b = rng.random_range(0..size);
        edges.push((a, b));
    }
    SocialNetwork::from_edges(&edges)
}

#[test]
fn first_weakest_tie_is_at_maximum_distance() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let network = random_network(&mut rng);
        for node in network.participants() {
            let distances = network.distances_from(node);
            let farthest = distances
                .iter()
                .filter(|(other, _)| **other != node)
                .map(|(_, distance)| *distance)
                .max()
                .unwrap();

            let ties = network.weakest_ties(node, 1, &mut rng).unwrap();
            assert_eq!(ties.len(), 1);
            assert_eq!(distances[&ties[0]], farthest);
        }
    }
}

#[test]
fn later_ties_account_for_earlier_hypothetical_edges() {
    // Path 0-1-2-3-4-5: once 5 is tied to 0, the farthest node is 3.
    let network = SocialNetwork::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
    let mut rng = StdRng::seed_from_u64(42);

    let ties = network.weakest_ties(0, 2, &mut rng).unwrap();
    assert_eq!(ties, vec![5, 3]);
    assert!(!network.has_edge(0, 5));
}

#[test]
fn isolated_participant_has_no_weakest_tie() {
    let mut network = SocialNetwork::from_edges(&[(1, 2)]);
    network.add_participant(0);
    let mut rng = StdRng::seed_from_u64(42);

    assert!(matches!(
        network.weakest_ties(0, 1, &mut rng),
        Err(Error::InsufficientAlternates { participant: 0, .. })
    ));
    assert!(matches!(
        network.weakest_ties(9, 1, &mut rng),
        Err(Error::UnknownParticipant { participant: 9 })
    ));
}

#[test]
fn placeholder_nodes_never_enter_the_network() {
    let network = SocialNetwork::from_pairings([&[(0, 1), (1, 24), (30, 31)][..], &[(2, 2)][..]]);
    assert_eq!(network.participants(), vec![0, 1]);
    assert_eq!(network.non_neighbors(0), Vec::<usize>::new());
}
