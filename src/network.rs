//! The social network a game was played on.
//!
//! Nodes are participants, edges are pairings that occurred in any round.
//! The network is immutable once built; hypothetical edges used by the
//! weakest-tie search live in a [`NetworkOverlay`] on top of it.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use petgraph::graphmap::UnGraphMap;
use rand::{Rng, seq::IndexedRandom};
use tracing::debug;

use crate::{
    Error, Result,
    types::{PARTICIPANT_SLOTS, ParticipantId},
};

/// Undirected, simple pairing graph over participants.
#[derive(Debug, Clone, Default)]
pub struct SocialNetwork {
    graph: UnGraphMap<ParticipantId, ()>,
}

impl SocialNetwork {
    /// Build the network from round-by-round pairing edges.
    ///
    /// Pairs touching a node at or above [`PARTICIPANT_SLOTS`] are dropped;
    /// those nodes are placeholders that never played. Self-pairs are ignored.
    pub fn from_pairings<'a, I>(rounds: I) -> Self
    where
        I: IntoIterator<Item = &'a [(ParticipantId, ParticipantId)]>,
    {
        let mut graph = UnGraphMap::new();
        for pairs in rounds {
            for &(a, b) in pairs {
                if a >= PARTICIPANT_SLOTS || b >= PARTICIPANT_SLOTS || a == b {
                    continue;
                }
                graph.add_edge(a, b, ());
            }
        }
        Self { graph }
    }

    /// Build the network directly from an edge list.
    pub fn from_edges(edges: &[(ParticipantId, ParticipantId)]) -> Self {
        Self::from_pairings([edges])
    }

    /// Ensure `node` is present even if it was never paired.
    pub fn add_participant(&mut self, node: ParticipantId) {
        self.graph.add_node(node);
    }

    pub fn contains(&self, node: ParticipantId) -> bool {
        self.graph.contains_node(node)
    }

    /// All participants, ascending.
    pub fn participants(&self) -> Vec<ParticipantId> {
        let mut nodes: Vec<_> = self.graph.nodes().collect();
        nodes.sort_unstable();
        nodes
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_edge(&self, a: ParticipantId, b: ParticipantId) -> bool {
        self.graph.contains_edge(a, b)
    }

    /// Participants `node` was paired with at least once.
    pub fn neighbors(&self, node: ParticipantId) -> BTreeSet<ParticipantId> {
        if !self.contains(node) {
            return BTreeSet::new();
        }
        self.graph.neighbors(node).collect()
    }

    /// Participants `node` was never paired with, excluding itself, ascending.
    pub fn non_neighbors(&self, node: ParticipantId) -> Vec<ParticipantId> {
        let neighbors = self.neighbors(node);
        self.participants()
            .into_iter()
            .filter(|other| *other != node && !neighbors.contains(other))
            .collect()
    }

    /// A view of this network with no hypothetical edges yet.
    pub fn overlay(&self) -> NetworkOverlay<'_> {
        NetworkOverlay {
            network: self,
            added: BTreeMap::new(),
        }
    }

    /// Shortest-path length from `source` to every reachable participant.
    pub fn distances_from(&self, source: ParticipantId) -> BTreeMap<ParticipantId, usize> {
        self.overlay().distances_from(source)
    }

    /// Select `k` weakest ties for `node`, one at a time.
    ///
    /// Each step picks uniformly among the participants at maximum distance
    /// from `node`, then adds a hypothetical edge to the pick before the next
    /// step, so later picks see the shortened network.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParticipant`] if `node` is not in the network
    /// and [`Error::InsufficientAlternates`] if `node` reaches nobody.
    pub fn weakest_ties<R: Rng + ?Sized>(
        &self,
        node: ParticipantId,
        k: usize,
        rng: &mut R,
    ) -> Result<Vec<ParticipantId>> {
        if !self.contains(node) {
            return Err(Error::UnknownParticipant { participant: node });
        }

        let mut overlay = self.overlay();
        let mut ties = Vec::with_capacity(k);
        for _ in 0..k {
            let distances = overlay.distances_from(node);
            let farthest = farthest_nodes(node, &distances);
            let Some(&tie) = farthest.choose(rng) else {
                return Err(Error::InsufficientAlternates {
                    participant: node,
                    required: k,
                    available: 0,
                });
            };
            overlay.add_edge(node, tie);
            ties.push(tie);
        }

        debug!(participant = node, ?ties, "selected weakest ties");
        Ok(ties)
    }
}

/// Participants (other than `source`) tied for the largest distance.
fn farthest_nodes(
    source: ParticipantId,
    distances: &BTreeMap<ParticipantId, usize>,
) -> Vec<ParticipantId> {
    let max = distances
        .iter()
        .filter(|(node, _)| **node != source)
        .map(|(_, distance)| *distance)
        .max();
    match max {
        Some(max) => distances
            .iter()
            .filter(|(node, distance)| **node != source && **distance == max)
            .map(|(node, _)| *node)
            .collect(),
        None => Vec::new(),
    }
}

/// A network plus hypothetical edges, without copying the base graph.
#[derive(Debug, Clone)]
pub struct NetworkOverlay<'a> {
    network: &'a SocialNetwork,
    added: BTreeMap<ParticipantId, BTreeSet<ParticipantId>>,
}

impl NetworkOverlay<'_> {
    /// Add a hypothetical undirected edge.
    pub fn add_edge(&mut self, a: ParticipantId, b: ParticipantId) {
        if a == b {
            return;
        }
        self.added.entry(a).or_default().insert(b);
        self.added.entry(b).or_default().insert(a);
    }

    /// Real and hypothetical neighbors of `node`.
    pub fn neighbors(&self, node: ParticipantId) -> BTreeSet<ParticipantId> {
        let mut neighbors = self.network.neighbors(node);
        if let Some(added) = self.added.get(&node) {
            neighbors.extend(added.iter().copied());
        }
        neighbors
    }

    /// Breadth-first shortest-path lengths from `source`, `source` included
    /// at distance zero.
    pub fn distances_from(&self, source: ParticipantId) -> BTreeMap<ParticipantId, usize> {
        let mut distances = BTreeMap::new();
        if !self.network.contains(source) {
            return distances;
        }

        distances.insert(source, 0);
        let mut queue = VecDeque::from([source]);
        while let Some(current) = queue.pop_front() {
            let next_distance = distances[&current] + 1;
            for neighbor in self.neighbors(current) {
                if !distances.contains_key(&neighbor) {
                    distances.insert(neighbor, next_distance);
                    queue.push_back(neighbor);
                }
            }
        }
        distances
    }
}
