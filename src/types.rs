//! Core domain types shared across the analysis.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Participant identifier (a node in the social network).
pub type ParticipantId = usize;

/// Number of rounds in a game.
pub const ROUNDS: usize = 25;

/// Number of participant slots; network nodes at or above this index are
/// infrastructure placeholders and never take part in the game.
pub const PARTICIPANT_SLOTS: usize = 24;

/// Which divergence to compute between a seen and a true distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivergenceKind {
    /// Kullback-Leibler divergence, true distribution as reference.
    Kl,
    /// Jensen-Shannon divergence.
    #[default]
    Js,
}

impl fmt::Display for DivergenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DivergenceKind::Kl => "kl",
            DivergenceKind::Js => "js",
        };
        f.write_str(label)
    }
}

impl FromStr for DivergenceKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "kl" | "kullback-leibler" => Ok(DivergenceKind::Kl),
            "js" | "jensen-shannon" => Ok(DivergenceKind::Js),
            _ => Err(crate::Error::ParseDivergenceKind {
                input: s.to_string(),
                expected: "kl, js".to_string(),
            }),
        }
    }
}

/// Network topology family a game was played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkType {
    Random,
    SmallWorld,
    Lattice,
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NetworkType::Random => "random",
            NetworkType::SmallWorld => "small-world",
            NetworkType::Lattice => "lattice",
        };
        f.write_str(label)
    }
}

impl FromStr for NetworkType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "random" => Ok(NetworkType::Random),
            "small-world" | "small_world" | "small" => Ok(NetworkType::SmallWorld),
            "lattice" => Ok(NetworkType::Lattice),
            _ => Err(crate::Error::ParseNetworkType {
                input: s.to_string(),
                expected: "random, small-world, lattice".to_string(),
            }),
        }
    }
}

/// Whether a game converged on a shared convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Convention,
    NoConvention,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Convention => "convention",
            Outcome::NoConvention => "no-convention",
        };
        f.write_str(label)
    }
}

/// Descriptive metadata about one experimental game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMetadata {
    /// Human readable label, e.g. the export file stem.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub network_type: Option<NetworkType>,
    #[serde(default)]
    pub outcome: Option<Outcome>,
    /// Number of extra names shown per round in this condition.
    #[serde(default)]
    pub additional_names: Option<usize>,
}
