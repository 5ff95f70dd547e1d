//! Naming-game exposure analysis
//!
//! This crate provides:
//! - Smoothed reconciliation of name distributions and KL/JS divergences
//! - Bounded-memory views of what each participant saw
//! - The pairing network with weakest-tie selection
//! - Counterfactual exposure comparisons (weakest tie, most informative
//!   non-neighbor, random others, spare alters)
//! - Monte Carlo estimates of the value of additional names
//! - First-match exposure timing and per-condition aggregation

pub mod adapters;
pub mod aggregate;
pub mod app;
pub mod cli;
pub mod distribution;
pub mod divergence;
pub mod error;
pub mod export;
pub mod exposure;
pub mod first_match;
pub mod gain;
pub mod game;
pub mod identifiers;
pub mod memory;
pub mod network;
pub mod ports;
pub mod types;
pub mod utils;

pub use distribution::{CountDistribution, ProbabilityDistribution, Reconciled, reconcile};
pub use error::{Error, Result};
pub use exposure::{ExposureContext, ExposureOutcome, ExposureReport, SimulatorKind};
pub use game::{Game, GameInput, ParticipantRecord};
pub use identifiers::Name;
pub use memory::{MemoryWindow, ObservationHistory};
pub use network::SocialNetwork;
pub use types::{DivergenceKind, NetworkType, Outcome, ParticipantId};
