//! Ports (trait boundaries) for external collaborators.
//!
//! Data ingestion and topology loading live outside the analysis core; the
//! core only sees them through these traits. The exposure strategies plug in
//! through [`ExposureSimulator`].

pub mod exposure;
pub mod repository;

pub use exposure::ExposureSimulator;
pub use repository::GameRepository;
