//! Error types for the namegame crate

use thiserror::Error;

use crate::types::ParticipantId;

/// Main error type for the namegame crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(
        "divergence requires identical support: seen has {seen} names, true has {truth} names"
    )]
    SupportMismatch { seen: usize, truth: usize },

    #[error("participant {participant} needs {required} alternate sources but only {available} exist")]
    InsufficientAlternates {
        participant: ParticipantId,
        required: usize,
        available: usize,
    },

    #[error("cannot draw {requested} names without replacement from a pool of {available}")]
    InsufficientPool { requested: usize, available: usize },

    #[error("participant {participant} is not part of the game")]
    UnknownParticipant { participant: ParticipantId },

    #[error("participant {participant} has {got} rounds, expected {expected}")]
    RoundCountMismatch {
        participant: ParticipantId,
        expected: usize,
        got: usize,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid divergence kind '{input}'. Expected one of: {expected}")]
    ParseDivergenceKind { input: String, expected: String },

    #[error("invalid network type '{input}'. Expected one of: {expected}")]
    ParseNetworkType { input: String, expected: String },

    #[error("invalid simulator '{input}'. Expected one of: {expected}")]
    ParseSimulatorKind { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
