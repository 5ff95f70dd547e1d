//! Application layer with dependency injection container.
//!
//! The container owns infrastructure (the game repository and the default
//! seed) and exposes the analyses as use cases.
//!
//! ```text
//! App ──owns──▶ GameRepository (JsonGameRepository / InMemoryRepository)
//!  │
//!  └──runs────▶ exposure simulators, information gain
//! ```
//!
//! # Usage
//!
//! ```
//! use namegame::adapters::InMemoryRepository;
//! use namegame::app::App;
//!
//! let app = App::for_testing()
//!     .with_repository(InMemoryRepository::new())
//!     .with_default_seed(42)
//!     .build();
//! ```

mod config;
mod container;

pub use config::{AnalysisConfig, GainConfig};
pub use container::{App, AppBuilder};
