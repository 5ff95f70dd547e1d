//! Dependency injection container for the analysis application.
//!
//! The container owns the game repository and the default seed, and wires
//! them into the analyses.

use std::{path::Path, sync::Arc};

use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

use super::config::{AnalysisConfig, GainConfig};
use crate::{
    Result,
    adapters::JsonGameRepository,
    exposure::{self, ExposureContext, ExposureReport, SimulatorKind},
    gain::GainSurface,
    game::{Game, GameInput},
    ports::GameRepository,
};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```no_run
/// use namegame::app::{AnalysisConfig, App};
/// use namegame::exposure::SimulatorKind;
/// use std::path::Path;
///
/// let app = App::new();
/// let game = app.load_game(Path::new("games/1addtl-latticea.json"))?;
/// let report = app.compare(&game, SimulatorKind::WeakestTie, &AnalysisConfig::default())?;
/// # Ok::<(), namegame::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use namegame::app::App;
/// use namegame::adapters::InMemoryRepository;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// ```
pub struct App {
    game_repository: Arc<dyn GameRepository + Send + Sync>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app reading games from JSON files, with no default seed.
    pub fn new() -> Self {
        Self {
            game_repository: Arc::new(JsonGameRepository::new()),
            default_seed: None,
        }
    }

    /// Create a builder for constructing app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn game_repository(&self) -> Arc<dyn GameRepository + Send + Sync> {
        Arc::clone(&self.game_repository)
    }

    /// Random number generator seeded from `seed`, the container default,
    /// or the operating system, in that order.
    pub fn rng(&self, seed: Option<u64>) -> StdRng {
        match seed.or(self.default_seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Load and validate a game.
    pub fn load_game(&self, path: &Path) -> Result<Game> {
        let input = self.game_repository.load(path)?;
        Game::from_input(&input)
    }

    pub fn save_game(&self, input: &GameInput, path: &Path) -> Result<()> {
        self.game_repository.save(input, path)
    }

    /// Run one exposure strategy over every participant of `game`.
    pub fn compare(
        &self,
        game: &Game,
        kind: SimulatorKind,
        config: &AnalysisConfig,
    ) -> Result<ExposureReport> {
        let context = ExposureContext::new(game, config)?;
        let simulator = kind.simulator(config);
        let mut rng = self.rng(config.seed);
        exposure::run(simulator.as_ref(), &context, &mut rng)
    }

    /// Monte Carlo gain curves for every participant of `game`.
    pub fn information_gain(&self, game: &Game, config: &GainConfig) -> Result<GainSurface> {
        let mut rng = self.rng(config.seed);
        let surface = GainSurface::simulate(game, config, &mut rng)?;
        info!(
            participants = surface.curves.len(),
            iterations = config.iterations,
            "information gain simulated"
        );
        Ok(surface)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing app with custom dependencies.
///
/// # Examples
///
/// ```
/// use namegame::app::AppBuilder;
/// use namegame::adapters::InMemoryRepository;
///
/// let app = AppBuilder::new()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// ```
pub struct AppBuilder {
    game_repository: Option<Arc<dyn GameRepository + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            game_repository: None,
            default_seed: None,
        }
    }

    pub fn with_repository<R: GameRepository + Send + Sync + 'static>(mut self, repo: R) -> Self {
        self.game_repository = Some(Arc::new(repo));
        self
    }

    /// Seed used whenever a configuration carries none.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app, falling back to the JSON repository.
    pub fn build(self) -> App {
        App {
            game_repository: self
                .game_repository
                .unwrap_or_else(|| Arc::new(JsonGameRepository::new())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
