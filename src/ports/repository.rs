//! Repository port for game inputs.
//!
//! This module defines the trait boundary between the analyses and the
//! providers that hand over participant histories and pairing logs.

use std::path::Path;

use crate::{Result, game::GameInput};

/// Port for loading and storing provider output for one game.
///
/// # Examples
///
/// ```no_run
/// use namegame::game::Game;
/// use namegame::ports::GameRepository;
/// use std::path::Path;
///
/// fn open<R: GameRepository>(repo: &R, path: &Path) -> namegame::Result<Game> {
///     Game::from_input(&repo.load(path)?)
/// }
/// ```
pub trait GameRepository {
    /// Store a game at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be written or serialization
    /// fails.
    fn save(&self, game: &GameInput, path: &Path) -> Result<()>;

    /// Load the game stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the location does not exist or cannot be
    /// deserialized.
    fn load(&self, path: &Path) -> Result<GameInput>;
}
