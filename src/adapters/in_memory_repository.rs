//! In-memory game repository for testing.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

use crate::{Result, error::Error, game::GameInput, ports::GameRepository};

/// In-memory repository keyed by path.
///
/// All clones share the same storage.
///
/// # Examples
///
/// ```
/// use namegame::adapters::InMemoryRepository;
/// use namegame::game::GameInput;
/// use namegame::ports::GameRepository;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// repo.save(&GameInput::default(), Path::new("empty"))?;
/// assert!(repo.contains(Path::new("empty")));
/// # Ok::<(), namegame::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, GameInput>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of games stored.
    pub fn count(&self) -> usize {
        self.storage
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.storage
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&key(path))
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl GameRepository for InMemoryRepository {
    fn save(&self, game: &GameInput, path: &Path) -> Result<()> {
        self.storage
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key(path), game.clone());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<GameInput> {
        self.storage
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key(path))
            .cloned()
            .ok_or_else(|| Error::Io {
                operation: format!("load game {path:?}"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no game stored"),
            })
    }
}
