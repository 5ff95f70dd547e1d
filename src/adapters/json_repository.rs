//! JSON implementation of the game repository.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::{Result, error::Error, game::GameInput, ports::GameRepository};

/// Game repository backed by pretty-printed JSON files.
///
/// # Examples
///
/// ```no_run
/// use namegame::adapters::JsonGameRepository;
/// use namegame::ports::GameRepository;
/// use std::path::Path;
///
/// let repo = JsonGameRepository::new();
/// let input = repo.load(Path::new("games/2addtl-randoma.json"))?;
/// # Ok::<(), namegame::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonGameRepository;

impl JsonGameRepository {
    pub fn new() -> Self {
        Self
    }
}

impl GameRepository for JsonGameRepository {
    fn save(&self, game: &GameInput, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, game)?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush file {path:?}"),
            source,
        })?;
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<GameInput> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;
        let game = serde_json::from_reader(BufReader::new(file))?;
        Ok(game)
    }
}
