//! CLI subcommands

pub mod compare;
pub mod first_match;
pub mod gain;
pub mod summarize;

use std::path::Path;

use crate::game::Game;

/// Label used for a game in output: its metadata label, else the file stem.
pub fn game_label(game: &Game, path: &Path) -> String {
    game.metadata()
        .label
        .clone()
        .or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
        })
        .unwrap_or_else(|| "game".to_string())
}
