//! Gain command - Monte Carlo value of additional names

use std::{collections::BTreeMap, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::{App, GainConfig},
    cli::{
        commands::game_label,
        output::{create_progress, format_series, print_kv, print_section, print_subsection},
    },
    export::{GainRow, export_rows},
    gain::{GainSurface, participant_gain_curves},
    types::{DivergenceKind, ROUNDS},
};

#[derive(Parser, Debug)]
#[command(about = "Simulate how much additional names would reduce divergence")]
pub struct GainArgs {
    /// Game file (JSON)
    pub game: PathBuf,

    /// Divergence to compute (kl or js)
    #[arg(long, short = 'd', default_value = "js")]
    pub divergence: DivergenceKind,

    /// Rounds remembered by each participant
    #[arg(long, short = 'm', default_value_t = ROUNDS)]
    pub memory: usize,

    /// Draws averaged per point
    #[arg(long, short = 'n', default_value_t = GainConfig::DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Largest number of additional names
    #[arg(long, default_value_t = GainConfig::DEFAULT_MAX_ADDITIONAL_NAMES)]
    pub max_names: usize,

    /// Sample the population with replacement
    #[arg(long)]
    pub with_replacement: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export every curve point to CSV
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl GainArgs {
    fn config(&self) -> GainConfig {
        let mut config = GainConfig::new(self.divergence)
            .with_memory_length(self.memory)
            .with_iterations(self.iterations)
            .with_max_additional_names(self.max_names)
            .with_replacement(self.with_replacement);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

pub fn execute(args: GainArgs) -> Result<()> {
    let app = App::new();
    let game = app
        .load_game(&args.game)
        .with_context(|| format!("Failed to load game: {}", args.game.display()))?;
    let label = game_label(&game, &args.game);
    let config = args.config();
    config.validate()?;

    let mut rng = app.rng(config.seed);
    let progress = create_progress(game.num_participants() as u64, "participants");
    let mut curves = BTreeMap::new();
    for record in game.participants() {
        progress.set_message(format!("participant {}", record.id));
        let participant_curves = participant_gain_curves(&game, record, &config, &mut rng)
            .with_context(|| format!("Gain simulation failed for participant {}", record.id))?;
        curves.insert(record.id, participant_curves);
        progress.inc(1);
    }
    progress.finish_with_message("done");
    let surface = GainSurface::from_curves(&config, curves);

    print_section(&format!("Information gain: {label}"));
    print_kv("Divergence", &config.divergence.to_string());
    print_kv("Iterations", &config.iterations.to_string());
    print_kv("Replacement", &config.with_replacement.to_string());

    print_subsection("Mean divergence by additional names (rows are rounds)");
    for (index, curve) in surface.mean().iter().enumerate() {
        println!("  {:>3}: {}", index + 1, format_series(curve));
    }

    if let Some(path) = &args.output {
        export_rows(path, &GainRow::rows(&label, &surface))
            .with_context(|| format!("Failed to export: {}", path.display()))?;
        println!("\nExported gain curves to {}", path.display());
    }

    Ok(())
}
