//! Compare command - Compare an exposure strategy with the real extra names

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    aggregate::summarize_rounds,
    app::App,
    cli::{
        commands::game_label,
        config::AnalysisArgs,
        output::{format_series, print_kv, print_round_table, print_section, print_subsection},
    },
    export::{ExposureRow, ExtraGainRow, export_rows},
    exposure::{ExposureContext, SimulatorKind},
};

#[derive(Parser, Debug)]
#[command(about = "Compare an exposure strategy with the real extra names")]
pub struct CompareArgs {
    /// Game file (JSON)
    pub game: PathBuf,

    /// Strategy choosing the alternate sources
    /// (weakest-tie, most-informative, random-others, spare-alter)
    #[arg(long, short = 's', default_value = "weakest-tie")]
    pub simulator: SimulatorKind,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Print every participant's difference series
    #[arg(long)]
    pub per_participant: bool,

    /// Export per-participant, per-round rows to CSV
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Export the direct gain of the real extra names to CSV
    #[arg(long)]
    pub extra_gain: Option<PathBuf>,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let app = App::new();
    let game = app
        .load_game(&args.game)
        .with_context(|| format!("Failed to load game: {}", args.game.display()))?;
    let label = game_label(&game, &args.game);
    let config = args.analysis.config();

    let report = app
        .compare(&game, args.simulator, &config)
        .with_context(|| format!("{} comparison failed for {label}", args.simulator))?;

    print_section(&format!("{} exposure: {label}", args.simulator));
    print_kv("Participants", &game.num_participants().to_string());
    print_kv("Rounds", &game.num_rounds().to_string());
    print_kv("Divergence", &config.divergence.to_string());
    print_kv("Memory", &config.memory_length.to_string());
    print_kv("Additional names", &config.additional_names.to_string());

    let differences: Vec<Vec<f64>> = report
        .outcomes
        .values()
        .map(|outcome| outcome.differences.clone())
        .collect();
    print_subsection("Alternative minus real divergence");
    print_round_table(&summarize_rounds(&differences));
    print_kv("Mean by round", &format_series(&report.mean_differences()));

    if args.per_participant {
        print_subsection("Per participant");
        for outcome in report.outcomes.values() {
            println!(
                "  {:>3} {:?}: {}",
                outcome.participant,
                outcome.alternates,
                format_series(&outcome.differences)
            );
        }
    }

    if let Some(path) = &args.output {
        export_rows(path, &ExposureRow::rows(&label, &report))
            .with_context(|| format!("Failed to export: {}", path.display()))?;
        println!("\nExported comparison to {}", path.display());
    }

    if let Some(path) = &args.extra_gain {
        let context = ExposureContext::new(&game, &config)?;
        export_rows(path, &ExtraGainRow::rows(&label, &context)?)
            .with_context(|| format!("Failed to export: {}", path.display()))?;
        println!("Exported extra-name gain to {}", path.display());
    }

    Ok(())
}
