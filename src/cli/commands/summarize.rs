//! Summarize command - Every strategy over many games, pooled by condition

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    aggregate::{Aggregator, Condition},
    app::App,
    cli::{
        config::AnalysisArgs,
        output::{create_progress, print_kv, print_round_table, print_section, print_subsection},
    },
    export::export_json,
    exposure::{ExposureContext, SimulatorKind},
    first_match::ExposureTiming,
};

#[derive(Parser, Debug)]
#[command(about = "Run every exposure strategy over many games and pool by condition")]
pub struct SummarizeArgs {
    /// Game files (JSON); each needs a network type and an outcome
    #[arg(required = true)]
    pub games: Vec<PathBuf>,

    /// Strategies to run (defaults to all)
    #[arg(long, short = 's', value_delimiter = ',')]
    pub simulators: Vec<SimulatorKind>,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Export the per-condition summary to JSON
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn execute(args: SummarizeArgs) -> Result<()> {
    let app = App::new();
    let config = args.analysis.config();
    let simulators = if args.simulators.is_empty() {
        SimulatorKind::ALL.to_vec()
    } else {
        args.simulators.clone()
    };

    let mut aggregator = Aggregator::new();
    let progress = create_progress(args.games.len() as u64, "games");
    for path in &args.games {
        progress.set_message(path.display().to_string());
        let game = app
            .load_game(path)
            .with_context(|| format!("Failed to load game: {}", path.display()))?;
        let condition = Condition::of(game.metadata())
            .with_context(|| format!("Cannot classify game: {}", path.display()))?;

        aggregator.add_game(condition);
        for &kind in &simulators {
            let report = app
                .compare(&game, kind, &config)
                .with_context(|| format!("{kind} comparison failed for {}", path.display()))?;
            aggregator.add_report(condition, &report);
        }
        let context = ExposureContext::new(&game, &config)?;
        aggregator.add_extra_gain(condition, &context.extra_name_gain()?);
        aggregator.add_timing(condition, ExposureTiming::of(&game));
        progress.inc(1);
    }
    progress.finish_with_message("done");

    let summary = aggregator.summary();
    for condition in &summary {
        print_section(&format!(
            "{}/{} ({} games)",
            condition.network_type, condition.outcome, condition.games
        ));
        print_subsection("Gain from the real extra names");
        print_round_table(&condition.extra_gain);
        for (kind, simulator) in &condition.simulators {
            print_subsection(&format!("{kind}: alternative minus real divergence"));
            print_round_table(&simulator.differences);
        }
        if let Some(timing) = condition.timing {
            print_subsection("First-match timing");
            print_kv(
                "Unstructured first",
                &format!("{:.2}", timing.unstructured_before_structured),
            );
            print_kv("Only unstructured", &format!("{:.2}", timing.only_unstructured));
        }
    }

    if let Some(path) = &args.output {
        export_json(path, &summary)
            .with_context(|| format!("Failed to export: {}", path.display()))?;
        println!("\nExported summary to {}", path.display());
    }

    Ok(())
}
