//! First-match command - How names that were matched on were first seen

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use crate::{
    aggregate::{Aggregator, Condition},
    app::App,
    cli::{
        commands::game_label,
        output::{print_kv, print_section, print_subsection},
    },
    first_match::ExposureTiming,
};

#[derive(Parser, Debug)]
#[command(about = "Fraction of first matches preceded by unstructured exposure")]
pub struct FirstMatchArgs {
    /// Game files (JSON)
    #[arg(required = true)]
    pub games: Vec<PathBuf>,
}

pub fn execute(args: FirstMatchArgs) -> Result<()> {
    let app = App::new();
    let mut aggregator = Aggregator::new();

    print_section("First-match exposure timing");
    for path in &args.games {
        let game = app
            .load_game(path)
            .with_context(|| format!("Failed to load game: {}", path.display()))?;
        let timing = ExposureTiming::of(&game);

        print_subsection(&game_label(&game, path));
        print_kv(
            "Unstructured first",
            &format!("{:.2}", timing.unstructured_before_structured),
        );
        print_kv("Only unstructured", &format!("{:.2}", timing.only_unstructured));

        match Condition::of(game.metadata()) {
            Ok(condition) => {
                aggregator.add_game(condition);
                aggregator.add_timing(condition, timing);
            }
            Err(err) => warn!("{err}; left out of the condition averages"),
        }
    }

    let summary = aggregator.summary();
    if !summary.is_empty() {
        print_section("By condition");
        for condition in summary {
            if let Some(timing) = condition.timing {
                print_subsection(&format!(
                    "{}/{} ({} games)",
                    condition.network_type, condition.outcome, condition.games
                ));
                print_kv(
                    "Unstructured first",
                    &format!("{:.2}", timing.unstructured_before_structured),
                );
                print_kv("Only unstructured", &format!("{:.2}", timing.only_unstructured));
            }
        }
    }

    Ok(())
}
