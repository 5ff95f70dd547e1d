//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::aggregate::RoundSummary;

/// Create a progress bar over `total` items described by `unit`
pub fn create_progress(total: u64, unit: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let template = format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}}/{{len}} {unit} ({{msg}})");
    let style = ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(style);
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print one row per round: round, mean, standard error, maximum
pub fn print_round_table(rows: &[RoundSummary]) {
    println!("  {:>5}  {:>10}  {:>10}  {:>10}", "round", "mean", "sem", "max");
    for row in rows {
        println!(
            "  {:>5}  {:>10.4}  {:>10.4}  {:>10.4}",
            row.round, row.mean, row.sem, row.max
        );
    }
}

/// Format a per-round series compactly
pub fn format_series(values: &[f64]) -> String {
    values
        .iter()
        .map(|value| format!("{value:.3}"))
        .collect::<Vec<_>>()
        .join(" ")
}
