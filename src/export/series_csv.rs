//! CSV export of per-round series.

use std::{fs::File, io::Write, path::Path};

use serde::Serialize;

use crate::{
    Error, Result,
    exposure::{ExposureContext, ExposureReport},
    gain::GainSurface,
    types::ParticipantId,
};

/// One participant-round of an exposure report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposureRow {
    pub game: String,
    pub simulator: String,
    pub divergence: String,
    pub participant: ParticipantId,
    pub round: usize,
    pub difference: f64,
    pub baseline: f64,
    pub ratio: f64,
    /// Alternate sources of the round, `;`-separated.
    pub alternates: String,
}

/// One participant-round-count point of a gain surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GainRow {
    pub game: String,
    pub divergence: String,
    pub participant: ParticipantId,
    pub round: usize,
    pub additional_names: usize,
    pub divergence_value: f64,
}

/// One participant-round of the direct extra-name gain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtraGainRow {
    pub game: String,
    pub participant: ParticipantId,
    pub round: usize,
    pub gain: f64,
}

impl ExposureRow {
    pub fn rows(game: &str, report: &ExposureReport) -> Vec<Self> {
        report
            .outcomes
            .values()
            .flat_map(|outcome| {
                (0..outcome.differences.len()).map(move |index| {
                    let round = index + 1;
                    let alternates = outcome
                        .alternates
                        .in_round(round)
                        .iter()
                        .map(ParticipantId::to_string)
                        .collect::<Vec<_>>()
                        .join(";");
                    ExposureRow {
                        game: game.to_string(),
                        simulator: report.simulator.to_string(),
                        divergence: report.divergence.to_string(),
                        participant: outcome.participant,
                        round,
                        difference: outcome.differences[index],
                        baseline: outcome.baseline.get(index).copied().unwrap_or_default(),
                        ratio: outcome.ratios.get(index).copied().unwrap_or_default(),
                        alternates,
                    }
                })
            })
            .collect()
    }
}

impl GainRow {
    pub fn rows(game: &str, surface: &GainSurface) -> Vec<Self> {
        let mut rows = Vec::new();
        for (&participant, rounds) in &surface.curves {
            for (index, curve) in rounds.iter().enumerate() {
                for (additional_names, &value) in curve.iter().enumerate() {
                    rows.push(GainRow {
                        game: game.to_string(),
                        divergence: surface.divergence.to_string(),
                        participant,
                        round: index + 1,
                        additional_names,
                        divergence_value: value,
                    });
                }
            }
        }
        rows
    }
}

impl ExtraGainRow {
    pub fn rows(game: &str, context: &ExposureContext<'_>) -> Result<Vec<Self>> {
        Ok(context
            .extra_name_gain()?
            .into_iter()
            .flat_map(|(participant, gains)| {
                gains
                    .into_iter()
                    .enumerate()
                    .map(move |(index, gain)| ExtraGainRow {
                        game: game.to_string(),
                        participant,
                        round: index + 1,
                        gain,
                    })
            })
            .collect())
    }
}

/// Write `rows` as CSV with a header row.
pub fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `rows` to a new CSV file at `path`.
pub fn export_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create file {path:?}"),
        source,
    })?;
    write_rows(file, rows)
}
