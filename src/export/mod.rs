//! Export functionality for analysis results
//!
//! Per-round series go to CSV for the plotting layer; aggregated summaries go
//! to pretty-printed JSON.

mod series_csv;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

pub use series_csv::{ExposureRow, ExtraGainRow, GainRow, export_rows, write_rows};

use crate::{Error, Result};

/// Write `value` as pretty-printed JSON to `path`.
pub fn export_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create file {path:?}"),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(|source| Error::Io {
        operation: format!("flush file {path:?}"),
        source,
    })?;
    Ok(())
}
