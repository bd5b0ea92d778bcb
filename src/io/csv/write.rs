//! CSV writing operations.

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::CsvWriter};
use tracing::info;

use crate::{io::fs, summary::SummaryTable};

/// Write a DataFrame as CSV to any writer.
pub fn write_csv<W: Write>(df: &mut DataFrame, writer: W) -> Result<()> {
    CsvWriter::new(writer)
        .include_header(true)
        .finish(df)
        .context("[io::csv::write] Failed to write CSV")
}

/// Write a DataFrame to a CSV string.
pub fn write_csv_string(df: &mut DataFrame) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(df, &mut buffer)?;
    String::from_utf8(buffer)
        .with_context(|| "[io::csv::write] CSV output is not valid UTF-8")
}

/// Render a summary table as CSV text.
pub fn summary_csv_string(summary: &SummaryTable) -> Result<String> {
    write_csv_string(&mut summary.to_dataframe()?)
}

/// Write a summary table to `path`, atomically replacing it only when `force` is set.
pub fn write_summary_csv(summary: &SummaryTable, path: &Path, force: bool) -> Result<()> {
    let mut df = summary.to_dataframe()?;
    let mut pending = fs::open_for_write(path, force)?;
    write_csv(&mut df, &mut pending)
        .with_context(|| format!("[io::csv::write_summary_csv] Failed to write {}", path.display()))?;
    fs::finalize_write(pending)?;
    info!("[io::csv] wrote {} {} regions to {}", summary.len(), summary.region_type(), path.display());
    Ok(())
}
