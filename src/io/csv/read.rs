//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path, sync::Arc};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader, DataType, Field, Schema, SchemaRef}};
use tracing::info;

use crate::{config::{ColumnSchema, Config}, table::BlockGroups};

/// Reads a CSV file from `path` into a Polars DataFrame.
pub fn read_csv(path: &Path, schema: &ColumnSchema) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReader::new(file)
        .with_options(block_group_read_options(schema))
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Reads a CSV from a string.
pub fn read_csv_string(csv: &str, schema: &ColumnSchema) -> Result<DataFrame> {
    CsvReader::new(Cursor::new(csv.as_bytes()))
        .with_options(block_group_read_options(schema))
        .finish()
        .with_context(|| "[io::csv::read] Failed to read CSV from string")
}

/// Load the block-group base table from a CSV file.
pub fn load_block_groups(path: &Path, config: &Config) -> Result<BlockGroups> {
    let df = read_csv(path, &config.columns)?;
    let table = BlockGroups::from_dataframe(&df, config)
        .with_context(|| format!("[io::csv::load_block_groups] Invalid block-group table in {}", path.display()))?;
    info!("[io::csv] loaded {} block groups from {}", table.len(), path.display());
    Ok(table)
}

/// Load the block-group base table from CSV text.
pub fn load_block_groups_str(csv: &str, config: &Config) -> Result<BlockGroups> {
    let df = read_csv_string(csv, &config.columns)?;
    BlockGroups::from_dataframe(&df, config)
        .context("[io::csv::load_block_groups_str] Invalid block-group table")
}

/// Read options forcing the name columns to strings, so names that look numeric
/// are kept verbatim.
fn block_group_read_options(schema: &ColumnSchema) -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(name_schema(schema)))
}

/// Schema overwrite for the geography and region-name columns.
fn name_schema(schema: &ColumnSchema) -> SchemaRef {
    Arc::new(Schema::from_iter([
        &schema.geography_type,
        &schema.state_name,
        &schema.county_name,
        &schema.csa_name,
        &schema.city_name,
    ].into_iter().map(|name| Field::new(name.as_str().into(), DataType::String))))
}
