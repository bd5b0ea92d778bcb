use std::sync::Arc;

use ahash::AHashMap;
use ndarray::Array2;
use polars::prelude::{Column, DataFrame, DataType};
use tracing::{debug, warn};

use crate::{
    config::{ColumnSchema, Config, coerce_count, coerce_level, coerce_score},
    error::{Result, WalkError},
    table::{BlockGroups, table::NameInterner},
    types::WalkLevel,
};

impl BlockGroups {
    /// Build the base table from a loaded DataFrame.
    ///
    /// Only rows whose `geography_type` is `block_group` are kept (all rows if the
    /// column is absent). Population, scaled score and every catalog column are
    /// required; the raw score, level and region-name columns are optional and
    /// load as entirely missing when absent. Column ids are matched exactly first,
    /// then case-insensitively.
    pub fn from_dataframe(df: &DataFrame, config: &Config) -> Result<Self> {
        let schema = &config.columns;

        let keep = match find_column(df, &schema.geography_type) {
            Some(column) => string_cells(column)?.into_iter()
                .map(|ty| ty.as_deref() == Some(ColumnSchema::BLOCK_GROUP))
                .collect::<Vec<_>>(),
            None => vec![true; df.height()],
        };
        let rows = keep.iter().filter(|&&k| k).count();
        if rows < df.height() {
            debug!("[table::from_dataframe] skipping {} rows that are not block groups", df.height() - rows);
        }

        let required = |name: &str| find_column(df, name).ok_or_else(|| WalkError::MissingColumn(name.to_string()));

        let mut names = NameInterner::default();
        let mut name_column = |name: &str| -> Result<Vec<Option<Arc<str>>>> {
            match find_column(df, name) {
                Some(column) => Ok(select(string_cells(column)?, &keep).into_iter()
                    .map(|value| names.intern_opt(value.as_deref()))
                    .collect()),
                None => {
                    warn!("[table::from_dataframe] region column '{name}' not found; treating as missing");
                    Ok(vec![None; rows])
                }
            }
        };
        let state = name_column(&schema.state_name)?;
        let county = name_column(&schema.county_name)?;
        let csa = name_column(&schema.csa_name)?;
        let city = name_column(&schema.city_name)?;

        let optional_numeric = |name: &str| -> Result<Vec<Option<f64>>> {
            match find_column(df, name) {
                Some(column) => Ok(select(numeric_cells(column)?, &keep)),
                None => Ok(vec![None; rows]),
            }
        };

        let population: Vec<f64> = select(numeric_cells(required(&schema.population)?)?, &keep)
            .into_iter().map(coerce_count).collect();
        let scaled: Vec<Option<f64>> = select(numeric_cells(required(&schema.walkability_scaled)?)?, &keep)
            .into_iter().map(coerce_score).collect();
        let raw: Vec<Option<f64>> = optional_numeric(&schema.walkability_raw)?
            .into_iter().map(coerce_score).collect();
        let levels: Vec<Option<WalkLevel>> = optional_numeric(&schema.walkability_level)?
            .into_iter().map(coerce_level).collect();

        let catalog_columns = config.catalog.columns();
        let mut counts = Array2::<f64>::zeros((rows, catalog_columns.len()));
        let mut columns = AHashMap::with_capacity(catalog_columns.len());
        for (j, name) in catalog_columns.into_iter().enumerate() {
            let values = select(numeric_cells(required(name)?)?, &keep);
            for (i, value) in values.into_iter().enumerate() {
                counts[[i, j]] = coerce_count(value);
            }
            columns.insert(name.to_string(), j);
        }

        debug!("[table::from_dataframe] loaded {rows} block groups with {} count columns", columns.len());

        Ok(Self { state, county, csa, city, population, raw, levels, scaled, counts, columns })
    }
}

/// Look up a column by exact name, falling back to a case-insensitive match.
fn find_column<'a>(df: &'a DataFrame, name: &str) -> Option<&'a Column> {
    df.column(name).ok().or_else(|| {
        df.get_column_names().into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(name))
            .and_then(|candidate| df.column(candidate.as_str()).ok())
    })
}

/// Cast a column to f64; unparsable cells and NaN become `None`.
fn numeric_cells(column: &Column) -> Result<Vec<Option<f64>>> {
    let column = column.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter()
        .map(|value| value.filter(|v| !v.is_nan()))
        .collect())
}

/// Cast a column to strings.
fn string_cells(column: &Column) -> Result<Vec<Option<String>>> {
    let column = column.cast(&DataType::String)?;
    Ok(column.str()?.into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Keep only the cells of rows flagged in `keep`.
fn select<T>(cells: Vec<T>, keep: &[bool]) -> Vec<T> {
    cells.into_iter().zip(keep)
        .filter_map(|(cell, &k)| k.then_some(cell))
        .collect()
}
