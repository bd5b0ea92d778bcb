use thiserror::Error;

use crate::types::RegionType;

/// Errors raised by the aggregation engine.
///
/// Missing or non-numeric cell values are never errors: they are coerced when the
/// table is loaded. Everything here is either a reportable condition for a single
/// request (`EmptySelection`) or a configuration problem.
#[derive(Debug, Error)]
pub enum WalkError {
    /// A region filter (or a whole region-type) matched no rows.
    #[error("no block groups found for {region_type} '{name}'")]
    EmptySelection { region_type: RegionType, name: String },

    /// A requested demographic category is not part of the catalog.
    #[error("category '{0}' is not in the demographic catalog")]
    UnknownCategory(String),

    /// A column required by the schema or catalog is absent from the input table.
    #[error("column '{0}' is missing from the input table")]
    MissingColumn(String),

    #[error("unknown region type '{0}' (expected national, state, county, csa or city)")]
    UnknownRegionType(String),

    /// Neither a walkability level nor a raw walkability score is available.
    #[error("cannot classify walkability: no level or raw score values present")]
    Unclassifiable,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}

impl WalkError {
    /// True for the non-fatal "nothing matched" condition.
    #[inline] pub fn is_empty_selection(&self) -> bool { matches!(self, WalkError::EmptySelection { .. }) }
}

pub type Result<T> = std::result::Result<T, WalkError>;
