//! Regional summary builder: one ranked row per region of a region-type.

mod build;
mod rank;

use polars::prelude::{Column, DataFrame};

use crate::{
    error::Result,
    types::{LevelTotals, RegionType, WalkLevel},
};

pub use rank::competition_ranks;

/// Column headers of a persisted summary, besides the four level columns.
pub const RANK_COLUMN: &str = "Rank";
pub const NAME_COLUMN: &str = "Name";
pub const INDEX_COLUMN: &str = "Avg Walkability Index";

/// Summary of one region.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub rank: u32,
    pub name: String,
    pub levels: LevelTotals,
    pub weighted_index: f64,
}

/// Ranked summary of every region of a region-type, sorted by rank then name.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    region_type: RegionType,
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub(crate) fn new(region_type: RegionType, rows: Vec<SummaryRow>) -> Self {
        Self { region_type, rows }
    }

    #[inline] pub fn region_type(&self) -> RegionType { self.region_type }

    #[inline] pub fn rows(&self) -> &[SummaryRow] { &self.rows }

    #[inline] pub fn len(&self) -> usize { self.rows.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Look up a region's row by name.
    pub fn get(&self, name: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// Flat table in the persisted column layout:
    /// `Rank, Name, <four level columns>, Avg Walkability Index`.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns = vec![
            Column::new(RANK_COLUMN.into(), self.rows.iter().map(|row| row.rank).collect::<Vec<_>>()),
            Column::new(NAME_COLUMN.into(), self.rows.iter().map(|row| row.name.as_str()).collect::<Vec<_>>()),
        ];
        columns.extend(WalkLevel::order().into_iter().map(|level| {
            Column::new(
                level.summary_label().into(),
                self.rows.iter().map(|row| row.levels[level]).collect::<Vec<_>>(),
            )
        }));
        columns.push(Column::new(
            INDEX_COLUMN.into(),
            self.rows.iter().map(|row| row.weighted_index).collect::<Vec<_>>(),
        ));

        Ok(DataFrame::new(columns)?)
    }
}
