use std::sync::Arc;

use crate::{
    classify::Quartiles,
    table::{BlockGroups, RowSet},
    types::{RegionType, WalkLevel},
};

/// Base table plus the columns derived from it once per dataset: the walkability
/// level of every row and the composite `"<city>, <state>"` key.
#[derive(Debug, Clone)]
pub struct ClassifiedTable {
    base: Arc<BlockGroups>,
    levels: Vec<WalkLevel>,
    city_keys: Vec<Option<Arc<str>>>,
    quartiles: Option<Quartiles>, // Only set when levels were binned from raw scores
}

impl ClassifiedTable {
    pub(crate) fn new(base: Arc<BlockGroups>, levels: Vec<WalkLevel>, quartiles: Option<Quartiles>) -> Self {
        assert_eq!(levels.len(), base.len(), "levels.len() must equal number of rows");

        let city_keys = (0..base.len())
            .map(|row| match (base.name(RegionType::City, row), base.name(RegionType::State, row)) {
                (Some(city), Some(state)) => Some(Arc::from(format!("{city}, {state}"))),
                _ => None,
            })
            .collect();

        Self { base, levels, city_keys, quartiles }
    }

    /// Get a reference to the underlying base table.
    #[inline] pub fn base(&self) -> &BlockGroups { &self.base }

    /// Number of rows.
    #[inline] pub fn len(&self) -> usize { self.levels.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.levels.is_empty() }

    /// Walkability level of a row.
    #[inline] pub fn level(&self, row: usize) -> WalkLevel { self.levels[row] }

    /// Global thresholds used to bin raw scores, if the levels were derived.
    #[inline] pub fn quartiles(&self) -> Option<Quartiles> { self.quartiles }

    /// Key identifying the region a row belongs to for a region-type.
    /// National rows all share one key; city rows need both a city and a state name.
    pub fn region_key(&self, ty: RegionType, row: usize) -> Option<&str> {
        match ty {
            RegionType::National => Some(NATIONAL),
            RegionType::City => self.city_keys[row].as_deref(),
            _ => self.base.name(ty, row),
        }
    }

    /// View over every row.
    pub fn all_rows(&self) -> RowSet<'_> {
        RowSet::new(self, (0..self.len()).collect())
    }
}

/// Region name used for the single national region.
pub const NATIONAL: &str = "National";
