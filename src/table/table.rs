use std::sync::Arc;

use ahash::AHashMap;
use ndarray::Array2;

use crate::{
    config::{Catalog, coerce_count, coerce_level, coerce_score},
    types::{RegionType, WalkLevel},
};

/// Immutable base table of block groups, one entry per row.
///
/// Numeric columns have already been coerced (at load time): counts are plain
/// `f64` with missing values as 0, scores and levels keep `None` for unknowns.
#[derive(Debug, Clone)]
pub struct BlockGroups {
    pub(super) state: Vec<Option<Arc<str>>>,
    pub(super) county: Vec<Option<Arc<str>>>,
    pub(super) csa: Vec<Option<Arc<str>>>,
    pub(super) city: Vec<Option<Arc<str>>>,
    pub(super) population: Vec<f64>,
    pub(super) raw: Vec<Option<f64>>,
    pub(super) levels: Vec<Option<WalkLevel>>,
    pub(super) scaled: Vec<Option<f64>>,
    pub(super) counts: Array2<f64>, // (rows, catalog columns)
    pub(super) columns: AHashMap<String, usize>, // catalog column id -> column of `counts`
}

impl BlockGroups {
    /// Build a table from row-oriented records, coercing each cell once.
    /// Count columns are allocated for every column id referenced by `catalog`.
    pub fn from_records(records: impl IntoIterator<Item = BlockGroupRecord>, catalog: &Catalog) -> Self {
        let records = records.into_iter().collect::<Vec<_>>();
        let columns = catalog.columns().into_iter()
            .enumerate()
            .map(|(j, column)| (column.to_string(), j))
            .collect::<AHashMap<_, _>>();

        let mut names = NameInterner::default();
        let mut counts = Array2::<f64>::zeros((records.len(), columns.len()));
        for (i, record) in records.iter().enumerate() {
            for (column, value) in &record.counts {
                if let Some(&j) = columns.get(column) {
                    counts[[i, j]] = coerce_count(Some(*value));
                }
            }
        }

        Self {
            state: records.iter().map(|r| names.intern_opt(r.state_name.as_deref())).collect(),
            county: records.iter().map(|r| names.intern_opt(r.county_name.as_deref())).collect(),
            csa: records.iter().map(|r| names.intern_opt(r.csa_name.as_deref())).collect(),
            city: records.iter().map(|r| names.intern_opt(r.city_name.as_deref())).collect(),
            population: records.iter().map(|r| coerce_count(r.population)).collect(),
            raw: records.iter().map(|r| coerce_score(r.walkability_raw)).collect(),
            levels: records.iter().map(|r| coerce_level(r.walkability_level)).collect(),
            scaled: records.iter().map(|r| coerce_score(r.walkability_scaled)).collect(),
            counts,
            columns,
        }
    }

    /// Number of block groups.
    #[inline] pub fn len(&self) -> usize { self.population.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.population.is_empty() }

    /// Population of a row (0 when unknown).
    #[inline] pub fn population(&self, row: usize) -> f64 { self.population[row] }

    /// Raw walkability score of a row, if known.
    #[inline] pub fn raw_score(&self, row: usize) -> Option<f64> { self.raw[row] }

    /// Walkability score on the 1-10 scale, if known.
    #[inline] pub fn scaled_score(&self, row: usize) -> Option<f64> { self.scaled[row] }

    /// Stored walkability level, if present in the input.
    #[inline] pub fn stored_level(&self, row: usize) -> Option<WalkLevel> { self.levels[row] }

    /// Region name of a row for a given region-type (always `None` for national).
    pub fn name(&self, ty: RegionType, row: usize) -> Option<&str> {
        match ty {
            RegionType::National => None,
            RegionType::State => self.state[row].as_deref(),
            RegionType::County => self.county[row].as_deref(),
            RegionType::Csa => self.csa[row].as_deref(),
            RegionType::City => self.city[row].as_deref(),
        }
    }

    /// Column of the count matrix holding `column`, if the table carries it.
    #[inline] pub fn count_column(&self, column: &str) -> Option<usize> { self.columns.get(column).copied() }

    /// Demographic count at (`row`, count column `j`).
    #[inline] pub fn count(&self, row: usize, j: usize) -> f64 { self.counts[[row, j]] }

    /// Read-only view of the full count matrix.
    #[inline] pub fn counts(&self) -> &Array2<f64> { &self.counts }
}

/// One block group as handed over by a row-oriented loader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockGroupRecord {
    pub state_name: Option<String>,
    pub county_name: Option<String>,
    pub csa_name: Option<String>,
    pub city_name: Option<String>,
    pub population: Option<f64>,
    pub walkability_raw: Option<f64>,
    pub walkability_level: Option<f64>,
    pub walkability_scaled: Option<f64>,
    pub counts: Vec<(String, f64)>, // (catalog column id, count)
}

impl BlockGroupRecord {
    /// Record with a population and a 1-10 walkability score.
    pub fn new(population: f64, scaled: f64) -> Self {
        Self { population: Some(population), walkability_scaled: Some(scaled), ..Default::default() }
    }

    pub fn with_state(mut self, name: &str) -> Self { self.state_name = Some(name.to_string()); self }

    pub fn with_county(mut self, name: &str) -> Self { self.county_name = Some(name.to_string()); self }

    pub fn with_csa(mut self, name: &str) -> Self { self.csa_name = Some(name.to_string()); self }

    pub fn with_city(mut self, name: &str) -> Self { self.city_name = Some(name.to_string()); self }

    pub fn with_raw(mut self, score: f64) -> Self { self.walkability_raw = Some(score); self }

    pub fn with_level(mut self, level: f64) -> Self { self.walkability_level = Some(level); self }

    pub fn with_count(mut self, column: &str, count: f64) -> Self {
        self.counts.push((column.to_string(), count));
        self
    }
}

/// Shares one allocation per distinct region name.
#[derive(Default)]
pub(super) struct NameInterner(AHashMap<Box<str>, Arc<str>>);

impl NameInterner {
    /// Intern a name, treating empty strings as missing.
    pub(super) fn intern_opt(&mut self, name: Option<&str>) -> Option<Arc<str>> {
        let name = name.filter(|s| !s.is_empty())?;
        if let Some(shared) = self.0.get(name) { return Some(shared.clone()) }
        let shared: Arc<str> = Arc::from(name);
        self.0.insert(name.into(), shared.clone());
        Some(shared)
    }
}
