//! Read-through memo of summary and cross-tab computations over one dataset.

use std::sync::{Arc, Mutex, MutexGuard};

use ahash::AHashMap;
use tracing::debug;

use crate::{
    config::Config,
    crosstab::CrossTab,
    error::Result,
    summary::SummaryTable,
    table::ClassifiedTable,
    types::RegionType,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CrossTabKey {
    region_type: RegionType,
    region: String,
    category: String,
}

/// Memoizes pure computations over an immutable classified table.
///
/// Results are shared as `Arc`s. Errors are never cached. Two callers asking for
/// the same missing entry may both compute it; the results are identical.
#[derive(Debug)]
pub struct SummaryCache {
    table: Arc<ClassifiedTable>,
    config: Arc<Config>,
    summaries: Mutex<AHashMap<RegionType, Arc<SummaryTable>>>,
    cross_tabs: Mutex<AHashMap<CrossTabKey, Arc<CrossTab>>>,
}

impl SummaryCache {
    pub fn new(table: impl Into<Arc<ClassifiedTable>>, config: impl Into<Arc<Config>>) -> Self {
        Self {
            table: table.into(),
            config: config.into(),
            summaries: Mutex::default(),
            cross_tabs: Mutex::default(),
        }
    }

    #[inline] pub fn table(&self) -> &ClassifiedTable { &self.table }

    #[inline] pub fn config(&self) -> &Config { &self.config }

    /// Ranked summary for a region-type.
    pub fn summary(&self, region_type: RegionType) -> Result<Arc<SummaryTable>> {
        if let Some(hit) = lock(&self.summaries).get(&region_type) {
            return Ok(hit.clone());
        }

        debug!("[cache] computing {region_type} summary");
        let summary = Arc::new(self.table.build_summary(region_type)?);
        lock(&self.summaries).insert(region_type, summary.clone());
        Ok(summary)
    }

    /// Cross-tab of `category` within one region.
    pub fn cross_tab(&self, region_type: RegionType, region: &str, category: &str) -> Result<Arc<CrossTab>> {
        let key = CrossTabKey {
            region_type,
            region: region.to_string(),
            category: category.to_string(),
        };
        if let Some(hit) = lock(&self.cross_tabs).get(&key) {
            return Ok(hit.clone());
        }

        debug!("[cache] computing {category} cross-tab for {region_type} '{region}'");
        let rows = self.table.subset(region_type, region)?;
        let tab = Arc::new(rows.cross_tab(&self.config.catalog, category)?);
        lock(&self.cross_tabs).insert(key, tab.clone());
        Ok(tab)
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        lock(&self.summaries).len() + lock(&self.cross_tabs).len()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Lock a memo map. Entries are only ever inserted whole, so a poisoned map is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify::classify, table::{BlockGroupRecord, BlockGroups}};

    fn cache() -> SummaryCache {
        let config = Config::default();
        let base = BlockGroups::from_records([
            BlockGroupRecord::new(10.0, 4.0).with_level(1.0).with_state("A").with_count("B25008_002E", 6.0),
            BlockGroupRecord::new(20.0, 8.0).with_level(3.0).with_state("B").with_count("B25008_003E", 9.0),
        ], &config.catalog);
        SummaryCache::new(classify(base).unwrap(), config)
    }

    #[test]
    fn summaries_are_memoized() {
        let cache = cache();
        let first = cache.summary(RegionType::State).unwrap();
        let second = cache.summary(RegionType::State).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cross_tabs_are_memoized_per_region_and_category() {
        let cache = cache();
        let a = cache.cross_tab(RegionType::State, "A", "Homeownership").unwrap();
        let b = cache.cross_tab(RegionType::State, "B", "Homeownership").unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, &cache.cross_tab(RegionType::State, "A", "Homeownership").unwrap()));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = cache();
        assert!(cache.cross_tab(RegionType::State, "Z", "Homeownership").unwrap_err().is_empty_selection());
        assert!(cache.cross_tab(RegionType::State, "A", "Religion").is_err());
        assert!(cache.is_empty());
    }
}
