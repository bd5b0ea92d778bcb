//! Deterministic downsampling of large row sets for scatter plots.

use rand::{SeedableRng, rngs::StdRng, seq::index};

use crate::table::RowSet;

/// Seed used when callers do not pick one.
pub const DEFAULT_SEED: u64 = 42;

impl<'a> RowSet<'a> {
    /// At most `max` rows: the set itself if it is small enough, otherwise a uniform
    /// sample of exactly `max` rows without replacement, drawn from an RNG seeded
    /// with `seed` and returned in table order. The source set is left untouched.
    pub fn sample(&self, max: usize, seed: u64) -> RowSet<'a> {
        if self.len() <= max { return self.clone() }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut picked = index::sample(&mut rng, self.len(), max).into_vec();
        picked.sort_unstable();

        RowSet::new(self.table(), picked.into_iter().map(|i| self.indices()[i]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify::classify, config::Catalog, table::{BlockGroupRecord, BlockGroups, ClassifiedTable}};

    fn table(n: usize) -> ClassifiedTable {
        let records = (0..n).map(|i| BlockGroupRecord::new(i as f64, 5.0).with_level((i % 4) as f64));
        classify(BlockGroups::from_records(records, &Catalog::acs())).unwrap()
    }

    #[test]
    fn small_sets_are_returned_unchanged() {
        let table = table(10);
        let rows = table.all_rows();
        assert_eq!(rows.sample(10, DEFAULT_SEED).indices(), rows.indices());
        assert_eq!(rows.sample(50, DEFAULT_SEED).len(), 10);
    }

    #[test]
    fn large_sets_sample_exactly_max_distinct_rows() {
        let table = table(1000);
        let rows = table.all_rows();
        let sampled = rows.sample(100, DEFAULT_SEED);
        assert_eq!(sampled.len(), 100);
        assert!(sampled.indices().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(rows.len(), 1000);
    }

    #[test]
    fn same_seed_same_sample() {
        let table = table(500);
        let subset = table.all_rows().filter(|row| row % 3 != 0);
        let a = subset.sample(40, 7);
        let b = subset.sample(40, 7);
        assert_eq!(a.indices(), b.indices());
        assert!(a.indices().iter().all(|row| row % 3 != 0));
    }

    #[test]
    fn different_seeds_differ() {
        let table = table(500);
        let rows = table.all_rows();
        assert_ne!(rows.sample(40, 1).indices(), rows.sample(40, 2).indices());
    }
}
