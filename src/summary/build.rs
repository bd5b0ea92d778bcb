use ahash::AHashMap;
use tracing::debug;

use crate::{
    error::{Result, WalkError},
    summary::{SummaryRow, SummaryTable, competition_ranks},
    table::{ClassifiedTable, RowSet},
    types::RegionType,
};

impl ClassifiedTable {
    /// Build the ranked summary of every region of `region_type`.
    ///
    /// Rows without a region name are left out. Each region gets its population per
    /// walkability level and its weighted index (scaled score only); regions are
    /// ranked by index with competition ranking and sorted by rank, then name.
    /// Regions with no population have index 0 and rank last; they are kept.
    pub fn build_summary(&self, region_type: RegionType) -> Result<SummaryTable> {
        let mut groups: AHashMap<&str, Vec<usize>> = AHashMap::new();
        for row in 0..self.len() {
            if let Some(key) = self.region_key(region_type, row) {
                groups.entry(key).or_default().push(row);
            }
        }

        if groups.is_empty() {
            return Err(WalkError::EmptySelection { region_type, name: "(all regions)".to_string() });
        }

        let mut regions = groups.into_iter().collect::<Vec<_>>();
        regions.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut rows = regions.into_iter()
            .map(|(name, indices)| {
                let members = RowSet::new(self, indices);
                SummaryRow {
                    rank: 0,
                    name: name.to_string(),
                    levels: members.level_populations(),
                    weighted_index: members.weighted_index(),
                }
            })
            .collect::<Vec<_>>();

        let indices = rows.iter().map(|row| row.weighted_index).collect::<Vec<_>>();
        for (row, rank) in rows.iter_mut().zip(competition_ranks(&indices)) {
            row.rank = rank;
        }
        rows.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.name.cmp(&b.name)));

        debug!("[summary::build_summary] {} {region_type} regions", rows.len());
        Ok(SummaryTable::new(region_type, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        classify::classify,
        config::Catalog,
        table::{BlockGroupRecord, BlockGroups, NATIONAL},
        types::WalkLevel,
    };

    fn table(records: Vec<BlockGroupRecord>) -> ClassifiedTable {
        classify(BlockGroups::from_records(records, &Catalog::acs())).unwrap()
    }

    #[test]
    fn ranks_ties_with_competition_ranking() {
        let table = table(vec![
            BlockGroupRecord::new(10.0, 7.0).with_level(3.0).with_state("B"),
            BlockGroupRecord::new(10.0, 7.0).with_level(3.0).with_state("A"),
            BlockGroupRecord::new(10.0, 5.0).with_level(1.0).with_state("C"),
        ]);
        let summary = table.build_summary(RegionType::State).unwrap();
        let ranked = summary.rows().iter().map(|r| (r.rank, r.name.as_str())).collect::<Vec<_>>();
        assert_eq!(ranked, vec![(1, "A"), (1, "B"), (3, "C")]);
    }

    #[test]
    fn pivots_level_populations_with_zero_fill() {
        let table = table(vec![
            BlockGroupRecord::new(10.0, 2.0).with_level(0.0).with_county("X"),
            BlockGroupRecord::new(15.0, 9.0).with_level(3.0).with_county("X"),
            BlockGroupRecord::new(99.0, 9.0).with_level(3.0),
        ]);
        let summary = table.build_summary(RegionType::County).unwrap();
        assert_eq!(summary.len(), 1);

        let x = &summary.rows()[0];
        assert_eq!(x.levels.as_array(), &[10.0, 0.0, 0.0, 15.0]);
        assert_eq!(x.levels[WalkLevel::BelowAverage], 0.0);
        assert!((x.weighted_index - (2.0 * 10.0 + 9.0 * 15.0) / 25.0).abs() < 1e-12);
    }

    #[test]
    fn unpopulated_regions_rank_last_instead_of_disappearing() {
        let table = table(vec![
            BlockGroupRecord::new(0.0, 9.0).with_level(3.0).with_csa("Empty"),
            BlockGroupRecord::new(5.0, 1.5).with_level(0.0).with_csa("Low"),
        ]);
        let summary = table.build_summary(RegionType::Csa).unwrap();
        let last = summary.rows().last().unwrap();
        assert_eq!((last.name.as_str(), last.rank, last.weighted_index), ("Empty", 2, 0.0));
    }

    #[test]
    fn city_regions_need_a_state() {
        let table = table(vec![
            BlockGroupRecord::new(1.0, 5.0).with_level(1.0).with_city("Springfield").with_state("Illinois"),
            BlockGroupRecord::new(1.0, 6.0).with_level(1.0).with_city("Springfield").with_state("Missouri"),
            BlockGroupRecord::new(1.0, 7.0).with_level(1.0).with_city("Nowhere"),
        ]);
        let summary = table.build_summary(RegionType::City).unwrap();
        let names = summary.rows().iter().map(|r| r.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Springfield, Missouri", "Springfield, Illinois"]);
    }

    #[test]
    fn national_summary_has_one_row() {
        let table = table(vec![
            BlockGroupRecord::new(1.0, 5.0).with_level(1.0),
            BlockGroupRecord::new(3.0, 9.0).with_level(3.0).with_state("A"),
        ]);
        let summary = table.build_summary(RegionType::National).unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary.rows()[0].name, NATIONAL);
        assert_eq!(summary.rows()[0].levels.total(), 4.0);
        assert_eq!(summary.rows()[0].weighted_index, 8.0);
    }

    #[test]
    fn region_type_without_names_is_empty_selection() {
        let table = table(vec![BlockGroupRecord::new(1.0, 5.0).with_level(1.0)]);
        assert!(table.build_summary(RegionType::State).unwrap_err().is_empty_selection());
    }
}
