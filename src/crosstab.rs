//! Demographic cross-tabulation of population counts by walkability level.

use ndarray::{Array2, Axis};
use polars::prelude::{Column, DataFrame};

use crate::{
    config::{Catalog, LevelLabels},
    error::{Result, WalkError},
    table::RowSet,
    types::{LevelTotals, WalkLevel},
};

/// How cross-tab cells are turned into percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Each level's sub-categories sum to 100.
    PerLevel,
    /// Each sub-category's levels sum to 100.
    PerSubcategory,
}

/// Sub-category counts per walkability level for one demographic category.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossTab {
    category: String,
    subcategories: Vec<String>,
    counts: Array2<f64>, // (levels, sub-categories); rows always in level order 0..=3
}

impl CrossTab {
    #[inline] pub fn category(&self) -> &str { &self.category }

    /// Sub-category labels in catalog order.
    #[inline] pub fn subcategories(&self) -> &[String] { &self.subcategories }

    /// Counts matrix, one row per level.
    #[inline] pub fn counts(&self) -> &Array2<f64> { &self.counts }

    /// Count for a level and sub-category index.
    #[inline] pub fn count(&self, level: WalkLevel, subcategory: usize) -> f64 { self.counts[[level.index(), subcategory]] }

    /// Total across sub-categories for one level.
    pub fn level_total(&self, level: WalkLevel) -> f64 {
        self.counts.row(level.index()).sum()
    }

    /// Percentages of each cell under a normalization. Groups whose total is 0 get 0
    /// everywhere rather than NaN.
    pub fn percentages(&self, by: Normalization) -> Array2<f64> {
        let axis = match by {
            Normalization::PerLevel => Axis(0),
            Normalization::PerSubcategory => Axis(1),
        };

        let mut pct = self.counts.clone();
        for mut group in pct.axis_iter_mut(axis) {
            let total = group.sum();
            if total > 0.0 {
                group.mapv_inplace(|count| count * 100.0 / total);
            } else {
                group.fill(0.0);
            }
        }
        pct
    }

    /// Long-form DataFrame with one row per level: a `Level` label column followed
    /// by one column per sub-category, holding counts or percentages.
    pub fn to_dataframe(&self, labels: &LevelLabels, normalization: Option<Normalization>) -> Result<DataFrame> {
        let values = match normalization {
            Some(by) => self.percentages(by),
            None => self.counts.clone(),
        };

        let mut columns = vec![Column::new(
            "Level".into(),
            WalkLevel::order().iter().map(|&level| labels.get(level)).collect::<Vec<_>>(),
        )];
        columns.extend(self.subcategories.iter().enumerate().map(|(j, name)| {
            Column::new(name.as_str().into(), values.column(j).to_vec())
        }));

        Ok(DataFrame::new(columns)?)
    }
}

impl RowSet<'_> {
    /// Sum each sub-category of `category` per walkability level.
    /// Every level appears, zero-filled when no rows have it.
    pub fn cross_tab(&self, catalog: &Catalog, category: &str) -> Result<CrossTab> {
        let subcategories = catalog.category(category)?;
        let base = self.base();
        let table = self.table();

        let columns = subcategories.values()
            .map(|column| base.count_column(column).ok_or_else(|| WalkError::MissingColumn(column.clone())))
            .collect::<Result<Vec<_>>>()?;

        let mut counts = Array2::<f64>::zeros((WalkLevel::COUNT, columns.len()));
        for row in self.iter() {
            let level = table.level(row).index();
            for (j, &column) in columns.iter().enumerate() {
                counts[[level, j]] += base.count(row, column);
            }
        }

        Ok(CrossTab {
            category: category.to_string(),
            subcategories: subcategories.keys().cloned().collect(),
            counts,
        })
    }

    /// Total population per walkability level.
    pub fn level_populations(&self) -> LevelTotals {
        let (base, table) = (self.base(), self.table());
        self.iter().fold(LevelTotals::default(), |mut totals, row| {
            totals[table.level(row)] += base.population(row);
            totals
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify::classify, table::{BlockGroupRecord, BlockGroups, ClassifiedTable}};

    fn catalog() -> Catalog {
        Catalog::new([
            ("Tenure".to_string(), vec![
                ("Own".to_string(), "own".to_string()),
                ("Rent".to_string(), "rent".to_string()),
            ]),
        ])
    }

    fn table() -> ClassifiedTable {
        let base = BlockGroups::from_records([
            BlockGroupRecord::new(50.0, 2.0).with_level(0.0).with_count("own", 20.0).with_count("rent", 10.0),
            BlockGroupRecord::new(10.0, 2.0).with_level(0.0).with_count("own", 10.0).with_count("rent", 10.0),
            BlockGroupRecord::new(70.0, 9.0).with_level(3.0).with_count("own", 5.0).with_count("rent", 15.0),
        ], &catalog());
        classify(base).unwrap()
    }

    #[test]
    fn sums_counts_per_level_in_fixed_order() {
        let table = table();
        let tab = table.all_rows().cross_tab(&catalog(), "Tenure").unwrap();
        assert_eq!(tab.subcategories(), &["Own".to_string(), "Rent".to_string()]);
        assert_eq!(tab.counts().dim(), (4, 2));
        assert_eq!(tab.count(WalkLevel::Least, 0), 30.0);
        assert_eq!(tab.count(WalkLevel::Least, 1), 20.0);
        assert_eq!(tab.level_total(WalkLevel::BelowAverage), 0.0);
        assert_eq!(tab.count(WalkLevel::Most, 1), 15.0);
    }

    #[test]
    fn per_level_percentages_sum_to_100_and_empty_levels_are_zero() {
        let table = table();
        let pct = table.all_rows().cross_tab(&catalog(), "Tenure").unwrap().percentages(Normalization::PerLevel);
        assert_eq!(pct[[0, 0]], 60.0);
        assert_eq!(pct[[0, 1]], 40.0);
        assert_eq!(pct.row(1).to_vec(), vec![0.0, 0.0]);
        assert_eq!(pct[[3, 0]] + pct[[3, 1]], 100.0);
        assert!(pct.iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn per_subcategory_percentages_spread_across_levels() {
        let table = table();
        let pct = table.all_rows().cross_tab(&catalog(), "Tenure").unwrap().percentages(Normalization::PerSubcategory);
        // Own: 30 at level 0, 5 at level 3
        assert!((pct[[0, 0]] - 30.0 / 35.0 * 100.0).abs() < 1e-9);
        assert!((pct.column(1).sum() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let table = table();
        let err = table.all_rows().cross_tab(&catalog(), "Age").unwrap_err();
        assert!(matches!(err, WalkError::UnknownCategory(ref c) if c == "Age"));
    }

    #[test]
    fn catalog_column_missing_from_table_is_reported() {
        let table = table();
        let other = Catalog::new([("Mode".to_string(), vec![("Walk".to_string(), "walk".to_string())])]);
        let err = table.all_rows().cross_tab(&other, "Mode").unwrap_err();
        assert!(matches!(err, WalkError::MissingColumn(ref c) if c == "walk"));
    }

    #[test]
    fn level_populations_cover_every_row() {
        let table = table();
        let totals = table.all_rows().level_populations();
        assert_eq!(totals.as_array(), &[60.0, 0.0, 0.0, 70.0]);
    }

    #[test]
    fn dataframe_has_level_labels_and_subcategory_columns() {
        let table = table();
        let tab = table.all_rows().cross_tab(&catalog(), "Tenure").unwrap();
        let df = tab.to_dataframe(&LevelLabels::default(), Some(Normalization::PerLevel)).unwrap();
        assert_eq!(df.shape(), (4, 3));
        assert_eq!(df.get_column_names().iter().map(|c| c.as_str()).collect::<Vec<_>>(), vec!["Level", "Own", "Rent"]);
    }
}
