//! Population-weighted walkability index.

use crate::table::RowSet;

/// Population-weighted mean of `(score, population)` pairs.
///
/// An unknown score counts as 0 in the weighted sum while its population still
/// counts toward the total. Returns 0 when the total population is 0.
pub fn weighted_mean(pairs: impl IntoIterator<Item = (Option<f64>, f64)>) -> f64 {
    let (weighted_sum, total) = pairs.into_iter()
        .fold((0.0, 0.0), |(sum, total), (score, population)| {
            (sum + score.unwrap_or(0.0) * population, total + population)
        });

    if total > 0.0 { weighted_sum / total } else { 0.0 }
}

impl RowSet<'_> {
    /// Population-weighted mean of the 1-10 scaled walkability score.
    ///
    /// Returns 0 for an empty set or zero total population, so a 0 is only
    /// meaningful alongside [`RowSet::total_population`].
    pub fn weighted_index(&self) -> f64 {
        let base = self.base();
        weighted_mean(self.iter().map(|row| (base.scaled_score(row), base.population(row))))
    }

    /// Total population of the rows (unknown populations count as 0).
    pub fn total_population(&self) -> f64 {
        let base = self.base();
        self.iter().map(|row| base.population(row)).sum()
    }
}
