//! Level classifier: assigns every block group one of the four walkability levels.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    error::{Result, WalkError},
    table::{BlockGroups, ClassifiedTable},
    types::WalkLevel,
};

/// Quartile thresholds of the raw walkability score over a whole dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Compute thresholds from scores, interpolating linearly between the closest
    /// ranks. Returns `None` when there are no scores.
    pub fn from_scores(scores: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sorted = scores.into_iter().filter(|s| !s.is_nan()).collect::<Vec<_>>();
        if sorted.is_empty() { return None }
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            q1: quantile(&sorted, 0.25),
            q2: quantile(&sorted, 0.50),
            q3: quantile(&sorted, 0.75),
        })
    }

    /// Level of a score: `<= q1` is 0, `(q1, q2]` is 1, `(q2, q3]` is 2, above `q3` is 3.
    pub fn bin(&self, score: f64) -> WalkLevel {
        if score <= self.q1 { WalkLevel::Least }
        else if score <= self.q2 { WalkLevel::BelowAverage }
        else if score <= self.q3 { WalkLevel::AboveAverage }
        else { WalkLevel::Most }
    }
}

/// Quantile of sorted, non-empty data at position `p * (n - 1)`.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let position = p * (sorted.len() - 1) as f64;
    let (lo, hi) = (position.floor() as usize, position.ceil() as usize);
    sorted[lo] + (sorted[hi] - sorted[lo]) * (position - lo as f64)
}

/// Derive the walkability level of every row, returning a new table.
///
/// A stored level column that is not entirely missing wins; its gaps become
/// [`WalkLevel::Most`]. Otherwise rows are binned by [`Quartiles`] of the raw score
/// computed once over the entire table, so levels stay comparable across regions.
/// Rows with no raw score, and every row of a dataset whose raw scores are all
/// equal, also become [`WalkLevel::Most`].
pub fn classify(base: impl Into<Arc<BlockGroups>>) -> Result<ClassifiedTable> {
    let base: Arc<BlockGroups> = base.into();
    let rows = 0..base.len();

    if rows.clone().any(|row| base.stored_level(row).is_some()) {
        let missing = rows.clone().filter(|&row| base.stored_level(row).is_none()).count();
        if missing > 0 {
            info!("[classify] filling {missing} missing walkability levels with level 3");
        }
        let levels = rows.map(|row| base.stored_level(row).unwrap_or(WalkLevel::Most)).collect();
        return Ok(ClassifiedTable::new(base, levels, None));
    }

    if base.is_empty() {
        return Ok(ClassifiedTable::new(base, Vec::new(), None));
    }

    let scores = rows.clone().filter_map(|row| base.raw_score(row)).collect::<Vec<_>>();
    let quartiles = Quartiles::from_scores(scores.iter().copied()).ok_or(WalkError::Unclassifiable)?;
    let degenerate = scores.iter().all(|&s| s == scores[0]);
    debug!("[classify] quartile thresholds {:?} from {} raw scores", quartiles, scores.len());
    if degenerate {
        info!("[classify] all raw walkability scores are equal; every row gets level 3");
    }

    let levels = rows
        .map(|row| match base.raw_score(row) {
            Some(score) if !degenerate => quartiles.bin(score),
            _ => WalkLevel::Most,
        })
        .collect();

    Ok(ClassifiedTable::new(base, levels, Some(quartiles)))
}
