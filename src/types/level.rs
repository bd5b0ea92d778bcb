use std::ops::{Index, IndexMut};

/// Ordinal walkability level of a block group (0 = least walkable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WalkLevel {
    Least,          // 0
    BelowAverage,   // 1
    AboveAverage,   // 2
    Most,           // 3
}

impl WalkLevel {
    /// Number of levels.
    pub const COUNT: usize = 4;

    /// All levels, least to most walkable.
    pub fn order() -> [WalkLevel; 4] {
        [
            WalkLevel::Least,
            WalkLevel::BelowAverage,
            WalkLevel::AboveAverage,
            WalkLevel::Most,
        ]
    }

    /// Convert a stored level code into a level, rejecting anything outside 0..=3.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(WalkLevel::Least),
            1 => Some(WalkLevel::BelowAverage),
            2 => Some(WalkLevel::AboveAverage),
            3 => Some(WalkLevel::Most),
            _ => None,
        }
    }

    /// Convert a numeric cell into a level. Non-integral values are rejected.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.fract() != 0.0 { return None }
        Self::from_code(value as i64)
    }

    #[inline] pub fn index(self) -> usize { self as usize }

    /// Fixed column label used in summary tables.
    pub fn summary_label(self) -> &'static str {
        match self {
            WalkLevel::Least => "1 - Least Walkable",
            WalkLevel::BelowAverage => "2 - Below Avg",
            WalkLevel::AboveAverage => "3 - Above Avg",
            WalkLevel::Most => "4 - Most Walkable",
        }
    }
}

/// Population (or any count) per walkability level, always in level order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LevelTotals([f64; 4]);

impl LevelTotals {
    /// Sum across all four levels.
    #[inline] pub fn total(&self) -> f64 { self.0.iter().sum() }

    #[inline] pub fn as_array(&self) -> &[f64; 4] { &self.0 }
}

impl Index<WalkLevel> for LevelTotals {
    type Output = f64;
    fn index(&self, level: WalkLevel) -> &f64 { &self.0[level.index()] }
}

impl IndexMut<WalkLevel> for LevelTotals {
    fn index_mut(&mut self, level: WalkLevel) -> &mut f64 { &mut self.0[level.index()] }
}
