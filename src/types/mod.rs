mod level;
mod region;

pub use level::{LevelTotals, WalkLevel};
pub use region::RegionType;
