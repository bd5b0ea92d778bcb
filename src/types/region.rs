use std::{fmt, str::FromStr};

use crate::error::WalkError;

/// Aggregation granularity for regional summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegionType {
    National,   // Single region containing every block group
    State,
    County,     // County names are only unique within a state
    Csa,        // Combined statistical (metro) area
    City,       // Keyed by "<city>, <state>"
}

impl RegionType {
    pub fn to_str(&self) -> &'static str {
        match self {
            RegionType::National => "national",
            RegionType::State => "state",
            RegionType::County => "county",
            RegionType::Csa => "csa",
            RegionType::City => "city",
        }
    }

    pub fn order() -> [RegionType; 5] {
        [
            RegionType::National,
            RegionType::State,
            RegionType::County,
            RegionType::Csa,
            RegionType::City,
        ]
    }

    /// File name used when a summary for this region-type is precomputed.
    pub fn summary_file_name(&self) -> &'static str {
        match self {
            RegionType::National => "summary_national.csv",
            RegionType::State => "summary_states.csv",
            RegionType::County => "summary_counties.csv",
            RegionType::Csa => "summary_csas.csv",
            RegionType::City => "summary_cities.csv",
        }
    }
}

impl fmt::Display for RegionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for RegionType {
    type Err = WalkError;

    /// Accepts the region-type names case-insensitively, with or without a
    /// trailing `_name` (the column-name form).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.strip_suffix("_name").unwrap_or(&lower) {
            "national" | "nation" => Ok(RegionType::National),
            "state" => Ok(RegionType::State),
            "county" => Ok(RegionType::County),
            "csa" | "metro" | "metro-area" | "metro_area" => Ok(RegionType::Csa),
            "city" | "city_state" => Ok(RegionType::City),
            _ => Err(WalkError::UnknownRegionType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_names_and_column_names() {
        assert_eq!("State".parse::<RegionType>().unwrap(), RegionType::State);
        assert_eq!("county_name".parse::<RegionType>().unwrap(), RegionType::County);
        assert_eq!("CSA".parse::<RegionType>().unwrap(), RegionType::Csa);
        assert_eq!("metro-area".parse::<RegionType>().unwrap(), RegionType::Csa);
        assert_eq!("city_state".parse::<RegionType>().unwrap(), RegionType::City);
    }

    #[test]
    fn rejects_unknown_region_types() {
        let err = "tract".parse::<RegionType>().unwrap_err();
        assert!(matches!(err, WalkError::UnknownRegionType(ref s) if s == "tract"));
    }

    #[test]
    fn display_round_trips() {
        for ty in RegionType::order() {
            assert_eq!(ty.to_string().parse::<RegionType>().unwrap(), ty);
        }
    }
}
