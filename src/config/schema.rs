use serde::{Deserialize, Serialize};

use crate::types::{RegionType, WalkLevel};

/// Names of the input columns the engine reads. Any field omitted from a JSON
/// config keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSchema {
    pub geography_type: String,
    pub state_name: String,
    pub county_name: String,
    pub csa_name: String,
    pub city_name: String,
    pub population: String,
    pub walkability_raw: String,
    pub walkability_level: String,
    pub walkability_scaled: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            geography_type: "geography_type".to_string(),
            state_name: "state_name".to_string(),
            county_name: "county_name".to_string(),
            csa_name: "csa_name".to_string(),
            city_name: "city_name".to_string(),
            population: "b02001_001e".to_string(),
            walkability_raw: "natwalkind".to_string(),
            walkability_level: "nwi".to_string(),
            walkability_scaled: "nwi_scaled_10".to_string(),
        }
    }
}

impl ColumnSchema {
    /// Value of `geography_type` for rows that make up the base table.
    pub const BLOCK_GROUP: &'static str = "block_group";

    /// Name column matched by a region-type (none for national).
    pub fn name_column(&self, ty: RegionType) -> Option<&str> {
        match ty {
            RegionType::National => None,
            RegionType::State => Some(self.state_name.as_str()),
            RegionType::County => Some(self.county_name.as_str()),
            RegionType::Csa => Some(self.csa_name.as_str()),
            RegionType::City => Some(self.city_name.as_str()),
        }
    }
}

// Numeric cells are coerced once, at load time.

/// Population counts: missing or non-numeric becomes 0.
#[inline]
pub fn coerce_count(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Continuous scores: missing or non-numeric stays unknown.
#[inline]
pub fn coerce_score(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Ordinal levels: anything but an integer in 0..=3 stays unknown.
#[inline]
pub fn coerce_level(value: Option<f64>) -> Option<WalkLevel> {
    coerce_score(value).and_then(WalkLevel::from_f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_coercion_defaults_to_zero() {
        assert_eq!(coerce_count(None), 0.0);
        assert_eq!(coerce_count(Some(f64::NAN)), 0.0);
        assert_eq!(coerce_count(Some(12.0)), 12.0);
    }

    #[test]
    fn score_coercion_keeps_unknowns() {
        assert_eq!(coerce_score(Some(f64::NAN)), None);
        assert_eq!(coerce_score(Some(f64::INFINITY)), None);
        assert_eq!(coerce_score(Some(7.5)), Some(7.5));
    }

    #[test]
    fn level_coercion_rejects_out_of_range() {
        assert_eq!(coerce_level(Some(3.0)), Some(WalkLevel::Most));
        assert_eq!(coerce_level(Some(4.0)), None);
        assert_eq!(coerce_level(Some(1.5)), None);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let schema: ColumnSchema = serde_json::from_str(r#"{"population": "pop"}"#).unwrap();
        assert_eq!(schema.population, "pop");
        assert_eq!(schema.walkability_scaled, "nwi_scaled_10");
        assert_eq!(schema.name_column(RegionType::Csa), Some("csa_name"));
        assert_eq!(schema.name_column(RegionType::National), None);
    }
}
