//! Static configuration consumed by the engine: the input column schema, the
//! demographic catalog, and the display labels of the four walkability levels.

mod catalog;
mod schema;

use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{error::{Result, WalkError}, types::WalkLevel};

pub use catalog::{Catalog, SubCategories};
pub use schema::ColumnSchema;
pub(crate) use schema::{coerce_count, coerce_level, coerce_score};

/// Display labels for the four walkability levels, least to most walkable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelLabels([String; 4]);

impl LevelLabels {
    #[inline] pub fn get(&self, level: WalkLevel) -> &str { &self.0[level.index()] }
}

impl Default for LevelLabels {
    fn default() -> Self {
        Self([
            "Least Walkable".to_string(),
            "Below Average Walkability".to_string(),
            "Above Average Walkability".to_string(),
            "Most Walkable".to_string(),
        ])
    }
}

/// Complete engine configuration, passed explicitly to loaders and builders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub columns: ColumnSchema,
    pub catalog: Catalog,
    pub labels: LevelLabels,
}

impl Config {
    /// Parse a configuration from JSON. Omitted sections keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)
            .map_err(|e| WalkError::InvalidConfig(e.to_string()))?;
        config.catalog.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file from `path`.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("[config::from_path] Failed to read config file: {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("[config::from_path] Invalid config in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default_config() {
        assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
    }

    #[test]
    fn labels_and_catalog_override() {
        let json = r#"{
            "labels": ["L0", "L1", "L2", "L3"],
            "catalog": {"Tenure": {"Own": "own", "Rent": "rent"}}
        }"#;
        let config = Config::from_json_str(json).unwrap();
        assert_eq!(config.labels.get(WalkLevel::AboveAverage), "L2");
        assert_eq!(config.catalog.categories().collect::<Vec<_>>(), vec!["Tenure"]);
        assert_eq!(config.columns, ColumnSchema::default());
    }

    #[test]
    fn malformed_json_is_invalid_config() {
        assert!(matches!(Config::from_json_str("{\"labels\": 3}"), Err(WalkError::InvalidConfig(_))));
        assert!(matches!(Config::from_json_str("{\"catalog\": {}}"), Err(WalkError::InvalidConfig(_))));
    }
}
