use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WalkError};

/// Sub-category label -> source column id, in display order.
pub type SubCategories = IndexMap<String, String>;

/// Closed catalog of demographic categories and the count column behind each
/// sub-category. Insertion order is preserved, both in memory and in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, SubCategories>,
}

impl Catalog {
    /// Build a catalog from (category, [(sub-category, column)]) entries.
    pub fn new<C, S>(entries: C) -> Self
    where
        C: IntoIterator<Item = (String, S)>,
        S: IntoIterator<Item = (String, String)>,
    {
        Self {
            categories: entries.into_iter()
                .map(|(category, subs)| (category, subs.into_iter().collect()))
                .collect(),
        }
    }

    /// American Community Survey 5-year block-group tables used by the walkability dashboards.
    pub fn acs() -> Self {
        fn entries(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
            pairs.iter().map(|&(label, column)| (label.to_string(), column.to_string())).collect()
        }

        Self::new([
            ("Total".to_string(), entries(&[
                ("Population", "B02001_001E"),
            ])),
            ("Race".to_string(), entries(&[
                ("White", "B02001_002E"),
                ("Black", "B02001_003E"),
                ("Native American", "B02001_004E"),
                ("Asian", "B02001_005E"),
                ("Pacific Islander", "B02001_006E"),
                ("Other", "B02001_007E"),
                ("Two or More", "B02001_008E"),
            ])),
            ("Ethnicity".to_string(), entries(&[
                ("Hispanic", "B03002_003E"),
                ("Non-Hispanic", "B03002_002E"),
            ])),
            ("Income".to_string(), entries(&[
                ("Less than $10,000", "B19001_002E"),
                ("$10,000 to $14,999", "B19001_003E"),
                ("$15,000 to $19,999", "B19001_004E"),
                ("$20,000 to $24,999", "B19001_005E"),
                ("$25,000 to $29,999", "B19001_006E"),
                ("$30,000 to $34,999", "B19001_007E"),
                ("$35,000 to $39,999", "B19001_008E"),
                ("$40,000 to $44,999", "B19001_009E"),
                ("$45,000 to $49,999", "B19001_010E"),
                ("$50,000 to $59,999", "B19001_011E"),
                ("$60,000 to $74,999", "B19001_012E"),
                ("$75,000 to $99,999", "B19001_013E"),
                ("$100,000 to $124,999", "B19001_014E"),
                ("$125,000 to $149,999", "B19001_015E"),
                ("$150,000 to $199,999", "B19001_016E"),
                ("$200,000 or more", "B19001_017E"),
            ])),
            ("Education".to_string(), entries(&[
                ("Less than High School", "B15003_002Z"),
                ("HS Grad/GED", "B15003_003Z"),
                ("Some College", "B15003_004Z"),
                ("Associate's Degree", "B15003_021E"),
                ("Bachelor's Degree", "B15003_022E"),
                ("Master's Degree", "B15003_023E"),
                ("Professional Degree", "B15003_024E"),
                ("Doctorate", "B15003_025E"),
            ])),
            ("Homeownership".to_string(), entries(&[
                ("Owner Occupied", "B25008_002E"),
                ("Renter Occupied", "B25008_003E"),
            ])),
            ("Age".to_string(), entries(&[
                ("Under 18", "B01001_003Z"),
                ("18 to 24", "B01001_004Z"),
                ("25 to 34", "B01001_005Z"),
                ("35 to 44", "B01001_006Z"),
                ("45 to 54", "B01001_007Z"),
                ("55 to 64", "B01001_008Z"),
                ("65 to 74", "B01001_009Z"),
                ("75 to 84", "B01001_010Z"),
                ("85 and Over", "B01001_011Z"),
            ])),
            ("Transportation".to_string(), entries(&[
                ("Single Occupancy Vehicle", "B08301_002E"),
                ("Carpool", "B08301_003E"),
                ("Public Transit", "B08301_010E"),
                ("Walking", "B08301_019E"),
                ("Bicycle", "B08301_018E"),
                ("Other", "B08301_020E"),
                ("Work from Home", "B08301_021E"),
            ])),
        ])
    }

    /// Category names in catalog order.
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.keys().map(String::as_str)
    }

    /// Sub-categories of `category`, or `UnknownCategory` if it is not in the catalog.
    pub fn category(&self, category: &str) -> Result<&SubCategories> {
        self.categories.get(category)
            .ok_or_else(|| WalkError::UnknownCategory(category.to_string()))
    }

    /// Every distinct source column id referenced by the catalog, in first-seen order.
    pub fn columns(&self) -> Vec<&str> {
        let mut seen = ahash::AHashSet::new();
        self.categories.values()
            .flat_map(|subs| subs.values())
            .map(String::as_str)
            .filter(|column| seen.insert(*column))
            .collect()
    }

    /// Reject catalogs with no categories or with empty categories.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(WalkError::InvalidConfig("demographic catalog is empty".into()));
        }
        if let Some((name, _)) = self.categories.iter().find(|(_, subs)| subs.is_empty()) {
            return Err(WalkError::InvalidConfig(format!("category '{name}' has no sub-categories")));
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self { Self::acs() }
}
