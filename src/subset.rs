//! Region subsetter: selects the rows of one named region.

use tracing::debug;

use crate::{
    error::{Result, WalkError},
    table::{ClassifiedTable, RowSet},
    types::RegionType,
};

impl ClassifiedTable {
    /// Rows belonging to `region_name` of `region_type`.
    ///
    /// - national: every row; `region_name` is ignored.
    /// - state, county, csa: exact, case-sensitive match on the stored name.
    /// - city: `region_name` is `"<city>, <state>"`, split on the first `", "`, and
    ///   both names must match. Without a state part only the city name is
    ///   compared, so same-named cities in different states are merged.
    ///
    /// An empty match is reported as [`WalkError::EmptySelection`].
    pub fn subset(&self, region_type: RegionType, region_name: &str) -> Result<RowSet<'_>> {
        let base = self.base();
        let all = self.all_rows();

        let rows = match region_type {
            RegionType::National => all,
            RegionType::City => match region_name.split_once(", ") {
                Some((city, state)) => all.filter(|row| {
                    base.name(RegionType::City, row) == Some(city) && base.name(RegionType::State, row) == Some(state)
                }),
                None => {
                    debug!("[subset] city '{region_name}' has no state part; matching on city name only");
                    all.filter(|row| base.name(RegionType::City, row) == Some(region_name))
                }
            },
            _ => all.filter(|row| base.name(region_type, row) == Some(region_name)),
        };

        if rows.is_empty() {
            return Err(WalkError::EmptySelection { region_type, name: region_name.to_string() });
        }
        debug!("[subset] {region_type} '{region_name}' matched {} block groups", rows.len());
        Ok(rows)
    }

    /// Sorted, distinct region names of a region-type (composite keys for cities).
    pub fn region_names(&self, region_type: RegionType) -> Vec<&str> {
        let mut names = (0..self.len())
            .filter_map(|row| self.region_key(region_type, row))
            .collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        names
    }
}
