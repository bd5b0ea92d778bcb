#![doc = "Population-weighted walkability summaries over census block groups"]
//!
//! Load a block-group table ([`BlockGroups`]), derive walkability levels once with
//! [`classify`], then select regions ([`ClassifiedTable::subset`]), compute weighted
//! indices and demographic cross-tabs on the resulting [`RowSet`]s, or build ranked
//! per-region summaries ([`ClassifiedTable::build_summary`]).

mod cache;
mod classify;
mod config;
mod crosstab;
mod error;
mod index;
mod sample;
mod subset;
mod summary;
mod table;
mod types;

pub mod io;

#[doc(inline)]
pub use cache::SummaryCache;

#[doc(inline)]
pub use classify::{Quartiles, classify};

#[doc(inline)]
pub use config::{Catalog, ColumnSchema, Config, LevelLabels, SubCategories};

#[doc(inline)]
pub use crosstab::{CrossTab, Normalization};

#[doc(inline)]
pub use error::{Result, WalkError};

#[doc(inline)]
pub use index::weighted_mean;

#[doc(inline)]
pub use sample::DEFAULT_SEED;

#[doc(inline)]
pub use summary::{INDEX_COLUMN, NAME_COLUMN, RANK_COLUMN, SummaryRow, SummaryTable, competition_ranks};

#[doc(inline)]
pub use table::{BlockGroupRecord, BlockGroups, ClassifiedTable, NATIONAL, RowSet};

#[doc(inline)]
pub use types::{LevelTotals, RegionType, WalkLevel};
