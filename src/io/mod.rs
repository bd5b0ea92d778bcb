//! File IO: loading the block-group table and persisting precomputed summaries.
//!
//! - `csv` - delimited text for the input table and summary files
//! - `fs` - directory helpers and atomic write-then-rename

pub mod csv;
pub mod fs;
