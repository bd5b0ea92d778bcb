pub mod regions;
pub mod report;
pub mod sample;
pub mod summarize;

use anyhow::Result;
use walkability::{ClassifiedTable, Config, classify, io::csv::load_block_groups};

use crate::cli::Cli;

/// Load the config named on the command line, or the default one.
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::from_path(path),
        None => Ok(Config::default()),
    }
}

/// Load and classify the block-group table.
pub fn load_table(data: &std::path::Path, config: &Config) -> Result<ClassifiedTable> {
    Ok(classify(load_block_groups(data, config)?)?)
}
