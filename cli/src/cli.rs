use std::path::PathBuf;

use walkability::RegionType;

/// Walkability summaries over census block groups
#[derive(clap::Parser, Debug)]
#[command(name = "walkability", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON config (column names, demographic catalog, level labels)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Precompute ranked summary tables, one CSV per region type
    Summarize(SummarizeArgs),

    /// Print the weighted index, level populations and a demographic cross-tab for a region
    Report(ReportArgs),

    /// List the region names of a region type
    Regions(RegionsArgs),

    /// Print a deterministic sample of a region's block groups
    Sample(SampleArgs),
}

#[derive(clap::Args, Debug)]
pub struct SummarizeArgs {
    /// Input block-group table (CSV)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Output directory for the summary_*.csv files
    #[arg(value_hint = clap::ValueHint::DirPath, default_value = "data")]
    pub out_dir: PathBuf,

    /// Also write a single-row national summary
    #[arg(long)]
    pub national: bool,

    /// Overwrite existing summary files
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Input block-group table (CSV)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Region type: national, state, county, csa or city
    #[arg(short = 't', long, default_value = "national")]
    pub region_type: RegionType,

    /// Region name, e.g. "Ohio" or "Springfield, Illinois" (ignored for national)
    #[arg(short, long, default_value = "")]
    pub region: String,

    /// Demographic category to cross-tabulate, e.g. "Age"
    #[arg(long)]
    pub category: Option<String>,

    /// Show the cross-tab as percentages of each level
    #[arg(long)]
    pub percent: bool,
}

#[derive(clap::Args, Debug)]
pub struct RegionsArgs {
    /// Input block-group table (CSV)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Region type: state, county, csa or city
    pub region_type: RegionType,
}

#[derive(clap::Args, Debug)]
pub struct SampleArgs {
    /// Input block-group table (CSV)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Region type: national, state, county, csa or city
    #[arg(short = 't', long, default_value = "national")]
    pub region_type: RegionType,

    /// Region name (ignored for national)
    #[arg(short, long, default_value = "")]
    pub region: String,

    /// Maximum number of rows to print
    #[arg(short, long, default_value_t = 5000)]
    pub max: usize,

    /// Sampling seed
    #[arg(long, default_value_t = walkability::DEFAULT_SEED)]
    pub seed: u64,
}
