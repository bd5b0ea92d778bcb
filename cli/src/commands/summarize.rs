use anyhow::Result;
use tracing::warn;
use walkability::{RegionType, SummaryCache, io::{csv::write_summary_csv, fs::ensure_dir_exists}};

use super::{load_config, load_table};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::SummarizeArgs) -> Result<()> {
    let out_dir = args.out_dir.as_path();
    ensure_dir_exists(out_dir)?;

    let config = load_config(cli)?;
    println!("[summarize] loading block groups from {}", args.data.display());
    let cache = SummaryCache::new(load_table(&args.data, &config)?, config);

    let region_types = RegionType::order().into_iter()
        .filter(|&ty| args.national || ty != RegionType::National);

    for region_type in region_types {
        let summary = match cache.summary(region_type) {
            Ok(summary) => summary,
            Err(e) if e.is_empty_selection() => {
                warn!("[summarize] skipping {region_type}: {e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let path = out_dir.join(region_type.summary_file_name());
        write_summary_csv(&summary, &path, args.force)?;
        println!("[summarize] saved {} rows to {}", summary.len(), path.display());
    }

    Ok(())
}
