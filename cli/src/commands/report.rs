use anyhow::Result;
use walkability::{Normalization, SummaryCache, WalkLevel, io::csv::write_csv_string};

use super::{load_config, load_table};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::ReportArgs) -> Result<()> {
    let config = load_config(cli)?;
    let cache = SummaryCache::new(load_table(&args.data, &config)?, config);

    let rows = cache.table().subset(args.region_type, &args.region)?;
    let label = if args.region.is_empty() { "the selected region" } else { args.region.as_str() };

    println!("Weighted average walkability for {label}: {:.2}", rows.weighted_index());
    println!("Block groups: {}  Population: {}", rows.len(), rows.total_population());

    let populations = rows.level_populations();
    for level in WalkLevel::order() {
        println!("  {:<28} {:>14}", cache.config().labels.get(level), populations[level]);
    }

    if let Some(category) = &args.category {
        let tab = cache.cross_tab(args.region_type, &args.region, category)?;
        let normalization = args.percent.then_some(Normalization::PerLevel);
        let mut df = tab.to_dataframe(&cache.config().labels, normalization)?;
        println!();
        print!("{}", write_csv_string(&mut df)?);
    }

    Ok(())
}
