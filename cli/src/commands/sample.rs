use anyhow::Result;

use super::{load_config, load_table};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::SampleArgs) -> Result<()> {
    let config = load_config(cli)?;
    let table = load_table(&args.data, &config)?;

    let rows = table.subset(args.region_type, &args.region)?;
    let sampled = rows.sample(args.max, args.seed);
    tracing::info!("[sample] {} of {} block groups", sampled.len(), rows.len());

    let base = table.base();
    println!("row,walkability_scaled,population,level");
    for row in sampled.iter() {
        let score = base.scaled_score(row).map(|s| s.to_string()).unwrap_or_default();
        println!("{row},{score},{},{}", base.population(row), table.level(row).index());
    }

    Ok(())
}
