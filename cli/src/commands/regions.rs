use anyhow::Result;

use super::{load_config, load_table};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RegionsArgs) -> Result<()> {
    let config = load_config(cli)?;
    let table = load_table(&args.data, &config)?;

    for name in table.region_names(args.region_type) {
        println!("{name}");
    }

    Ok(())
}
