mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{regions, report, sample, summarize};
use tracing_subscriber::EnvFilter;

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Summarize(args) => summarize::run(&cli, args),
        Commands::Report(args) => report::run(&cli, args),
        Commands::Regions(args) => regions::run(&cli, args),
        Commands::Sample(args) => sample::run(&cli, args),
    }
}

/// Log to stderr; `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> { run() }
