mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{appraise, classify, neighborhood, radius};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Neighborhood(args) => neighborhood::run(&cli, args),
        Commands::Radius(args) => radius::run(&cli, args),
        Commands::Classify(args) => classify::run(&cli, args),
        Commands::Appraise(args) => appraise::run(&cli, args),
    }
}

/// `-v` enables info, `-vv` debug; `RUST_LOG` overrides both.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> { run() }
