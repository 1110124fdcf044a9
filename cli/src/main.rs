mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{counties, export, stats};

/// Log to stderr; `-v` raises the default level, `RUST_LOG` overrides it.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Stats(args) => stats::run(&cli, args),
        Commands::Counties(args) => counties::run(&cli, args),
        Commands::Export(args) => export::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
