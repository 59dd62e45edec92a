mod cli;
mod commands;
mod crypto;
mod envelope;
mod error;
mod frame;
mod util;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seal(args) => commands::seal::run_seal(args)?,
        Commands::Open(args) => commands::open::run_open(args)?,
    }

    Ok(())
}
