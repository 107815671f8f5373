mod cli;
mod commands;

use bitplane_core::BitplaneError;
use clap::Parser;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, BitplaneError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options()?;

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::Capacity(capacity) => capacity.run(options),
    }
}
