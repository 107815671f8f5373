use bitplane_core::{BitPositions, CodecOptions};
use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Bit positions to hide data in, 1 (LSB) to 8 (MSB), comma separated
    #[arg(
        short,
        long,
        global = true,
        value_name = "positions",
        value_delimiter = ',',
        default_value = "1"
    )]
    pub bits: Vec<u8>,

    /// Marks the end of the hidden data, must be the same for hide and unveil
    #[arg(long, global = true, value_name = "text", default_value = "=====")]
    pub delimiter: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    /// the same options for every subcommand, positions are sorted ascending
    pub fn codec_options(&self) -> CliResult<CodecOptions> {
        CodecOptions::new(
            BitPositions::sorted(&self.bits)?,
            self.delimiter.as_bytes(),
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}
