use std::path::PathBuf;

use bitplane_core::CodecOptions;
use clap::Args;
use log::debug;

use crate::CliResult;

/// Shows how much data a carrier can take with the given bit positions
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier file to inspect
    #[arg(short = 'i', long = "in", value_name = "carrier file", required = true)]
    pub carrier: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        debug!("inspecting {:?}", self.carrier);
        let report = bitplane_core::commands::capacity(&self.carrier, &options)?;
        println!("{report}");

        Ok(())
    }
}
