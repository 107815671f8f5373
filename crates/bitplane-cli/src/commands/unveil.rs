use std::io::{self, Write};
use std::path::PathBuf;

use bitplane_core::{BitplaneError, CodecOptions};
use clap::Args;

use crate::CliResult;

/// Unveils data hidden by `hide`, needs the same bit positions and delimiter
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source carrier that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "carrier source file",
        required = true
    )]
    pub carrier: PathBuf,

    /// Unveiled data will be stored in that file, printed to stdout otherwise
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let print = self.output_file.is_none();
        let payload = bitplane_core::commands::unveil(&self.carrier, self.output_file, options)?;

        if print {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&payload)
                .and_then(|_| stdout.flush())
                .map_err(|source| BitplaneError::WriteError { source })?;
        }

        Ok(())
    }
}
