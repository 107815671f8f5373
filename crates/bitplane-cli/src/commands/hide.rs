use std::path::PathBuf;

use bitplane_core::CodecOptions;
use clap::Args;

use crate::CliResult;

/// Hides data in PNG/BMP images, WAV audio, text and other files
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier file such as PNG image or WAV audio file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "carrier file", required = true)]
    pub carrier: PathBuf,

    /// Carrier with the hidden data will be stored as file, same kind as the input
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the carrier
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        bitplane_core::commands::hide(
            &self.carrier,
            &self.write_to_file,
            self.message,
            self.data_file,
            options,
        )
    }
}
