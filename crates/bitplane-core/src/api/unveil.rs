use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::carrier::Carrier;
use crate::codec::{self, CodecOptions};
use crate::{BitplaneError, Result};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they must match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the carrier file that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// The unveiled payload is written to this file as well
    pub fn into_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    pub fn use_file(mut self, output_file: Option<PathBuf>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<Vec<u8>> {
        let Some(secret_media) = self.secret_media else {
            return Err(BitplaneError::CarrierNotSet);
        };

        let carrier = Carrier::from_file(&secret_media)?;
        let payload = codec::decode(&carrier, &self.options)?;
        info!(
            "unveiled {} bytes from a {} carrier",
            payload.len(),
            carrier.kind()
        );

        if let Some(output_file) = self.output_file {
            fs::write(output_file, &payload).map_err(|source| BitplaneError::WriteError { source })?;
        }

        Ok(payload)
    }
}
