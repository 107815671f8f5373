use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::carrier::{Carrier, CarrierKind};
use crate::codec::{self, CodecOptions};
use crate::media::Persist;
use crate::{BitplaneError, Result};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    payload_file: Option<PathBuf>,
    carrier: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    /// Use the given codec options, unveiling needs the very same options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// A text message to hide, takes precedence over a payload file
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// A file whose raw content is hidden
    pub fn with_payload_file<A: AsRef<Path>>(mut self, payload_file: A) -> Self {
        self.payload_file = Some(payload_file.as_ref().to_path_buf());
        self
    }

    pub fn use_payload_file(mut self, payload_file: Option<PathBuf>) -> Self {
        self.payload_file = payload_file;
        self
    }

    /// The carrier file, used readonly
    pub fn with_carrier<A: AsRef<Path>>(mut self, carrier: A) -> Self {
        self.carrier = Some(carrier.as_ref().to_path_buf());
        self
    }

    /// The file the encoded carrier is written to, must be of the same kind as the carrier
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let payload = self.payload()?;
        let Some(carrier) = self.carrier else {
            return Err(BitplaneError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(BitplaneError::TargetNotSet);
        };

        let carrier = Carrier::from_file(&carrier)?;
        let target_kind = CarrierKind::from_path(&output)?;
        if target_kind != carrier.kind() {
            return Err(BitplaneError::UnsupportedCarrier {
                extension: crate::media::extension_of(&output),
            });
        }

        info!(
            "hiding {} bytes in a {} carrier, bit positions {}",
            payload.len(),
            carrier.kind(),
            self.options.bit_positions
        );
        let encoded = codec::encode(&carrier, &payload, &self.options)?;
        encoded.save_as(&output)
    }

    fn payload(&self) -> Result<Vec<u8>> {
        if let Some(message) = &self.message {
            return Ok(message.as_bytes().to_vec());
        }
        let Some(payload_file) = &self.payload_file else {
            return Err(BitplaneError::MissingPayload);
        };

        fs::read(payload_file).map_err(|source| BitplaneError::ReadError { source })
    }
}
