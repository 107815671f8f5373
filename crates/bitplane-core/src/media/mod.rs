//! Turning files into carriers and back.
//!
//! This is the only place that knows about container formats, the codec
//! itself works on already decoded carriers.

pub mod raster;
pub mod wav;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Seek, Write};
use std::path::Path;

use log::error;

use crate::carrier::{ByteCarrier, Carrier, CarrierKind, TextCarrier};
use crate::{BitplaneError, Result};

pub trait Persist {
    fn save_as(&self, _: &Path) -> Result<()>;
}

pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_string()
}

impl CarrierKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_extension(&extension_of(path))
    }
}

impl Carrier {
    /// loads `file`, the carrier kind is picked by its extension
    pub fn from_file(file: &Path) -> Result<Self> {
        let carrier = match CarrierKind::from_path(file)? {
            CarrierKind::Image => Carrier::Image(raster::read_image(file)?),
            CarrierKind::Audio => {
                let f = File::open(file).map_err(|source| {
                    error!("Error opening audio file {file:?}: {source}");
                    BitplaneError::ReadError { source }
                })?;
                Carrier::Audio(wav::read_wav(BufReader::new(f))?)
            }
            CarrierKind::Text => Carrier::Text(TextCarrier::new(read_bytes(file)?)),
            CarrierKind::GenericBytes => {
                Carrier::GenericBytes(ByteCarrier::new(read_bytes(file)?))
            }
        };

        Ok(carrier)
    }

    /// writes the carrier in its container format, images need the lossless format to use
    pub fn save_to_writer<W: Write + Seek>(
        &self,
        mut writer: W,
        image_format: image::ImageFormat,
    ) -> Result<()> {
        match self {
            Carrier::Image(i) => raster::write_image(i, &mut writer, image_format),
            Carrier::Audio(a) => wav::write_wav(a, writer),
            Carrier::Text(t) => writer
                .write_all(t.as_bytes())
                .map_err(|source| BitplaneError::WriteError { source }),
            Carrier::GenericBytes(b) => writer
                .write_all(b.as_bytes())
                .map_err(|source| BitplaneError::WriteError { source }),
        }
    }
}

impl Persist for Carrier {
    fn save_as(&self, file: &Path) -> Result<()> {
        let image_format = match self {
            Carrier::Image(_) => raster::output_format(file)?,
            _ => image::ImageFormat::Png,
        };
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            BitplaneError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer, image_format)?;

        writer
            .flush()
            .map_err(|source| BitplaneError::WriteError { source })
    }
}

fn read_bytes(file: &Path) -> Result<Vec<u8>> {
    fs::read(file).map_err(|source| {
        error!("Error reading file {file:?}: {source}");
        BitplaneError::ReadError { source }
    })
}
