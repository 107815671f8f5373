use std::fs;
use std::io::{Seek, Write};
use std::path::Path;

use image::{ImageError, ImageFormat};
use log::error;

use crate::carrier::{ImageCarrier, PixelGrid};
use crate::{BitplaneError, Result};

/// decodes a PNG or BMP file into an image carrier
pub fn read_image(path: &Path) -> Result<ImageCarrier> {
    let buffer = fs::read(path).map_err(|source| {
        error!("Error reading image {path:?}: {source}");
        BitplaneError::ReadError { source }
    })?;

    read_image_from_memory(&buffer)
}

/// decodes PNG or BMP bytes, the format is guessed from the content
pub fn read_image_from_memory(buffer: &[u8]) -> Result<ImageCarrier> {
    let img = image::load_from_memory(buffer).map_err(|e| match e {
        ImageError::IoError(source) => BitplaneError::ReadError { source },
        e => {
            error!("Error decoding image: {e}");
            BitplaneError::InvalidImageMedia
        }
    })?;

    ImageCarrier::from_dynamic(img).map_err(|e| {
        error!("Error reading image: {e}");
        e
    })
}

/// lossless output format for `path`, lossy formats would destroy the hidden bits
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    match ImageFormat::from_path(path) {
        Ok(format @ (ImageFormat::Png | ImageFormat::Bmp)) => Ok(format),
        _ => Err(BitplaneError::UnsupportedCarrier {
            extension: super::extension_of(path),
        }),
    }
}

pub fn write_image<W: Write + Seek>(
    carrier: &ImageCarrier,
    writer: &mut W,
    format: ImageFormat,
) -> Result<()> {
    let written = match carrier.pixels() {
        PixelGrid::Rgb(i) => i.write_to(writer, format),
        PixelGrid::Rgba(i) => i.write_to(writer, format),
    };

    written.map_err(|e| {
        error!("Error saving image: {e}");
        BitplaneError::ImageEncodingError
    })
}
