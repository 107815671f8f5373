use std::ops::DerefMut;

use image::{DynamicImage, RgbImage, RgbaImage};

use super::{CarrierAdapter, ChannelAddress};
use crate::{BitplaneError, Result};

/// number of color channels used per pixel, alpha is never addressed
const COLOR_CHANNELS: usize = 3;

/// decoded pixel grid, alpha is kept only to be passed through untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelGrid {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

/// Image carrier, units are pixels in row-major order with R, G and B as channels.
///
/// ## Example of usage
/// ```rust
/// use bitplane_core::carrier::{CarrierAdapter, ChannelAddress, ImageCarrier};
/// use image::{ImageBuffer, Rgba};
///
/// let carrier = ImageCarrier::from_rgba(ImageBuffer::from_fn(2, 2, |x, y| {
///     Rgba([x as u8, y as u8, 7, 255])
/// }));
///
/// assert_eq!(carrier.unit_count(), 4);
/// assert_eq!(carrier.channels_per_unit(), 3);
/// // the second unit is the pixel at x=1, y=0
/// assert_eq!(carrier.channel_byte(ChannelAddress::new(1, 0)), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCarrier {
    pixels: PixelGrid,
}

impl ImageCarrier {
    pub fn from_rgb(img: RgbImage) -> Self {
        Self {
            pixels: PixelGrid::Rgb(img),
        }
    }

    pub fn from_rgba(img: RgbaImage) -> Self {
        Self {
            pixels: PixelGrid::Rgba(img),
        }
    }

    /// takes 8 bit RGB and RGBA images as they are, any other color type would
    /// need a lossy conversion and is refused
    pub fn from_dynamic(img: DynamicImage) -> Result<Self> {
        match img {
            DynamicImage::ImageRgb8(i) => Ok(Self::from_rgb(i)),
            DynamicImage::ImageRgba8(i) => Ok(Self::from_rgba(i)),
            other => Err(BitplaneError::UnsupportedColorType {
                color: format!("{:?}", other.color()),
            }),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match &self.pixels {
            PixelGrid::Rgb(i) => i.dimensions(),
            PixelGrid::Rgba(i) => i.dimensions(),
        }
    }

    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    pub fn into_dynamic(self) -> DynamicImage {
        match self.pixels {
            PixelGrid::Rgb(i) => DynamicImage::ImageRgb8(i),
            PixelGrid::Rgba(i) => DynamicImage::ImageRgba8(i),
        }
    }

    fn bytes_per_pixel(&self) -> usize {
        match &self.pixels {
            PixelGrid::Rgb(_) => 3,
            PixelGrid::Rgba(_) => 4,
        }
    }

    fn samples(&self) -> &[u8] {
        match &self.pixels {
            PixelGrid::Rgb(i) => i.as_raw(),
            PixelGrid::Rgba(i) => i.as_raw(),
        }
    }

    fn samples_mut(&mut self) -> &mut [u8] {
        match &mut self.pixels {
            PixelGrid::Rgb(i) => i.deref_mut(),
            PixelGrid::Rgba(i) => i.deref_mut(),
        }
    }

    fn offset(&self, at: ChannelAddress) -> usize {
        assert!(
            at.channel < COLOR_CHANNELS,
            "color channel {} out of range",
            at.channel
        );
        at.unit * self.bytes_per_pixel() + at.channel
    }
}

impl CarrierAdapter for ImageCarrier {
    fn unit_count(&self) -> usize {
        let (w, h) = self.dimensions();
        w as usize * h as usize
    }

    fn channels_per_unit(&self) -> usize {
        COLOR_CHANNELS
    }

    fn channel_byte(&self, at: ChannelAddress) -> u8 {
        let i = self.offset(at);
        self.samples()[i]
    }

    fn set_channel_byte(&mut self, at: ChannelAddress, value: u8) {
        let i = self.offset(at);
        self.samples_mut()[i] = value;
    }
}
