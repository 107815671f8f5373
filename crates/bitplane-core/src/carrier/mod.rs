//! Uniform "ordered addressable byte units" view over the supported carriers.
//!
//! Every carrier is a sequence of units, each unit has one or more channel
//! bytes. Encoding and decoding walk `(unit, channel)` pairs in the order
//! given by [`CarrierAdapter::iteration_order`], which is unit-major and
//! channel-minor for all carriers.

mod audio;
mod bytes;
mod image;
mod text;

use std::fmt;

use enum_dispatch::enum_dispatch;

pub use self::audio::{AudioCarrier, AudioParams, SampleFormat};
pub use self::bytes::ByteCarrier;
pub use self::image::{ImageCarrier, PixelGrid};
pub use self::text::TextCarrier;

use crate::{BitplaneError, Result};

/// Address of one channel byte inside a carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelAddress {
    pub unit: usize,
    pub channel: usize,
}

impl ChannelAddress {
    pub fn new(unit: usize, channel: usize) -> Self {
        Self { unit, channel }
    }
}

/// Byte level access to a carrier.
///
/// `channel_byte` and `set_channel_byte` panic when addressed outside of
/// `unit_count()` × `channels_per_unit()`.
#[enum_dispatch]
pub trait CarrierAdapter {
    fn unit_count(&self) -> usize;

    fn channels_per_unit(&self) -> usize;

    fn channel_byte(&self, at: ChannelAddress) -> u8;

    fn set_channel_byte(&mut self, at: ChannelAddress, value: u8);

    /// reproducible walk over all channel bytes
    fn iteration_order(&self) -> ChannelWalk {
        ChannelWalk::new(self.unit_count(), self.channels_per_unit())
    }
}

/// Iterates all `(unit, channel)` addresses, unit by unit
#[derive(Debug, Clone)]
pub struct ChannelWalk {
    units: usize,
    channels: usize,
    i: usize,
}

impl ChannelWalk {
    pub fn new(units: usize, channels: usize) -> Self {
        Self {
            units,
            channels,
            i: 0,
        }
    }

    fn len_total(&self) -> usize {
        self.units * self.channels
    }
}

impl Iterator for ChannelWalk {
    type Item = ChannelAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.len_total() {
            return None;
        }
        let at = ChannelAddress::new(self.i / self.channels, self.i % self.channels);
        self.i += 1;

        Some(at)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len_total() - self.i;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ChannelWalk {}

/// the closed set of carriers the codec knows about
#[enum_dispatch(CarrierAdapter)]
#[derive(Debug, Clone, PartialEq)]
pub enum Carrier {
    Image(ImageCarrier),
    Audio(AudioCarrier),
    Text(TextCarrier),
    GenericBytes(ByteCarrier),
}

impl Carrier {
    pub fn kind(&self) -> CarrierKind {
        match self {
            Carrier::Image(_) => CarrierKind::Image,
            Carrier::Audio(_) => CarrierKind::Audio,
            Carrier::Text(_) => CarrierKind::Text,
            Carrier::GenericBytes(_) => CarrierKind::GenericBytes,
        }
    }
}

/// Carrier kind, resolved once at the boundary from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarrierKind {
    Image,
    Audio,
    Text,
    GenericBytes,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "bmp"];
const AUDIO_EXTENSIONS: &[&str] = &["wav"];
const TEXT_EXTENSIONS: &[&str] = &["txt"];
const GENERIC_EXTENSIONS: &[&str] = &[
    "mp3", "mp4", "docx", "xlsx", "csv", "pptx", "jpg", "jpeg", "gif", "pdf", "bin",
];

impl CarrierKind {
    pub fn from_extension(extension: &str) -> Result<Self> {
        let ext = extension.to_lowercase();
        let ext = ext.as_str();
        if IMAGE_EXTENSIONS.contains(&ext) {
            Ok(Self::Image)
        } else if AUDIO_EXTENSIONS.contains(&ext) {
            Ok(Self::Audio)
        } else if TEXT_EXTENSIONS.contains(&ext) {
            Ok(Self::Text)
        } else if GENERIC_EXTENSIONS.contains(&ext) {
            Ok(Self::GenericBytes)
        } else {
            Err(BitplaneError::UnsupportedCarrier {
                extension: extension.to_string(),
            })
        }
    }
}

impl fmt::Display for CarrierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CarrierKind::Image => "image",
            CarrierKind::Audio => "audio",
            CarrierKind::Text => "text",
            CarrierKind::GenericBytes => "generic bytes",
        };
        f.write_str(name)
    }
}
