//! # Bitplane Core API
//!
//! Hides a payload in selected bit planes of a carrier and recovers it.
//! A carrier is anything that can be viewed as a sequence of units with one
//! or more channel bytes each, see [`CarrierAdapter`][adapter]:
//! - images (PNG, BMP): one unit per pixel, 3 color channels, alpha untouched
//! - WAV audio: every byte of the frame buffer
//! - text and any other file: every byte as is
//!
//! The pure codec lives in [`codec`][codec], the file based entry points are
//! [`api::hide`][hide] and [`api::unveil`][unveil].
//!
//! # Usage Examples
//!
//! ## Hide a message inside a text carrier
//!
//! ```rust
//! use bitplane_core::carrier::{Carrier, TextCarrier};
//! use bitplane_core::Persist;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.txt");
//! Carrier::from(TextCarrier::from("lorem ipsum ".repeat(20)))
//!     .save_as(&carrier)
//!     .expect("Failed to write carrier");
//!
//! bitplane_core::api::hide::prepare()
//!     .with_message("Hello, World!")   // will hide this message inside the carrier
//!     .with_carrier(&carrier)
//!     .with_output(temp_dir.path().join("carrier-with-secret.txt"))
//!     .execute()
//!     .expect("Failed to hide message in carrier");
//!
//! let secret = bitplane_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("carrier-with-secret.txt"))
//!     .execute()
//!     .expect("Failed to unveil message from carrier");
//!
//! assert_eq!(secret, b"Hello, World!");
//! ```
//!
//! ## Use more than the least significant bit
//!
//! ```rust
//! use bitplane_core::carrier::ByteCarrier;
//! use bitplane_core::{decode, encode, BitPositions, CodecOptions};
//!
//! let options = CodecOptions::default().with_bit_positions(BitPositions::new(&[1, 2]).unwrap());
//! let carrier = ByteCarrier::new(vec![0xff; 64]);
//!
//! let encoded = encode(&carrier, b"two planes", &options).unwrap();
//! assert_eq!(decode(&encoded, &options).unwrap(), b"two planes");
//! ```
//!
//! [adapter]: ./carrier/trait.CarrierAdapter.html
//! [codec]: ./codec/index.html
//! [hide]: ./api/hide/index.html
//! [unveil]: ./api/unveil/index.html

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    // clippy::cast_lossless,
    // clippy::missing_panics_doc,
    clippy::redundant_else,
    // clippy::use_self,
)]

pub mod api;
pub mod bit_position;
pub mod capacity;
pub mod carrier;
pub mod codec;
pub mod commands;
pub mod error;
pub mod framing;
pub mod media;

pub use crate::bit_position::{BitPosition, BitPositions};
pub use crate::carrier::{Carrier, CarrierAdapter, CarrierKind};
pub use crate::codec::{capacity_bits, decode, encode, CodecOptions};
pub use crate::error::{BitplaneError, Result};
pub use crate::media::Persist;

#[cfg(test)]
mod test_utils {
    use image::{ImageBuffer, RgbaImage};

    /// This image has some traits:
    /// --------------x-------------
    /// | 0,0 -> (0, 1, 2, 3 ) | 1,0 -> (4, 5, 6, 7 ) | ...
    /// | 0,1 -> (20,21,22,23) | 1,1 -> (24,25,26,27) | ...
    /// | 0,2 -> (40,41,42,43) | 1,2 -> (44,45,46,47) | ...
    /// y ...
    pub fn prepare_5x5_image() -> RgbaImage {
        ImageBuffer::from_fn(5, 5, |x, y| {
            let i = (4 * x + 20 * y) as u8;
            image::Rgba([i, i + 1, i + 2, i + 3])
        })
    }
}
