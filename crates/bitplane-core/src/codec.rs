//! The bit-plane codec engine.
//!
//! Encoding spreads the framed payload over the carrier: channel bytes are
//! visited in [`CarrierAdapter::iteration_order`] and inside every byte the
//! configured bit positions are filled in the given order. Decoding walks the
//! very same path and feeds the bits into an [`Unframer`] until the delimiter
//! shows up.

use log::debug;

use crate::bit_position::BitPositions;
use crate::capacity::{self, ensure_fits, framed_bits};
use crate::carrier::CarrierAdapter;
use crate::framing::{frame, UnframeState, Unframer};
use crate::{BitplaneError, Result};

pub const DEFAULT_DELIMITER: &[u8] = b"=====";

/// Explicit per call configuration, encode and decode need identical options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// bit positions in fill order, usually ascending
    pub bit_positions: BitPositions,

    /// bytes that terminate the payload inside the carrier
    pub delimiter: Vec<u8>,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            bit_positions: BitPositions::lsb(),
            delimiter: DEFAULT_DELIMITER.to_vec(),
        }
    }
}

impl CodecOptions {
    pub fn new(bit_positions: BitPositions, delimiter: impl Into<Vec<u8>>) -> Result<Self> {
        let options = Self {
            bit_positions,
            delimiter: delimiter.into(),
        };
        options.validate()?;

        Ok(options)
    }

    pub fn with_bit_positions(mut self, bit_positions: BitPositions) -> Self {
        self.bit_positions = bit_positions;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<Vec<u8>>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(BitplaneError::EmptyDelimiter);
        }

        Ok(())
    }
}

/// maximum number of bits `carrier` can take with the given positions
pub fn capacity_bits<C>(carrier: &C, bit_positions: &BitPositions) -> u64
where
    C: CarrierAdapter + ?Sized,
{
    capacity::capacity_bits(
        carrier.unit_count(),
        carrier.channels_per_unit(),
        bit_positions,
    )
}

/// hides `payload` in a copy of `carrier`, the input stays untouched
///
/// ## Example of usage
/// ```rust
/// use bitplane_core::carrier::TextCarrier;
/// use bitplane_core::codec::{decode, encode, CodecOptions};
/// use bitplane_core::BitPositions;
///
/// let carrier = TextCarrier::new(vec![0; 32]);
/// let options = CodecOptions::new(BitPositions::lsb(), "##").unwrap();
///
/// let encoded = encode(&carrier, b"Hi", &options).unwrap();
/// assert_eq!(decode(&encoded, &options).unwrap(), b"Hi");
/// ```
pub fn encode<C>(carrier: &C, payload: &[u8], options: &CodecOptions) -> Result<C>
where
    C: CarrierAdapter + Clone,
{
    options.validate()?;
    let available = capacity_bits(carrier, &options.bit_positions);
    let needed = framed_bits(payload.len(), options.delimiter.len());
    ensure_fits(needed, available)?;

    let frame = frame(payload, &options.delimiter);
    let mut bits = frame.bits().peekable();
    let mut encoded = carrier.clone();
    let mut touched = 0_usize;

    for at in carrier.iteration_order() {
        if bits.peek().is_none() {
            break;
        }
        let mut byte = encoded.channel_byte(at);
        for position in options.bit_positions.iter() {
            match bits.next() {
                Some(bit) => byte = position.write(byte, bit),
                None => break,
            }
        }
        encoded.set_channel_byte(at, byte);
        touched += 1;
    }
    debug!(
        "encoded {needed} bits into {touched} channel bytes using positions {}",
        options.bit_positions
    );

    Ok(encoded)
}

/// recovers the payload hidden by [`encode`] with the same options
pub fn decode<C>(carrier: &C, options: &CodecOptions) -> Result<Vec<u8>>
where
    C: CarrierAdapter + ?Sized,
{
    let mut unframer = Unframer::new(&options.delimiter)?;

    'walk: for at in carrier.iteration_order() {
        let byte = carrier.channel_byte(at);
        for position in options.bit_positions.iter() {
            if unframer.push_bit(position.read(byte))? == UnframeState::Terminated {
                break 'walk;
            }
        }
    }

    unframer.finish()
}
