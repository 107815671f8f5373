//! Delimiter terminated framing of a payload into a flat bit stream and back.
//!
//! Bytes are rendered most significant bit first, payload bytes followed by
//! delimiter bytes, without padding or separators.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use log::debug;

use crate::{BitplaneError, Result};

/// A framed payload, ready to be spread over a carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
}

impl Frame {
    pub fn bit_len(&self) -> u64 {
        self.bytes.len() as u64 * 8
    }

    pub fn bits(&self) -> FrameBits<'_> {
        FrameBits {
            remaining: self.bit_len(),
            reader: BitReader::endian(Cursor::new(self.bytes.as_slice()), BigEndian),
        }
    }

    /// the frame as a '0' / '1' string, mostly useful for diagnostics
    pub fn to_bit_string(&self) -> String {
        self.bits().map(|b| if b { '1' } else { '0' }).collect()
    }
}

/// frames `payload` with the trailing `delimiter`
pub fn frame(payload: &[u8], delimiter: &[u8]) -> Frame {
    let mut bytes = Vec::with_capacity(payload.len() + delimiter.len());
    bytes.extend_from_slice(payload);
    bytes.extend_from_slice(delimiter);

    Frame { bytes }
}

/// Bit cursor over a [`Frame`], most significant bit of every byte first
pub struct FrameBits<'f> {
    remaining: u64,
    reader: BitReader<Cursor<&'f [u8]>, BigEndian>,
}

impl Iterator for FrameBits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.reader.read_bit().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for FrameBits<'_> {}

/// State of an [`Unframer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnframeState {
    /// collecting bits, no delimiter seen yet
    Accumulating,
    /// the trailing bytes matched the delimiter, terminal
    Terminated,
    /// the bit source ran dry without a delimiter match, terminal
    Exhausted,
}

/// Result of unframing a bit stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unframed {
    /// recovered bytes, the delimiter stripped when `terminated` is true
    pub output: Vec<u8>,
    pub terminated: bool,
}

/// Streaming counterpart of [`frame`].
///
/// Bits are pushed one at a time. After every completed byte the buffer's
/// tail is compared to the delimiter and on a match the unframer terminates.
pub struct Unframer<'d> {
    delimiter: &'d [u8],
    bits: BitWriter<Vec<u8>, BigEndian>,
    bit_count: u64,
    state: UnframeState,
}

impl<'d> Unframer<'d> {
    pub fn new(delimiter: &'d [u8]) -> Result<Self> {
        if delimiter.is_empty() {
            return Err(BitplaneError::EmptyDelimiter);
        }

        Ok(Self {
            delimiter,
            bits: BitWriter::endian(Vec::new(), BigEndian),
            bit_count: 0,
            state: UnframeState::Accumulating,
        })
    }

    pub fn state(&self) -> UnframeState {
        self.state
    }

    pub fn push_bit(&mut self, bit: bool) -> Result<UnframeState> {
        if self.state != UnframeState::Accumulating {
            return Ok(self.state);
        }

        self.bits.write_bit(bit)?;
        self.bit_count += 1;
        if self.bits.byte_aligned() {
            if let Some(buffer) = self.bits.writer() {
                if buffer.ends_with(self.delimiter) {
                    self.state = UnframeState::Terminated;
                }
            }
        }

        Ok(self.state)
    }

    /// signals that no more bits will come
    pub fn exhaust(&mut self) {
        if self.state == UnframeState::Accumulating {
            self.state = UnframeState::Exhausted;
        }
    }

    /// complete bytes gathered so far, incomplete trailing bits are dropped
    pub fn into_unframed(mut self) -> Unframed {
        self.exhaust();
        let terminated = self.state == UnframeState::Terminated;
        let mut output = self.bits.into_writer();
        if terminated {
            output.truncate(output.len() - self.delimiter.len());
        }
        debug!(
            "unframed {} bits into {} bytes, terminated: {terminated}",
            self.bit_count,
            output.len()
        );

        Unframed { output, terminated }
    }

    /// the payload, or [`BitplaneError::DelimiterNotFound`] if the delimiter never showed up
    pub fn finish(self) -> Result<Vec<u8>> {
        let unframed = self.into_unframed();
        if unframed.terminated {
            Ok(unframed.output)
        } else {
            Err(BitplaneError::DelimiterNotFound)
        }
    }
}

/// unframes a whole bit stream at once, stops at the first delimiter match
pub fn unframe<I>(bits: I, delimiter: &[u8]) -> Result<Unframed>
where
    I: IntoIterator<Item = bool>,
{
    let mut unframer = Unframer::new(delimiter)?;
    for bit in bits {
        if unframer.push_bit(bit)? == UnframeState::Terminated {
            break;
        }
    }

    Ok(unframer.into_unframed())
}
