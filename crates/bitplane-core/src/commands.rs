use std::fmt;
use std::path::{Path, PathBuf};

use crate::capacity::max_payload_bytes;
use crate::carrier::{Carrier, CarrierAdapter, CarrierKind};
use crate::codec::{self, CodecOptions};
use crate::Result;

pub fn hide(
    carrier: &Path,
    write_to_file: &Path,
    message: Option<String>,
    payload_file: Option<PathBuf>,
    options: CodecOptions,
) -> Result<()> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_carrier(carrier)
        .with_output(write_to_file)
        .use_message(message)
        .use_payload_file(payload_file)
        .execute()
}

pub fn unveil(
    secret_media: &Path,
    output_file: Option<PathBuf>,
    options: CodecOptions,
) -> Result<Vec<u8>> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .use_file(output_file)
        .execute()
}

/// What a carrier file can take with the given options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityReport {
    pub kind: CarrierKind,
    pub units: usize,
    pub channels_per_unit: usize,
    pub capacity_bits: u64,
    pub max_payload_bytes: u64,
}

impl fmt::Display for CapacityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "carrier kind:      {}", self.kind)?;
        writeln!(
            f,
            "addressable bytes: {} units × {} channels",
            self.units, self.channels_per_unit
        )?;
        writeln!(f, "capacity:          {} bits", self.capacity_bits)?;
        write!(f, "max payload:       {} bytes", self.max_payload_bytes)
    }
}

pub fn capacity(carrier: &Path, options: &CodecOptions) -> Result<CapacityReport> {
    let carrier = Carrier::from_file(carrier)?;

    Ok(capacity_of(&carrier, options))
}

pub fn capacity_of(carrier: &Carrier, options: &CodecOptions) -> CapacityReport {
    let capacity_bits = codec::capacity_bits(carrier, &options.bit_positions);

    CapacityReport {
        kind: carrier.kind(),
        units: carrier.unit_count(),
        channels_per_unit: carrier.channels_per_unit(),
        capacity_bits,
        max_payload_bytes: max_payload_bytes(capacity_bits, options.delimiter.len()),
    }
}
