use thiserror::Error;

pub type Result<T> = std::result::Result<T, BitplaneError>;

#[derive(Error, Debug)]
pub enum BitplaneError {
    /// Represents a payload that does not fit into the carrier with the chosen bit positions
    #[error("Capacity Error: the payload needs {needed_bits} bits including the delimiter, but the carrier offers only {available_bits} bits")]
    CapacityExceeded {
        needed_bits: u64,
        available_bits: u64,
    },

    /// Represents a bit position outside of 1 (LSB) ..= 8 (MSB)
    #[error("Invalid bit position {0}, expected a value from 1 (LSB) to 8 (MSB)")]
    InvalidBitPosition(u8),

    /// Represents a bit position that was given more than once
    #[error("Bit position {0} was given more than once")]
    DuplicateBitPosition(u8),

    /// Represents an empty delimiter, which would terminate every decode after the first byte
    #[error("The delimiter must not be empty")]
    EmptyDelimiter,

    /// Represents an unsupported carrier file. For example, a Movie file is not supported
    #[error("Carrier format is not supported: {extension:?}")]
    UnsupportedCarrier { extension: String },

    /// Represents a decode that ran through the whole carrier without finding the delimiter
    #[error("No delimiter found, bit positions, delimiter or carrier do not match the ones used for hiding")]
    DelimiterNotFound,

    /// Represents an invalid carrier image. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents an invalid carrier audio. For example, a broken WAV file
    #[error("Audio media is invalid")]
    InvalidAudioMedia,

    /// Represents an image whose color type can not be addressed without a lossy conversion
    #[error("Image color type {color} is not supported, only 8 bit RGB and RGBA images are")]
    UnsupportedColorType { color: String },

    /// Represents a WAV sample layout that can not be flattened into frame bytes
    #[error("Audio with {bits_per_sample} bits per sample is not supported")]
    UnsupportedAudioFormat { bits_per_sample: u16 },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure when encoding an audio file.
    #[error("Audio encoding error")]
    AudioEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing payload, neither a message nor a payload file was given")]
    MissingPayload,
}
