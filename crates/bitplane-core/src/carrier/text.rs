use super::{CarrierAdapter, ChannelAddress};

/// Text carrier, units are the bytes of the file content as stored on disk.
///
/// Writing bit position 8 turns ASCII bytes into non-ASCII ones, so the
/// encoded content is not guaranteed to stay valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCarrier {
    content: Vec<u8>,
}

impl TextCarrier {
    pub fn new(content: Vec<u8>) -> Self {
        Self { content }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.content
    }
}

impl From<&str> for TextCarrier {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes().to_vec())
    }
}

impl From<String> for TextCarrier {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl CarrierAdapter for TextCarrier {
    fn unit_count(&self) -> usize {
        self.content.len()
    }

    fn channels_per_unit(&self) -> usize {
        1
    }

    fn channel_byte(&self, at: ChannelAddress) -> u8 {
        debug_assert_eq!(at.channel, 0);
        self.content[at.unit]
    }

    fn set_channel_byte(&mut self, at: ChannelAddress, value: u8) {
        debug_assert_eq!(at.channel, 0);
        self.content[at.unit] = value;
    }
}
