use super::{CarrierAdapter, ChannelAddress};

/// Raw file carrier, units are the file's bytes.
///
/// Container structure (zip based office documents, mp3 frames, jpeg
/// segments ..) is not respected, hiding data in such files may render them
/// unreadable for their usual applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteCarrier {
    bytes: Vec<u8>,
}

impl ByteCarrier {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for ByteCarrier {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl CarrierAdapter for ByteCarrier {
    fn unit_count(&self) -> usize {
        self.bytes.len()
    }

    fn channels_per_unit(&self) -> usize {
        1
    }

    fn channel_byte(&self, at: ChannelAddress) -> u8 {
        debug_assert_eq!(at.channel, 0);
        self.bytes[at.unit]
    }

    fn set_channel_byte(&mut self, at: ChannelAddress, value: u8) {
        debug_assert_eq!(at.channel, 0);
        self.bytes[at.unit] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_every_byte_as_a_single_channel_unit() {
        let mut carrier = ByteCarrier::from(vec![1, 2, 3]);
        assert_eq!(carrier.unit_count(), 3);
        assert_eq!(carrier.iteration_order().count(), 3);

        carrier.set_channel_byte(ChannelAddress::new(2, 0), 9);
        assert_eq!(carrier.into_bytes(), vec![1, 2, 9]);
    }
}
