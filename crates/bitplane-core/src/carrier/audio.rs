use super::{CarrierAdapter, ChannelAddress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Int,
    Float,
}

/// Stream parameters that travel next to the frame bytes, the codec never looks at them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioParams {
    pub channels: u16,
    /// bytes per sample
    pub sample_width: u16,
    pub frame_rate: u32,
    pub sample_format: SampleFormat,
}

impl AudioParams {
    pub fn bytes_per_frame(&self) -> usize {
        self.channels as usize * self.sample_width as usize
    }
}

/// PCM audio carrier, units are the bytes of the interleaved little-endian frame buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioCarrier {
    params: AudioParams,
    frames: Vec<u8>,
}

impl AudioCarrier {
    pub fn new(params: AudioParams, frames: Vec<u8>) -> Self {
        Self { params, frames }
    }

    pub fn params(&self) -> &AudioParams {
        &self.params
    }

    pub fn frames(&self) -> &[u8] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        match self.params.bytes_per_frame() {
            0 => 0,
            n => self.frames.len() / n,
        }
    }

    pub fn into_parts(self) -> (AudioParams, Vec<u8>) {
        (self.params, self.frames)
    }
}

impl CarrierAdapter for AudioCarrier {
    fn unit_count(&self) -> usize {
        self.frames.len()
    }

    fn channels_per_unit(&self) -> usize {
        1
    }

    fn channel_byte(&self, at: ChannelAddress) -> u8 {
        debug_assert_eq!(at.channel, 0);
        self.frames[at.unit]
    }

    fn set_channel_byte(&mut self, at: ChannelAddress, value: u8) {
        debug_assert_eq!(at.channel, 0);
        self.frames[at.unit] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo_16bit() -> AudioParams {
        AudioParams {
            channels: 2,
            sample_width: 2,
            frame_rate: 44_100,
            sample_format: SampleFormat::Int,
        }
    }

    #[test]
    fn every_frame_byte_should_be_a_unit() {
        let carrier = AudioCarrier::new(stereo_16bit(), (0..16).collect());
        assert_eq!(carrier.unit_count(), 16);
        assert_eq!(carrier.channels_per_unit(), 1);
        assert_eq!(carrier.frame_count(), 4);
        assert_eq!(carrier.channel_byte(ChannelAddress::new(9, 0)), 9);
    }

    #[test]
    fn writes_should_only_touch_the_frame_buffer() {
        let mut carrier = AudioCarrier::new(stereo_16bit(), vec![0; 8]);
        carrier.set_channel_byte(ChannelAddress::new(3, 0), 0xab);

        let (params, frames) = carrier.into_parts();
        assert_eq!(params, stereo_16bit());
        assert_eq!(frames, vec![0, 0, 0, 0xab, 0, 0, 0, 0]);
    }
}
