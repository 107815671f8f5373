//! WAV <-> frame byte buffer, based on `WavReader` and `WavWriter` by `hound` crate.
//!
//! The frame buffer has the layout of the WAV `data` chunk: interleaved,
//! little-endian samples, 8 bit samples unsigned.

use std::io::{Read, Seek, Write};

use hound::{Sample, WavReader, WavSpec, WavWriter};
use log::error;

use crate::carrier::{AudioCarrier, AudioParams, SampleFormat};
use crate::{BitplaneError, Result};

pub fn read_wav<R: Read>(reader: R) -> Result<AudioCarrier> {
    let mut reader = WavReader::new(reader).map_err(|e| {
        error!("Error reading wav header: {e}");
        BitplaneError::InvalidAudioMedia
    })?;
    let spec = reader.spec();
    let mut frames = Vec::with_capacity(reader.len() as usize * spec.bits_per_sample as usize / 8);

    match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 8) => {
            for s in samples::<_, i8>(&mut reader)? {
                frames.push(s as u8 ^ 0x80);
            }
        }
        (hound::SampleFormat::Int, 16) => {
            for s in samples::<_, i16>(&mut reader)? {
                frames.extend_from_slice(&s.to_le_bytes());
            }
        }
        (hound::SampleFormat::Int, 24) => {
            for s in samples::<_, i32>(&mut reader)? {
                frames.extend_from_slice(&s.to_le_bytes()[..3]);
            }
        }
        (hound::SampleFormat::Int, 32) => {
            for s in samples::<_, i32>(&mut reader)? {
                frames.extend_from_slice(&s.to_le_bytes());
            }
        }
        (hound::SampleFormat::Float, 32) => {
            for s in samples::<_, f32>(&mut reader)? {
                frames.extend_from_slice(&s.to_le_bytes());
            }
        }
        (_, bits_per_sample) => {
            return Err(BitplaneError::UnsupportedAudioFormat { bits_per_sample })
        }
    }

    let params = AudioParams {
        channels: spec.channels,
        sample_width: spec.bits_per_sample / 8,
        frame_rate: spec.sample_rate,
        sample_format: match spec.sample_format {
            hound::SampleFormat::Int => SampleFormat::Int,
            hound::SampleFormat::Float => SampleFormat::Float,
        },
    };

    Ok(AudioCarrier::new(params, frames))
}

fn samples<R: Read, S: Sample>(reader: &mut WavReader<R>) -> Result<Vec<S>> {
    reader
        .samples::<S>()
        .collect::<std::result::Result<Vec<S>, hound::Error>>()
        .map_err(|e| {
            error!("Error reading wav samples: {e}");
            BitplaneError::InvalidAudioMedia
        })
}

pub fn write_wav<W: Write + Seek>(carrier: &AudioCarrier, writer: W) -> Result<()> {
    let params = carrier.params();
    let spec = WavSpec {
        channels: params.channels,
        sample_rate: params.frame_rate,
        bits_per_sample: params.sample_width * 8,
        sample_format: match params.sample_format {
            SampleFormat::Int => hound::SampleFormat::Int,
            SampleFormat::Float => hound::SampleFormat::Float,
        },
    };
    let mut wav = WavWriter::new(writer, spec).map_err(|e| {
        error!("Error creating wav writer: {e}");
        BitplaneError::AudioEncodingError
    })?;

    let frames = carrier.frames();
    let written = match (params.sample_format, params.sample_width) {
        (SampleFormat::Int, 1) => frames
            .iter()
            .try_for_each(|b| wav.write_sample((b ^ 0x80) as i8)),
        (SampleFormat::Int, 2) => frames
            .chunks_exact(2)
            .try_for_each(|c| wav.write_sample(i16::from_le_bytes([c[0], c[1]]))),
        (SampleFormat::Int, 3) => frames.chunks_exact(3).try_for_each(|c| {
            let sign = if c[2] & 0x80 != 0 { 0xff } else { 0x00 };
            wav.write_sample(i32::from_le_bytes([c[0], c[1], c[2], sign]))
        }),
        (SampleFormat::Int, 4) => frames
            .chunks_exact(4)
            .try_for_each(|c| wav.write_sample(i32::from_le_bytes([c[0], c[1], c[2], c[3]]))),
        (SampleFormat::Float, 4) => frames
            .chunks_exact(4)
            .try_for_each(|c| wav.write_sample(f32::from_le_bytes([c[0], c[1], c[2], c[3]]))),
        (_, sample_width) => {
            return Err(BitplaneError::UnsupportedAudioFormat {
                bits_per_sample: sample_width * 8,
            })
        }
    };

    written
        .and_then(|_| wav.finalize())
        .map_err(|e| {
            error!("Error writing wav samples: {e}");
            BitplaneError::AudioEncodingError
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn wav_bytes<S: Sample + Copy>(spec: WavSpec, samples: &[S]) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut buffer, spec).expect("Cannot create writer");
            for s in samples {
                writer.write_sample(*s).expect("Cannot write sample");
            }
            writer.finalize().expect("Cannot finalize");
        }
        buffer.into_inner()
    }

    fn spec(bits_per_sample: u16, sample_format: hound::SampleFormat) -> WavSpec {
        WavSpec {
            channels: 2,
            sample_rate: 22_050,
            bits_per_sample,
            sample_format,
        }
    }

    #[test]
    fn should_flatten_16_bit_samples_little_endian() {
        let wav = wav_bytes(spec(16, hound::SampleFormat::Int), &[0x0102_i16, -2]);
        let carrier = read_wav(Cursor::new(wav)).unwrap();

        assert_eq!(carrier.frames(), &[0x02, 0x01, 0xfe, 0xff]);
        assert_eq!(
            carrier.params(),
            &AudioParams {
                channels: 2,
                sample_width: 2,
                frame_rate: 22_050,
                sample_format: SampleFormat::Int,
            }
        );
    }

    #[test]
    fn should_store_8_bit_samples_unsigned() {
        let wav = wav_bytes(spec(8, hound::SampleFormat::Int), &[-128_i8, 0, 127, -1]);
        let carrier = read_wav(Cursor::new(wav)).unwrap();

        assert_eq!(carrier.frames(), &[0x00, 0x80, 0xff, 0x7f]);
    }

    #[test]
    fn should_write_back_what_was_read() {
        for (bits, samples) in [
            (8_u16, vec![-128_i32, 0, 5, 127]),
            (16, vec![-32768, 0, 12345, 32767]),
            (24, vec![-8_388_608, -1, 4242, 8_388_607]),
            (32, vec![i32::MIN, -7, 0, i32::MAX]),
        ] {
            let wav = match bits {
                8 => wav_bytes(
                    spec(bits, hound::SampleFormat::Int),
                    &samples.iter().map(|s| *s as i8).collect::<Vec<_>>(),
                ),
                16 => wav_bytes(
                    spec(bits, hound::SampleFormat::Int),
                    &samples.iter().map(|s| *s as i16).collect::<Vec<_>>(),
                ),
                _ => wav_bytes(spec(bits, hound::SampleFormat::Int), &samples),
            };
            let carrier = read_wav(Cursor::new(wav.clone())).unwrap();

            let mut written = Cursor::new(Vec::new());
            write_wav(&carrier, &mut written).unwrap();
            assert_eq!(written.into_inner(), wav, "{bits} bit audio changed");
        }
    }

    #[test]
    fn should_handle_float_samples() {
        let wav = wav_bytes(spec(32, hound::SampleFormat::Float), &[0.5_f32, -0.25]);
        let carrier = read_wav(Cursor::new(wav.clone())).unwrap();
        assert_eq!(carrier.params().sample_format, SampleFormat::Float);
        assert_eq!(carrier.frames().len(), 8);

        let mut written = Cursor::new(Vec::new());
        write_wav(&carrier, &mut written).unwrap();
        assert_eq!(written.into_inner(), wav);
    }

    #[test]
    fn should_fail_on_garbage() {
        assert!(matches!(
            read_wav(Cursor::new(b"RIFF but not really".to_vec())),
            Err(BitplaneError::InvalidAudioMedia)
        ));
    }
}
