use image::{ImageBuffer, RgbaImage};
use proptest::prelude::*;

use bitplane_core::carrier::{ByteCarrier, ImageCarrier, PixelGrid, TextCarrier};
use bitplane_core::{decode, encode, BitPositions, BitplaneError, CodecOptions};

const DELIMITER: &[u8] = b"=====";

/// the delimiter shows up for the first time right behind the payload
fn terminates_in_place(payload: &[u8]) -> bool {
    let framed = [payload, DELIMITER].concat();
    framed
        .windows(DELIMITER.len())
        .position(|w| w == DELIMITER)
        == Some(payload.len())
}

/// payloads with plenty of delimiter bytes, but never an early delimiter match
fn payload() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![1 => Just(b'='), 3 => any::<u8>()], 0..64)
        .prop_filter("delimiter would match early", |p| terminates_in_place(p))
}

/// non empty, ascending subsets of 1..=8
fn bit_positions() -> impl Strategy<Value = BitPositions> {
    prop::sample::subsequence((1..=8_u8).collect::<Vec<_>>(), 1..=8)
        .prop_map(|p| BitPositions::new(&p).unwrap())
}

fn rgba_image() -> impl Strategy<Value = RgbaImage> {
    prop::collection::vec(any::<u8>(), 16 * 16 * 4)
        .prop_map(|raw| ImageBuffer::from_raw(16, 16, raw).unwrap())
}

fn untouched_mask(positions: &BitPositions) -> u8 {
    !positions.iter().fold(0, |mask, p| mask | p.mask())
}

#[test]
fn early_matches_should_be_filtered() {
    assert!(terminates_in_place(b"a=b==c===d====e"));
    assert!(terminates_in_place(b""));
    assert!(!terminates_in_place(b"a=====b"));
    assert!(!terminates_in_place(b"ab="));
    assert!(!terminates_in_place(b"ab===="));
}

proptest! {
    #[test]
    fn prop_bytes_round_trip(
        carrier in prop::collection::vec(any::<u8>(), 600..1024),
        payload in payload(),
        positions in bit_positions(),
    ) {
        let options = CodecOptions::default().with_bit_positions(positions);
        let carrier = ByteCarrier::new(carrier);

        let encoded = encode(&carrier, &payload, &options).unwrap();
        prop_assert_eq!(decode(&encoded, &options).unwrap(), payload);
    }

    #[test]
    fn prop_bits_outside_the_positions_stay_untouched(
        carrier in prop::collection::vec(any::<u8>(), 600..1024),
        payload in payload(),
        positions in bit_positions(),
    ) {
        let keep = untouched_mask(&positions);
        let options = CodecOptions::default().with_bit_positions(positions);
        let carrier = TextCarrier::new(carrier);

        let encoded = encode(&carrier, &payload, &options).unwrap();
        prop_assert_eq!(encoded.as_bytes().len(), carrier.as_bytes().len());
        for (before, after) in carrier.as_bytes().iter().zip(encoded.as_bytes()) {
            prop_assert_eq!(before & keep, after & keep);
        }
    }

    #[test]
    fn prop_image_round_trip_keeps_alpha(
        img in rgba_image(),
        payload in payload(),
        positions in bit_positions(),
    ) {
        let options = CodecOptions::default().with_bit_positions(positions);
        let carrier = ImageCarrier::from_rgba(img.clone());

        let encoded = encode(&carrier, &payload, &options).unwrap();
        prop_assert_eq!(decode(&encoded, &options).unwrap(), payload);

        let PixelGrid::Rgba(encoded_img) = encoded.pixels() else {
            panic!("rgba image turned into something else");
        };
        for (before, after) in img.pixels().zip(encoded_img.pixels()) {
            prop_assert_eq!(before[3], after[3]);
        }
    }

    #[test]
    fn prop_capacity_boundary_is_bit_exact(payload in payload()) {
        let options = CodecOptions::default();
        let needed = (payload.len() + options.delimiter.len()) * 8;

        let exact = ByteCarrier::new(vec![0; needed]);
        let encoded = encode(&exact, &payload, &options).unwrap();
        prop_assert_eq!(decode(&encoded, &options).unwrap(), payload.clone());

        let one_short = ByteCarrier::new(vec![0; needed - 1]);
        let is_capacity_exceeded = matches!(
            encode(&one_short, &payload, &options),
            Err(BitplaneError::CapacityExceeded { .. })
        );
        prop_assert!(is_capacity_exceeded);
    }
}
