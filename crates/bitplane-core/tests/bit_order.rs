use bitplane_core::carrier::ByteCarrier;
use bitplane_core::framing::frame;
use bitplane_core::{encode, BitPositions, CodecOptions};

#[test]
fn should_return_the_bits_of_h_most_significant_first() {
    let framed = frame(b"H", b"e");
    let mut it = framed.bits();

    assert!(!it.next().unwrap(), "1st bit not correct");
    assert!(it.next().unwrap(), "2nd bit not correct");
    assert!(!it.next().unwrap(), "3rd bit not correct");
    assert!(!it.next().unwrap(), "4th bit not correct");
    assert!(it.next().unwrap(), "5th bit not correct");
    assert!(!it.next().unwrap(), "6th bit not correct");
    assert!(!it.next().unwrap(), "7th bit not correct");
    assert!(!it.next().unwrap(), "8th bit not correct");
}

#[test]
fn should_continue_with_the_delimiter_after_skip_8() {
    let bits: String = frame(b"H", b"e")
        .bits()
        .skip(8)
        .map(|b| if b { '1' } else { '0' })
        .collect();

    assert_eq!(bits, "01100101");
}

#[test]
fn should_spread_one_bit_per_byte_in_carrier_order() {
    let carrier = ByteCarrier::new(vec![0b1111_0000; 16]);
    let options = CodecOptions::default().with_delimiter("e");

    let encoded = encode(&carrier, b"H", &options).unwrap();
    let lsbs: Vec<u8> = encoded.as_bytes().iter().map(|b| b & 1).collect();

    assert_eq!(lsbs, vec![0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 1]);
    assert!(
        encoded.as_bytes().iter().all(|b| b & 0b1111_1110 == 0b1111_0000),
        "bits outside of the lsb changed"
    );
}

#[test]
fn should_fill_the_msb_plane_when_asked_to() {
    let carrier = ByteCarrier::new(vec![0; 16]);
    let options = CodecOptions::default()
        .with_delimiter("e")
        .with_bit_positions(BitPositions::new(&[8]).unwrap());

    let encoded = encode(&carrier, b"H", &options).unwrap();

    assert_eq!(&encoded.as_bytes()[..8], &[0, 0x80, 0, 0, 0x80, 0, 0, 0]);
}
