use log::debug;

use crate::bit_position::BitPositions;
use crate::{BitplaneError, Result};

/// maximum number of bits a carrier can take: `units × channels × len(positions)`
pub fn capacity_bits(unit_count: usize, channels_per_unit: usize, positions: &BitPositions) -> u64 {
    unit_count as u64 * channels_per_unit as u64 * positions.len() as u64
}

/// bit length of the framed payload, the delimiter counts as well
pub fn framed_bits(payload_len: usize, delimiter_len: usize) -> u64 {
    (payload_len as u64 + delimiter_len as u64) * 8
}

/// payload bytes that still fit once the delimiter is accounted for
pub fn max_payload_bytes(capacity_bits: u64, delimiter_len: usize) -> u64 {
    (capacity_bits / 8).saturating_sub(delimiter_len as u64)
}

/// pre-flight gate for encoding
pub fn ensure_fits(needed_bits: u64, available_bits: u64) -> Result<()> {
    debug!("capacity check: {needed_bits} bits needed, {available_bits} bits available");
    if needed_bits > available_bits {
        return Err(BitplaneError::CapacityExceeded {
            needed_bits,
            available_bits,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_multiply_units_channels_and_positions() {
        let positions = BitPositions::new(&[1, 2]).unwrap();
        assert_eq!(capacity_bits(4, 3, &positions), 24);
        assert_eq!(capacity_bits(12, 1, &BitPositions::lsb()), 12);
        assert_eq!(capacity_bits(0, 3, &positions), 0);
    }

    #[test]
    fn should_count_the_delimiter_into_the_framed_length() {
        assert_eq!(framed_bits(2, 2), 32);
        assert_eq!(framed_bits(0, 1), 8);
    }

    #[test]
    fn should_accept_exact_fit_and_reject_one_bit_more() {
        assert!(ensure_fits(32, 32).is_ok());
        match ensure_fits(33, 32) {
            Err(BitplaneError::CapacityExceeded {
                needed_bits,
                available_bits,
            }) => {
                assert_eq!(needed_bits, 33);
                assert_eq!(available_bits, 32);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn max_payload_should_saturate() {
        assert_eq!(max_payload_bytes(32, 2), 2);
        assert_eq!(max_payload_bytes(12, 2), 0);
        assert_eq!(max_payload_bytes(15, 0), 1);
    }
}
