//! Addressing single bits inside a carrier byte.
//!
//! A [`BitPosition`] is 1-indexed, `1` is the least significant bit and `8`
//! the most significant one. When a byte is rendered as an 8 character
//! big-endian binary string (`format!("{:08b}", b)`), position `p` lives at
//! string index `8 - p`.

use std::fmt;
use std::ops::Deref;

use crate::{BitplaneError, Result};

pub const LSB: u8 = 1;
pub const MSB: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitPosition(u8);

impl BitPosition {
    pub fn new(position: u8) -> Result<Self> {
        if (LSB..=MSB).contains(&position) {
            Ok(Self(position))
        } else {
            Err(BitplaneError::InvalidBitPosition(position))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// zero based index into the big-endian binary string of a byte
    pub fn string_index(self) -> usize {
        (MSB - self.0) as usize
    }

    pub fn mask(self) -> u8 {
        1 << (self.0 - 1)
    }

    pub fn read(self, byte: u8) -> bool {
        byte & self.mask() != 0
    }

    /// returns `byte` with only this bit replaced by `bit`
    pub fn write(self, byte: u8, bit: bool) -> u8 {
        if bit {
            byte | self.mask()
        } else {
            byte & !self.mask()
        }
    }
}

impl TryFrom<u8> for BitPosition {
    type Error = BitplaneError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for BitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered list of bit positions, the order is the fill order within every channel byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPositions(Vec<BitPosition>);

impl BitPositions {
    /// keeps the given order, rejects out of range and repeated positions
    pub fn new(positions: &[u8]) -> Result<Self> {
        let mut checked: Vec<BitPosition> = Vec::with_capacity(positions.len());
        for p in positions {
            let p = BitPosition::new(*p)?;
            if checked.contains(&p) {
                return Err(BitplaneError::DuplicateBitPosition(p.get()));
            }
            checked.push(p);
        }

        Ok(Self(checked))
    }

    /// sorts ascending and drops repetitions before validating, meant for user input
    pub fn sorted(positions: &[u8]) -> Result<Self> {
        let mut positions = positions.to_vec();
        positions.sort_unstable();
        positions.dedup();
        Self::new(&positions)
    }

    pub fn lsb() -> Self {
        Self(vec![BitPosition(LSB)])
    }
}

impl Default for BitPositions {
    fn default() -> Self {
        Self::lsb()
    }
}

impl Deref for BitPositions {
    type Target = [BitPosition];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for BitPositions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", list.join(","))
    }
}
