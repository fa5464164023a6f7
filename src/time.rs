//! Clock references and timestamps carried in adaptation fields.
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

use {ErrorKind, Result};

/// Bit positions of the 48-bit program clock reference shape.
///
/// `base(33) | reserved(6) | extension(9)`
mod pcr_bits {
    pub const BASE_SHIFT: u32 = 15;
    pub const BASE_MASK: u64 = (1 << 33) - 1;
    pub const RESERVED_SHIFT: u32 = 9;
    pub const RESERVED_MASK: u64 = 0b11_1111;
    pub const EXTENSION_MASK: u64 = 0b1_1111_1111;
}

/// Bit positions of the 40-bit timestamp shape.
///
/// `prefix(4) | ts[32..30](3) | marker | ts[29..15](15) | marker | ts[14..0](15) | marker`
mod timestamp_bits {
    pub const HIGH_SHIFT: u32 = 33;
    pub const HIGH_MASK: u64 = 0b111;
    pub const MIDDLE_SHIFT: u32 = 17;
    pub const MIDDLE_MASK: u64 = 0x7FFF;
    pub const LOW_SHIFT: u32 = 1;
    pub const LOW_MASK: u64 = 0x7FFF;
    pub const PREFIX_SHIFT: u32 = 36;
    pub const PREFIX_MASK: u64 = 0b1111;
}

/// Program clock reference (PCR) and original program clock reference (OPCR).
///
/// The value is encoded in two parts: a 33-bit base counted at 90 kHz and a
/// 9-bit extension counted at 27 MHz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockReference {
    /// 33-bit base (90 kHz).
    pub base: u64,

    /// 6 reserved bits between the base and the extension.
    pub reserved: u8,

    /// 9-bit extension (27 MHz, `0..=299` in well-formed streams).
    pub extension: u16,
}
impl ClockReference {
    /// Encoded size in bytes.
    pub const SIZE: usize = 6;

    /// Maximum value of the base part.
    pub const MAX_BASE: u64 = (1 << 33) - 1;

    /// Maximum value of the extension part.
    pub const MAX_EXTENSION: u16 = (1 << 9) - 1;

    /// Frequency of the 27 MHz system clock.
    pub const FREQUENCY: u64 = 27_000_000;

    /// Splits a 48-bit big-endian quantity into base, reserved bits and extension.
    pub fn from_u48(n: u64) -> Self {
        ClockReference {
            base: (n >> pcr_bits::BASE_SHIFT) & pcr_bits::BASE_MASK,
            reserved: ((n >> pcr_bits::RESERVED_SHIFT) & pcr_bits::RESERVED_MASK) as u8,
            extension: (n & pcr_bits::EXTENSION_MASK) as u16,
        }
    }

    /// Returns the clock value in 27 MHz units (`base * 300 + extension`).
    pub fn as_27mhz(&self) -> u64 {
        self.base * 300 + u64::from(self.extension)
    }

    pub(crate) fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let n = track_io!(reader.read_uint::<BigEndian>(Self::SIZE))?;
        Ok(Self::from_u48(n))
    }
}

/// 33-bit timestamp counted at 90 kHz.
///
/// Used for `DTS_next_AU` of the seamless splice extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(u64);
impl Timestamp {
    /// 90 kHz.
    pub const RESOLUTION: u64 = 90_000;

    /// Maximum timestamp value.
    pub const MAX: u64 = (1 << 33) - 1;

    /// Makes a new `Timestamp` instance.
    ///
    /// # Errors
    ///
    /// If `n` exceeds `Timestamp::MAX`, it will return an `ErrorKind::InvalidInput` error.
    pub fn new(n: u64) -> Result<Self> {
        track_assert!(n <= Self::MAX, ErrorKind::InvalidInput, "Too large value: {}", n);
        Ok(Timestamp(n))
    }

    /// Assembles a timestamp from the 40-bit marker-bit shape.
    ///
    /// The 4-bit prefix and the three marker bits are discarded without being checked.
    pub fn from_u40(n: u64) -> Self {
        use self::timestamp_bits::*;
        let high = (n >> HIGH_SHIFT) & HIGH_MASK;
        let middle = (n >> MIDDLE_SHIFT) & MIDDLE_MASK;
        let low = (n >> LOW_SHIFT) & LOW_MASK;
        Timestamp((high << 30) | (middle << 15) | low)
    }

    /// Returns the 4-bit prefix of the 40-bit shape, which precedes the timestamp bits.
    pub(crate) fn prefix_of_u40(n: u64) -> u8 {
        ((n >> timestamp_bits::PREFIX_SHIFT) & timestamp_bits::PREFIX_MASK) as u8
    }

    /// Returns the value of the timestamp.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}
