use {ErrorKind, Result};

/// Transport scrambling control.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportScramblingControl {
    NotScrambled = 0b00,
    Reserved = 0b01,
    ScrambledWithEvenKey = 0b10,
    ScrambledWithOddKey = 0b11,
}
impl TransportScramblingControl {
    pub(super) fn from_u8(n: u8) -> Self {
        match n & 0b11 {
            0b00 => TransportScramblingControl::NotScrambled,
            0b01 => TransportScramblingControl::Reserved,
            0b10 => TransportScramblingControl::ScrambledWithEvenKey,
            _ => TransportScramblingControl::ScrambledWithOddKey,
        }
    }

    /// Returns `true` if the payload is scrambled.
    pub fn is_scrambled(&self) -> bool {
        match *self {
            TransportScramblingControl::ScrambledWithEvenKey
            | TransportScramblingControl::ScrambledWithOddKey => true,
            _ => false,
        }
    }
}

/// Adaptation field control.
///
/// Tells which of the adaptation field and the payload follow the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdaptationFieldControl {
    /// `00`: reserved for future use. Decoders are expected to discard such packets,
    /// but the value is reported as-is.
    Reserved = 0b00,

    /// `01`: no adaptation field, payload only.
    PayloadOnly = 0b01,

    /// `10`: adaptation field only, no payload.
    AdaptationFieldOnly = 0b10,

    /// `11`: adaptation field followed by payload.
    AdaptationFieldAndPayload = 0b11,
}
impl AdaptationFieldControl {
    /// Returns `true` if an adaptation field follows the header.
    pub fn has_adaptation_field(&self) -> bool {
        match *self {
            AdaptationFieldControl::AdaptationFieldOnly
            | AdaptationFieldControl::AdaptationFieldAndPayload => true,
            _ => false,
        }
    }

    /// Returns `true` if the packet carries a payload.
    pub fn has_payload(&self) -> bool {
        match *self {
            AdaptationFieldControl::PayloadOnly
            | AdaptationFieldControl::AdaptationFieldAndPayload => true,
            _ => false,
        }
    }

    pub(super) fn from_u8(n: u8) -> Self {
        match n & 0b11 {
            0b00 => AdaptationFieldControl::Reserved,
            0b01 => AdaptationFieldControl::PayloadOnly,
            0b10 => AdaptationFieldControl::AdaptationFieldOnly,
            _ => AdaptationFieldControl::AdaptationFieldAndPayload,
        }
    }
}

/// Continuity counter.
///
/// Incremented per packet of the same PID and wraps from 15 to 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContinuityCounter(u8);
impl ContinuityCounter {
    /// Maximum counter value.
    pub const MAX: u8 = 0b1111;

    /// Makes a new `ContinuityCounter` instance that has the value `0`.
    pub fn new() -> Self {
        ContinuityCounter(0)
    }

    /// Makes a new `ContinuityCounter` instance with the given value.
    ///
    /// # Errors
    ///
    /// If `n` exceeds `ContinuityCounter::MAX`, it will return an `ErrorKind::InvalidInput` error.
    pub fn from_u8(n: u8) -> Result<Self> {
        track_assert!(n <= Self::MAX, ErrorKind::InvalidInput, "Too large counter: {}", n);
        Ok(ContinuityCounter(n))
    }

    /// Returns the value of the counter.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Returns the value the next packet of the same PID is expected to carry.
    pub fn succ(&self) -> Self {
        ContinuityCounter((self.0 + 1) & Self::MAX)
    }

    pub(super) fn from_low_bits(n: u8) -> Self {
        ContinuityCounter(n & Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptation_field_control_presence_works() {
        let table = [
            (0b00, false, false),
            (0b01, false, true),
            (0b10, true, false),
            (0b11, true, true),
        ];
        for &(bits, adaptation_field, payload) in &table {
            let c = AdaptationFieldControl::from_u8(bits);
            assert_eq!(c as u8, bits);
            assert_eq!(c.has_adaptation_field(), adaptation_field);
            assert_eq!(c.has_payload(), payload);
        }
    }

    #[test]
    fn scrambling_control_works() {
        assert!(!TransportScramblingControl::from_u8(0b00).is_scrambled());
        assert!(!TransportScramblingControl::from_u8(0b01).is_scrambled());
        assert_eq!(
            TransportScramblingControl::from_u8(0b10),
            TransportScramblingControl::ScrambledWithEvenKey
        );
        assert!(TransportScramblingControl::from_u8(0b11).is_scrambled());
    }

    #[test]
    fn continuity_counter_wraps() {
        let c = track_try_unwrap!(ContinuityCounter::from_u8(15));
        assert_eq!(c.succ().as_u8(), 0);
        assert_eq!(ContinuityCounter::new().succ().as_u8(), 1);
        assert!(ContinuityCounter::from_u8(16).is_err());
        assert_eq!(ContinuityCounter::from_low_bits(0xF7).as_u8(), 7);
    }
}
