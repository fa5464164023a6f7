use super::{AdaptationFieldControl, ContinuityCounter, Pid, TransportScramblingControl};
use {ErrorKind, Result};

/// TS packet header.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TsHeader {
    /// Sync byte, always `TsPacket::SYNC_BYTE` in a decoded packet.
    pub sync_byte: u8,
    pub transport_error_indicator: bool,
    pub payload_unit_start_indicator: bool,
    pub transport_priority: bool,
    pub pid: Pid,
    pub transport_scrambling_control: TransportScramblingControl,
    pub adaptation_field_control: AdaptationFieldControl,
    pub continuity_counter: ContinuityCounter,
}
impl TsHeader {
    /// Header size in bytes.
    pub const SIZE: usize = 4;

    /// Unpacks the first four bytes of `bytes`.
    ///
    /// The sync byte is reported but not checked here.
    ///
    /// # Errors
    ///
    /// If `bytes` is shorter than `TsHeader::SIZE`, it will return an `ErrorKind::HeaderTooShort` error.
    pub fn read_from(bytes: &[u8]) -> Result<Self> {
        track_assert!(
            bytes.len() >= Self::SIZE,
            ErrorKind::HeaderTooShort,
            "Input too short for TS header: {} bytes",
            bytes.len()
        );

        let n = bytes[1];
        let transport_error_indicator = (n & 0b1000_0000) != 0;
        let payload_unit_start_indicator = (n & 0b0100_0000) != 0;
        let transport_priority = (n & 0b0010_0000) != 0;
        let pid = Pid::from_header_bytes(n, bytes[2]);

        let n = bytes[3];
        let transport_scrambling_control = TransportScramblingControl::from_u8(n >> 6);
        let adaptation_field_control = AdaptationFieldControl::from_u8(n >> 4);
        let continuity_counter = ContinuityCounter::from_low_bits(n);

        Ok(TsHeader {
            sync_byte: bytes[0],
            transport_error_indicator,
            payload_unit_start_indicator,
            transport_priority,
            pid,
            transport_scrambling_control,
            adaptation_field_control,
            continuity_counter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_from_works() {
        let header = track_try_unwrap!(TsHeader::read_from(&[0x47, 0xBF, 0xFF, 0xB5]));
        assert_eq!(header.sync_byte, 0x47);
        assert!(header.transport_error_indicator);
        assert!(!header.payload_unit_start_indicator);
        assert!(header.transport_priority);
        assert_eq!(header.pid.as_u16(), 0x1FFF);
        assert_eq!(
            header.transport_scrambling_control,
            TransportScramblingControl::ScrambledWithEvenKey
        );
        assert_eq!(
            header.adaptation_field_control,
            AdaptationFieldControl::AdaptationFieldAndPayload
        );
        assert_eq!(header.continuity_counter.as_u8(), 5);
    }

    #[test]
    fn pid_round_trip_works() {
        for &v in &[0u16, 1, 4095, 8191] {
            let bytes = [0x47, (v >> 8) as u8 | 0b0100_0000, v as u8, 0x10];
            let header = track_try_unwrap!(TsHeader::read_from(&bytes));
            assert_eq!(header.pid.as_u16(), v);
            assert!(header.payload_unit_start_indicator);
            assert!(!header.transport_error_indicator);
        }
    }

    #[test]
    fn reserved_adaptation_field_control_is_reported() {
        let header = track_try_unwrap!(TsHeader::read_from(&[0x47, 0x00, 0x00, 0x0F]));
        assert_eq!(header.adaptation_field_control, AdaptationFieldControl::Reserved);
        assert_eq!(header.continuity_counter.as_u8(), 15);
    }

    #[test]
    fn short_input_fails() {
        let e = TsHeader::read_from(&[0x47, 0x00, 0x00]).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::HeaderTooShort);
    }
}
