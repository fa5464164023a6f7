use super::{AdaptationField, AdaptationFieldControl, TsHeader};
use time::ClockReference;
use {ErrorKind, Result};

/// Decoded TS packet.
///
/// The packet borrows the buffer it was decoded from, so it cannot outlive
/// (or observe later mutations of) that buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsPacket<'a> {
    /// The whole packet as passed to `TsPacket::read_from`.
    pub bytes: &'a [u8],
    #[allow(missing_docs)]
    pub header: TsHeader,
    #[allow(missing_docs)]
    pub adaptation_field: Option<AdaptationField<'a>>,

    /// Bytes following the header and the adaptation field, if the packet carries a payload.
    pub payload: Option<&'a [u8]>,
}
impl<'a> TsPacket<'a> {
    /// Size of a TS packet in bytes.
    pub const SIZE: usize = 188;

    /// Synchronization byte.
    ///
    /// Each packet starts with this byte.
    pub const SYNC_BYTE: u8 = 0x47;

    /// Decodes a packet.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::HeaderTooShort` if `bytes` cannot hold the 4-byte header.
    /// - `ErrorKind::MissingSyncByte` if `bytes` does not start with `TsPacket::SYNC_BYTE`.
    /// - `ErrorKind::AdaptationFieldTooShort` / `ErrorKind::PrivateDataTooShort`
    ///   if a declared length overruns the input.
    /// - `ErrorKind::InvalidAdaptationFieldLength` if the adaptation field length breaks
    ///   the rule for the adaptation field control.
    pub fn read_from(bytes: &'a [u8]) -> Result<Self> {
        track_assert!(!bytes.is_empty(), ErrorKind::HeaderTooShort, "Empty input");
        track_assert_eq!(bytes[0], Self::SYNC_BYTE, ErrorKind::MissingSyncByte);

        let header = track!(TsHeader::read_from(bytes))?;
        let control = header.adaptation_field_control;
        let rest = &bytes[TsHeader::SIZE..];

        let adaptation_field = if control.has_adaptation_field() {
            let adaptation_field = track!(AdaptationField::read_from(rest), "header={:?}", header)?;
            track!(check_adaptation_field_length(
                control,
                adaptation_field.adaptation_field_length
            ))?;
            Some(adaptation_field)
        } else {
            None
        };

        let offset = payload_offset(adaptation_field.as_ref());
        track_assert!(
            offset <= bytes.len(),
            ErrorKind::AdaptationFieldTooShort,
            "payload_offset={}, packet_len={}",
            offset,
            bytes.len()
        );
        let payload = if control.has_payload() {
            Some(&bytes[offset..])
        } else {
            None
        };

        Ok(TsPacket {
            bytes,
            header,
            adaptation_field,
            payload,
        })
    }

    /// Returns the offset of the payload from the start of the packet.
    ///
    /// This is `4` plus the size of the adaptation field (including its length byte) if present.
    pub fn payload_offset(&self) -> usize {
        payload_offset(self.adaptation_field.as_ref())
    }

    /// Returns the PCR carried in the adaptation field, if any.
    pub fn pcr(&self) -> Option<ClockReference> {
        self.adaptation_field.as_ref().and_then(|a| a.pcr)
    }
}

fn payload_offset(adaptation_field: Option<&AdaptationField>) -> usize {
    TsHeader::SIZE + adaptation_field.map_or(0, |a| a.total_len())
}

fn check_adaptation_field_length(control: AdaptationFieldControl, len: u8) -> Result<()> {
    match control {
        AdaptationFieldControl::AdaptationFieldOnly => {
            track_assert_eq!(
                len,
                AdaptationField::LEN_WITHOUT_PAYLOAD,
                ErrorKind::InvalidAdaptationFieldLength
            );
        }
        AdaptationFieldControl::AdaptationFieldAndPayload => {
            track_assert!(
                len <= AdaptationField::MAX_LEN_WITH_PAYLOAD,
                ErrorKind::InvalidAdaptationFieldLength,
                "adaptation_field_length={}",
                len
            );
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts::Pid;

    fn packet(afc: u8) -> Vec<u8> {
        let mut bytes = vec![0xFF; TsPacket::SIZE];
        bytes[..4].copy_from_slice(&[0x47, 0x01, 0x00, (afc << 4) | 0x3]);
        bytes
    }

    #[test]
    fn payload_only_works() {
        let bytes = packet(0b01);
        let p = track_try_unwrap!(TsPacket::read_from(&bytes));
        assert_eq!(p.header.pid.as_u16(), 0x100);
        assert_eq!(p.header.continuity_counter.as_u8(), 3);
        assert!(p.adaptation_field.is_none());
        assert_eq!(p.payload_offset(), 4);
        assert_eq!(p.payload, Some(&bytes[4..]));
        assert_eq!(p.bytes.len(), TsPacket::SIZE);
    }

    #[test]
    fn reserved_control_has_neither_field() {
        // Only the header is present; nothing past byte 4 is touched.
        let bytes = [0x47, 0x1F, 0xFF, 0x00];
        let p = track_try_unwrap!(TsPacket::read_from(&bytes));
        assert_eq!(p.header.adaptation_field_control, AdaptationFieldControl::Reserved);
        assert_eq!(p.header.pid.as_u16(), Pid::NULL);
        assert!(p.adaptation_field.is_none());
        assert!(p.payload.is_none());
        assert_eq!(p.payload_offset(), 4);
    }

    #[test]
    fn adaptation_field_only_requires_183() {
        let mut bytes = packet(0b10);
        bytes[4] = 183;
        bytes[5] = 0x00;
        let p = track_try_unwrap!(TsPacket::read_from(&bytes));
        assert_eq!(p.adaptation_field.as_ref().map(|a| a.adaptation_field_length), Some(183));
        assert!(p.payload.is_none());
        assert_eq!(p.payload_offset(), TsPacket::SIZE);

        bytes[4] = 182;
        let e = TsPacket::read_from(&bytes).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::InvalidAdaptationFieldLength);
    }

    #[test]
    fn adaptation_field_and_payload_works() {
        let mut bytes = packet(0b11);
        bytes[4] = 7;
        bytes[5] = 0x10;
        bytes[6..12].copy_from_slice(&[0x00, 0x00, 0xAF, 0xC8, 0x7E, 0x00]);
        let p = track_try_unwrap!(TsPacket::read_from(&bytes));
        assert_eq!(p.pcr().map(|p| p.base), Some(90_000));
        assert_eq!(p.payload_offset(), 12);
        assert_eq!(p.payload.map(|p| p.len()), Some(TsPacket::SIZE - 12));

        bytes[4] = 182;
        bytes[5] = 0x00;
        let p = track_try_unwrap!(TsPacket::read_from(&bytes));
        assert_eq!(p.payload.map(|p| p.len()), Some(1));

        bytes[4] = 183;
        let e = TsPacket::read_from(&bytes).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::InvalidAdaptationFieldLength);
    }

    #[test]
    fn missing_sync_byte_fails() {
        let mut bytes = packet(0b01);
        bytes[0] = 0x00;
        let e = TsPacket::read_from(&bytes).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::MissingSyncByte);
    }

    #[test]
    fn short_inputs_fail() {
        let e = TsPacket::read_from(&[]).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::HeaderTooShort);

        let e = TsPacket::read_from(&[0x47, 0x00]).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::HeaderTooShort);

        let mut bytes = packet(0b11);
        bytes[4] = 150;
        let e = TsPacket::read_from(&bytes[..10]).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::AdaptationFieldTooShort);

        let e = TsPacket::read_from(&bytes[..4]).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::AdaptationFieldTooShort);
    }
}
