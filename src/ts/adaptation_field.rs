use byteorder::{BigEndian, ReadBytesExt};

use time::{ClockReference, Timestamp};
use {ErrorKind, Result};

const DISCONTINUITY_INDICATOR: u8 = 0b1000_0000;
const RANDOM_ACCESS_INDICATOR: u8 = 0b0100_0000;
const ES_PRIORITY_INDICATOR: u8 = 0b0010_0000;
const PCR_FLAG: u8 = 0b0001_0000;
const OPCR_FLAG: u8 = 0b0000_1000;
const SPLICING_POINT_FLAG: u8 = 0b0000_0100;
const TRANSPORT_PRIVATE_DATA_FLAG: u8 = 0b0000_0010;
const ADAPTATION_FIELD_EXTENSION_FLAG: u8 = 0b0000_0001;

const LTW_FLAG: u8 = 0b1000_0000;
const PIECEWISE_RATE_FLAG: u8 = 0b0100_0000;
const SEAMLESS_SPLICE_FLAG: u8 = 0b0010_0000;

/// Adaptation field.
///
/// Optional sub-fields are `Some` exactly when their presence flag is set.
/// Borrowed sub-slices point into the packet the field was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptationField<'a> {
    /// Number of bytes following the length byte.
    pub adaptation_field_length: u8,
    #[allow(missing_docs)]
    pub discontinuity_indicator: bool,
    #[allow(missing_docs)]
    pub random_access_indicator: bool,
    #[allow(missing_docs)]
    pub es_priority_indicator: bool,
    #[allow(missing_docs)]
    pub pcr: Option<ClockReference>,
    #[allow(missing_docs)]
    pub opcr: Option<ClockReference>,

    /// Number of packets of the same PID until the splicing point.
    /// Negative values count packets since the splicing point.
    pub splice_countdown: Option<i8>,
    #[allow(missing_docs)]
    pub transport_private_data: Option<&'a [u8]>,
    #[allow(missing_docs)]
    pub extension: Option<AdaptationExtensionField>,

    /// Bytes between the last decoded sub-field and the declared end of the field.
    pub stuffing_bytes: &'a [u8],
}
impl<'a> AdaptationField<'a> {
    /// Maximum `adaptation_field_length` of a packet that also carries a payload.
    pub const MAX_LEN_WITH_PAYLOAD: u8 = 182;

    /// `adaptation_field_length` of a packet without payload.
    pub const LEN_WITHOUT_PAYLOAD: u8 = 183;

    /// Decodes an adaptation field from the bytes following the packet header.
    ///
    /// Bytes beyond `1 + adaptation_field_length` are left untouched.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::AdaptationFieldTooShort` if the declared length exceeds the input,
    ///   or if a flagged sub-field does not fit into the declared length.
    /// - `ErrorKind::PrivateDataTooShort` if the declared transport private data length
    ///   exceeds the rest of the field.
    pub fn read_from(bytes: &'a [u8]) -> Result<Self> {
        track_assert!(
            !bytes.is_empty(),
            ErrorKind::AdaptationFieldTooShort,
            "Missing adaptation_field_length"
        );
        let adaptation_field_length = bytes[0];
        let len = usize::from(adaptation_field_length);
        track_assert!(
            bytes.len() > len,
            ErrorKind::AdaptationFieldTooShort,
            "adaptation_field_length={}, available={}",
            len,
            bytes.len() - 1
        );
        let mut reader = &bytes[1..=len];
        if len == 0 {
            return Ok(AdaptationField {
                adaptation_field_length,
                discontinuity_indicator: false,
                random_access_indicator: false,
                es_priority_indicator: false,
                pcr: None,
                opcr: None,
                splice_countdown: None,
                transport_private_data: None,
                extension: None,
                stuffing_bytes: &[],
            });
        }

        let flags = track_io!(reader.read_u8())?;
        let pcr = if flags & PCR_FLAG != 0 {
            track!(ensure_remaining(reader, ClockReference::SIZE, "PCR"))?;
            Some(track!(ClockReference::read_from(&mut reader))?)
        } else {
            None
        };
        let opcr = if flags & OPCR_FLAG != 0 {
            track!(ensure_remaining(reader, ClockReference::SIZE, "OPCR"))?;
            Some(track!(ClockReference::read_from(&mut reader))?)
        } else {
            None
        };
        let splice_countdown = if flags & SPLICING_POINT_FLAG != 0 {
            track!(ensure_remaining(reader, 1, "splice_countdown"))?;
            Some(track_io!(reader.read_i8())?)
        } else {
            None
        };
        let transport_private_data = if flags & TRANSPORT_PRIVATE_DATA_FLAG != 0 {
            track!(ensure_remaining(reader, 1, "transport_private_data_length"))?;
            let n = usize::from(track_io!(reader.read_u8())?);
            track_assert!(
                reader.len() >= n,
                ErrorKind::PrivateDataTooShort,
                "transport_private_data_length={}, remaining={}",
                n,
                reader.len()
            );
            let (data, rest) = reader.split_at(n);
            reader = rest;
            Some(data)
        } else {
            None
        };
        let extension = if flags & ADAPTATION_FIELD_EXTENSION_FLAG != 0 {
            Some(track!(AdaptationExtensionField::read_from(&mut reader))?)
        } else {
            None
        };

        Ok(AdaptationField {
            adaptation_field_length,
            discontinuity_indicator: flags & DISCONTINUITY_INDICATOR != 0,
            random_access_indicator: flags & RANDOM_ACCESS_INDICATOR != 0,
            es_priority_indicator: flags & ES_PRIORITY_INDICATOR != 0,
            pcr,
            opcr,
            splice_countdown,
            transport_private_data,
            extension,
            stuffing_bytes: reader,
        })
    }

    /// Returns the number of bytes the field occupies in the packet, including the length byte.
    pub fn total_len(&self) -> usize {
        1 + usize::from(self.adaptation_field_length)
    }
}

/// Adaptation field extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdaptationExtensionField {
    /// Number of bytes following the length byte, including reserved bytes.
    pub adaptation_extension_field_length: u8,
    #[allow(missing_docs)]
    pub legal_time_window: Option<LegalTimeWindow>,

    /// 22-bit piecewise rate in units of 50 bytes/second.
    pub piecewise_rate: Option<u32>,
    #[allow(missing_docs)]
    pub seamless_splice: Option<SeamlessSplice>,
}
impl AdaptationExtensionField {
    fn read_from<'a>(reader: &mut &'a [u8]) -> Result<Self> {
        track!(ensure_remaining(reader, 1, "adaptation_field_extension_length"))?;
        let adaptation_extension_field_length = track_io!(reader.read_u8())?;
        let len = usize::from(adaptation_extension_field_length);
        track!(ensure_remaining(reader, len, "adaptation field extension"))?;

        let bytes: &'a [u8] = *reader;
        let (mut body, rest) = bytes.split_at(len);
        *reader = rest;
        if len == 0 {
            return Ok(AdaptationExtensionField {
                adaptation_extension_field_length,
                legal_time_window: None,
                piecewise_rate: None,
                seamless_splice: None,
            });
        }

        let flags = track_io!(body.read_u8())?;
        let legal_time_window = if flags & LTW_FLAG != 0 {
            track!(ensure_remaining(body, 2, "ltw_offset"))?;
            let n = track_io!(body.read_u16::<BigEndian>())?;
            Some(LegalTimeWindow {
                is_valid: n & 0x8000 != 0,
                offset: n & 0x7FFF,
            })
        } else {
            None
        };
        let piecewise_rate = if flags & PIECEWISE_RATE_FLAG != 0 {
            track!(ensure_remaining(body, 3, "piecewise_rate"))?;
            let n = track_io!(body.read_u24::<BigEndian>())?;
            Some(n & 0x3F_FFFF)
        } else {
            None
        };
        let seamless_splice = if flags & SEAMLESS_SPLICE_FLAG != 0 {
            track!(ensure_remaining(body, 5, "DTS_next_AU"))?;
            let n = track_io!(body.read_uint::<BigEndian>(5))?;
            Some(SeamlessSplice {
                splice_type: Timestamp::prefix_of_u40(n),
                dts_next_access_unit: Timestamp::from_u40(n),
            })
        } else {
            None
        };

        Ok(AdaptationExtensionField {
            adaptation_extension_field_length,
            legal_time_window,
            piecewise_rate,
            seamless_splice,
        })
    }
}

/// Legal time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalTimeWindow {
    /// `ltw_valid_flag`.
    pub is_valid: bool,

    /// 15-bit `ltw_offset` in units of `300 / fs` seconds.
    pub offset: u16,
}

/// Seamless splice parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeamlessSplice {
    /// 4-bit splice type.
    pub splice_type: u8,

    /// Decoding time of the first access unit after the splicing point.
    pub dts_next_access_unit: Timestamp,
}

fn ensure_remaining(reader: &[u8], required: usize, field: &str) -> Result<()> {
    track_assert!(
        reader.len() >= required,
        ErrorKind::AdaptationFieldTooShort,
        "No room for {}: required={}, remaining={}",
        field,
        required,
        reader.len()
    );
    Ok(())
}
