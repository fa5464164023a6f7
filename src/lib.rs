//! MPEG2-TS packet decoding library.
//!
//! Decodes fixed size transport stream packets into a typed view over the
//! caller's buffer: the 4-byte header, the optional adaptation field (with its
//! PCR/OPCR pairs and extension field) and the payload slice.
//!
//! # Examples
//!
//! ```
//! use mpeg2ts_packet::ts::{AdaptationFieldControl, TsPacket};
//!
//! let mut bytes = vec![0xFF; TsPacket::SIZE];
//! bytes[..4].copy_from_slice(&[0x47, 0x41, 0x00, 0x17]);
//!
//! let packet = TsPacket::read_from(&bytes).unwrap();
//! assert_eq!(packet.header.pid.as_u16(), 0x0100);
//! assert!(packet.header.payload_unit_start_indicator);
//! assert_eq!(
//!     packet.header.adaptation_field_control,
//!     AdaptationFieldControl::PayloadOnly
//! );
//! assert_eq!(packet.payload.map(|p| p.len()), Some(184));
//! ```
//!
//! # References
//!
//! - [MPEG transport stream](https://en.wikipedia.org/wiki/MPEG_transport_stream)
#![warn(missing_docs)]
extern crate byteorder;
extern crate log;
#[macro_use]
extern crate trackable;

pub use error::{Error, ErrorKind};

macro_rules! track_io {
    ($expr:expr) => {
        $expr.map_err(|e: ::std::io::Error| track!(::Error::from(e)))
    };
}

pub mod time;
pub mod ts;

mod error;

/// This crate specific `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
