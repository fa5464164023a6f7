//! Transport stream packets.
//!
//! # References
//!
//! - [MPEG transport stream](https://en.wikipedia.org/wiki/MPEG_transport_stream)
pub use self::adaptation_field::{
    AdaptationExtensionField, AdaptationField, LegalTimeWindow, SeamlessSplice,
};
pub use self::header::TsHeader;
pub use self::packet::TsPacket;
pub use self::pid::Pid;
pub use self::reader::TsPacketReader;
pub use self::types::{AdaptationFieldControl, ContinuityCounter, TransportScramblingControl};

mod adaptation_field;
mod header;
mod packet;
mod pid;
mod reader;
mod types;
