use std;
use trackable::error::TrackableError;
use trackable::error::{ErrorKind as TrackableErrorKind, ErrorKindExt};

/// This crate specific `Error` type.
#[derive(Debug, Clone, TrackableError)]
pub struct Error(TrackableError<ErrorKind>);
impl From<std::io::Error> for Error {
    fn from(f: std::io::Error) -> Self {
        ErrorKind::Other.cause(f).into()
    }
}

/// Possible error kinds.
///
/// Every malformed packet is reported with one of the first five kinds, so
/// callers can decide per kind whether to skip the packet or resynchronize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The packet does not start with the sync byte (`0x47`).
    MissingSyncByte,

    /// The input is shorter than the 4-byte packet header.
    HeaderTooShort,

    /// The input is shorter than the declared adaptation field length,
    /// or a sub-field overruns the declared length.
    AdaptationFieldTooShort,

    /// The declared transport private data length overruns the adaptation field.
    PrivateDataTooShort,

    /// The adaptation field length violates the rule for the packet's adaptation field control
    /// (exactly 183 without payload, at most 182 with payload).
    InvalidAdaptationFieldLength,

    /// Input is invalid.
    InvalidInput,

    /// Other errors.
    Other,
}
impl TrackableErrorKind for ErrorKind {}
